//! Registry configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tuning knobs for the match registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Bounded wait for a match's exclusion lock during update and remove.
    /// Timing out raises `MatchLocked`; the lock is only held across short
    /// critical sections, so callers should retry without backoff.
    pub lock_timeout: Duration,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            lock_timeout: Duration::from_millis(100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lock_timeout() {
        assert_eq!(RegistryConfig::default().lock_timeout, Duration::from_millis(100));
    }
}
