//! Score pair for a live match.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One immutable score pair.
///
/// A match's score is only ever replaced as a whole pair, never one side at
/// a time, so a reader can never observe the home side of one update next to
/// the away side of another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub home: u64,
    pub away: u64,
}

impl Score {
    pub fn new(home: u64, away: u64) -> Self {
        Self { home, away }
    }

    /// Combined total of both sides, the primary summary sort key.
    pub fn total(&self) -> u64 {
        self.home.saturating_add(self.away)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.home, self.away)
    }
}
