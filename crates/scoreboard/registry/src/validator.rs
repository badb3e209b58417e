//! Match input validation.
//!
//! Strategy interface checked before any registry mutation; the registry
//! itself never re-validates. Substitute another implementation to apply a
//! different rule set.

use scoreboard_types::TeamSide;

use crate::error::ValidationError;

/// Validation entry points, one per mutating operation.
pub trait MatchValidator: Send + Sync {
    fn validate_start(&self, home: &str, away: &str) -> Result<(), ValidationError>;

    fn validate_update(
        &self,
        home: &str,
        away: &str,
        home_score: u64,
        away_score: u64,
    ) -> Result<(), ValidationError>;

    fn validate_remove(&self, home: &str, away: &str) -> Result<(), ValidationError>;
}

/// Default rules: team names must be non-empty and at most
/// [`StandardValidator::DEFAULT_MAX_NAME_LEN`] characters unless configured
/// otherwise.
///
/// Scores are unsigned end to end, so there is no sign rule left to enforce
/// on update; the names are still checked because they address the map.
#[derive(Debug, Clone)]
pub struct StandardValidator {
    max_name_len: usize,
}

impl StandardValidator {
    pub const DEFAULT_MAX_NAME_LEN: usize = 256;

    pub fn new() -> Self {
        Self {
            max_name_len: Self::DEFAULT_MAX_NAME_LEN,
        }
    }

    pub fn with_max_name_len(max_name_len: usize) -> Self {
        Self { max_name_len }
    }

    fn check_name(&self, side: TeamSide, name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::EmptyTeamName { side });
        }
        let len = name.chars().count();
        if len > self.max_name_len {
            return Err(ValidationError::TeamNameTooLong {
                side,
                len,
                max: self.max_name_len,
            });
        }
        Ok(())
    }

    fn check_names(&self, home: &str, away: &str) -> Result<(), ValidationError> {
        self.check_name(TeamSide::Home, home)?;
        self.check_name(TeamSide::Away, away)
    }
}

impl Default for StandardValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchValidator for StandardValidator {
    fn validate_start(&self, home: &str, away: &str) -> Result<(), ValidationError> {
        self.check_names(home, away)
    }

    fn validate_update(
        &self,
        home: &str,
        away: &str,
        _home_score: u64,
        _away_score: u64,
    ) -> Result<(), ValidationError> {
        self.check_names(home, away)
    }

    fn validate_remove(&self, home: &str, away: &str) -> Result<(), ValidationError> {
        self.check_names(home, away)
    }
}
