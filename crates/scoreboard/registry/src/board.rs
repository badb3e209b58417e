//! Validating scoreboard facade.
//!
//! Pairs a [`MatchRegistry`] with a [`MatchValidator`]: every mutating call
//! is validated first and touches no registry state when validation fails.

use scoreboard_types::MatchSnapshot;

use crate::error::ScoreboardError;
use crate::registry::MatchRegistry;
use crate::validator::{MatchValidator, StandardValidator};

/// The live scoreboard: validation in front, concurrent registry behind.
pub struct Scoreboard {
    registry: MatchRegistry,
    validator: Box<dyn MatchValidator>,
}

impl Scoreboard {
    /// Scoreboard with a fresh registry and the standard validation rules.
    pub fn new() -> Self {
        Self::with_parts(MatchRegistry::new(), Box::new(StandardValidator::new()))
    }

    pub fn with_validator(validator: Box<dyn MatchValidator>) -> Self {
        Self::with_parts(MatchRegistry::new(), validator)
    }

    pub fn with_parts(registry: MatchRegistry, validator: Box<dyn MatchValidator>) -> Self {
        Self {
            registry,
            validator,
        }
    }

    /// Start a new match at 0-0.
    pub fn start_match(&self, home: &str, away: &str) -> Result<MatchSnapshot, ScoreboardError> {
        self.validator.validate_start(home, away)?;
        Ok(self.registry.start(home, away)?)
    }

    /// Replace a live match's score with a new absolute pair.
    pub fn update_score(
        &self,
        home: &str,
        away: &str,
        home_score: u64,
        away_score: u64,
    ) -> Result<MatchSnapshot, ScoreboardError> {
        self.validator
            .validate_update(home, away, home_score, away_score)?;
        Ok(self
            .registry
            .update_score(home, away, home_score, away_score)?)
    }

    /// Finish a live match, removing it from the board.
    pub fn remove_match(&self, home: &str, away: &str) -> Result<(), ScoreboardError> {
        self.validator.validate_remove(home, away)?;
        Ok(self.registry.remove(home, away)?)
    }

    /// Ordered snapshot of the board; see [`MatchRegistry::summary`].
    pub fn summary(&self) -> Vec<MatchSnapshot> {
        self.registry.summary()
    }

    /// Reset hook for tests and operations; see [`MatchRegistry::clear`].
    pub fn clear_all_matches(&self) {
        self.registry.clear()
    }

    pub fn registry(&self) -> &MatchRegistry {
        &self.registry
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}
