//! Scoreboard error types.

use scoreboard_types::TeamSide;
use thiserror::Error;

/// Errors raised by the concurrent match registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Either key of a `start` call is already registered. The registry is
    /// unchanged: a half-done reservation is rolled back before this is
    /// raised.
    #[error("team is already playing: {0}")]
    AlreadyPlaying(String),

    /// The referenced team has no match in progress.
    #[error("no match in progress for team: {0}")]
    MatchNotStarted(String),

    /// The match's exclusion lock could not be acquired within the bounded
    /// wait. Retryable: the lock is only ever held across short critical
    /// sections, so callers should retry immediately.
    #[error("match is locked by a concurrent operation")]
    MatchLocked,
}

/// Validation errors, raised before the registry is entered. Registry state
/// is never touched when one of these is returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{side} team name is empty")]
    EmptyTeamName { side: TeamSide },

    #[error("{side} team name is {len} characters, maximum is {max}")]
    TeamNameTooLong {
        side: TeamSide,
        len: usize,
        max: usize,
    },
}

/// Unified error surface of the [`Scoreboard`](crate::board::Scoreboard)
/// facade.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreboardError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
