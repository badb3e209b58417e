//! Concurrent match registry for a live scoreboard.
//!
//! This crate provides the scoreboard core:
//!
//! - **MatchRegistry**: the concurrent store mapping each team key to its
//!   current match. A team can be in at most one live match, starting a
//!   match registers both keys all-or-nothing, and summaries are consistent
//!   ordered snapshots.
//! - **MatchValidator**: the validation strategy checked before any registry
//!   mutation. The registry itself never re-validates.
//! - **Scoreboard**: the facade pairing a registry with a validator.
//!
//! ## Concurrency model
//!
//! Independent worker threads call registry operations directly; there is no
//! coarse lock. The map handles per-key atomicity, each live match carries
//! its own short-lived exclusion lock, and two-key registration is emulated
//! by reserving the keys one at a time with rollback of the first when the
//! second is taken.

#![deny(unsafe_code)]

pub mod board;
pub mod config;
pub mod error;
pub mod registry;
pub mod validator;

mod entry;
mod sequence;

// Re-exports
pub use board::Scoreboard;
pub use config::RegistryConfig;
pub use error::{RegistryError, Result, ScoreboardError, ValidationError};
pub use registry::MatchRegistry;
pub use validator::{MatchValidator, StandardValidator};
