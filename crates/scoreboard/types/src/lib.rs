//! Shared value types for the live scoreboard.
//!
//! This crate holds the vocabulary both sides of the system speak: the score
//! pair, the point-in-time match snapshot returned by summaries, and the
//! home/away discriminator used in validation messages. The concurrent
//! registry itself lives in `scoreboard-registry`.

#![deny(unsafe_code)]

pub mod score;
pub mod side;
pub mod snapshot;

// Re-exports
pub use score::Score;
pub use side::TeamSide;
pub use snapshot::{summary_order, MatchSnapshot};
