//! Process-wide match sequence counter.
//!
//! Every started match draws its sequence number here, shared by all
//! registry instances in the process. Numbers are strictly increasing and
//! never reused; a start that fails reservation wastes its number, so gaps
//! are normal. Wrap-around of the 64-bit counter is not handled.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT: AtomicU64 = AtomicU64::new(0);

/// Allocate the next sequence number. The first allocation returns 1.
pub(crate) fn next_sequence() -> u64 {
    NEXT.fetch_add(1, Ordering::Relaxed) + 1
}
