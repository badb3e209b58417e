//! Internal shared match record.

use parking_lot::{Mutex, RwLock};
use scoreboard_types::{MatchSnapshot, Score};
use std::sync::atomic::{AtomicBool, Ordering};

/// The single shared record for one live match.
///
/// Both team keys in the registry map point at the same `Arc<MatchEntry>`,
/// so a score replacement through either key is observed through both.
/// Storing an independent copy per key would let the two sides drift apart.
pub(crate) struct MatchEntry {
    pub(crate) home: String,
    pub(crate) away: String,
    pub(crate) sequence: u64,
    /// Current score pair, replaced wholesale under `guard` so readers never
    /// see one side of an update without the other.
    score: RwLock<Score>,
    /// Exclusion lock serializing this match's lifecycle transitions:
    /// registration, score replacement, removal.
    pub(crate) guard: Mutex<()>,
    /// Set once both keys are in the map. Summaries skip entries that are
    /// still inside the registration window, so a reservation that ends up
    /// rolled back is never listed.
    registered: AtomicBool,
}

impl MatchEntry {
    pub(crate) fn new(home: String, away: String, sequence: u64) -> Self {
        Self {
            home,
            away,
            sequence,
            score: RwLock::new(Score::default()),
            guard: Mutex::new(()),
            registered: AtomicBool::new(false),
        }
    }

    pub(crate) fn mark_registered(&self) {
        self.registered.store(true, Ordering::Release);
    }

    pub(crate) fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }

    /// Replace the score pair. Callers must hold `guard`.
    pub(crate) fn replace_score(&self, score: Score) {
        *self.score.write() = score;
    }

    pub(crate) fn score(&self) -> Score {
        *self.score.read()
    }

    pub(crate) fn snapshot(&self) -> MatchSnapshot {
        let score = self.score();
        MatchSnapshot {
            home: self.home.clone(),
            away: self.away.clone(),
            home_score: score.home,
            away_score: score.away,
            sequence: self.sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_nil_nil_and_unregistered() {
        let entry = MatchEntry::new("teamA".into(), "teamB".into(), 7);
        assert_eq!(entry.score(), Score::default());
        assert!(!entry.is_registered());

        let snap = entry.snapshot();
        assert_eq!(snap.home, "teamA");
        assert_eq!(snap.away, "teamB");
        assert_eq!(snap.sequence, 7);
    }

    #[test]
    fn test_replace_score_swaps_the_whole_pair() {
        let entry = MatchEntry::new("teamA".into(), "teamB".into(), 1);
        entry.replace_score(Score::new(2, 3));
        assert_eq!(entry.score(), Score::new(2, 3));
        assert_eq!(entry.snapshot().total(), 5);
    }
}
