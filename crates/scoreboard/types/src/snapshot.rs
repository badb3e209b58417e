//! Point-in-time view of a live match.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::Score;

/// A point-in-time view of one live match, as returned by the summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub home: String,
    pub away: String,
    pub home_score: u64,
    pub away_score: u64,
    /// Creation-order number. Unique for the lifetime of the process and
    /// never reused, even after the match is removed.
    pub sequence: u64,
}

impl MatchSnapshot {
    pub fn score(&self) -> Score {
        Score::new(self.home_score, self.away_score)
    }

    pub fn total(&self) -> u64 {
        self.score().total()
    }
}

/// Identity is the ordered team pair; the current score is not part of it.
/// Two snapshots of the same match taken around an update are still equal.
impl PartialEq for MatchSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.home == other.home && self.away == other.away
    }
}

impl Eq for MatchSnapshot {}

impl Hash for MatchSnapshot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.home.hash(state);
        self.away.hash(state);
    }
}

/// Summary ordering: total score descending, ties broken by `sequence`
/// descending (most recently started first). Sequence numbers are unique, so
/// the order is total.
///
/// Deliberately a free comparator rather than an `Ord` impl: equality on
/// [`MatchSnapshot`] is the team pair alone, and an `Ord` that ranks by score
/// would disagree with it.
pub fn summary_order(a: &MatchSnapshot, b: &MatchSnapshot) -> Ordering {
    b.total()
        .cmp(&a.total())
        .then_with(|| b.sequence.cmp(&a.sequence))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn snap(home: &str, away: &str, home_score: u64, away_score: u64, sequence: u64) -> MatchSnapshot {
        MatchSnapshot {
            home: home.into(),
            away: away.into(),
            home_score,
            away_score,
            sequence,
        }
    }

    #[test]
    fn test_identity_ignores_score() {
        let before = snap("Spain", "Brazil", 0, 0, 2);
        let after = snap("Spain", "Brazil", 10, 2, 2);
        assert_eq!(before, after);
    }

    #[test]
    fn test_identity_is_the_ordered_pair() {
        let a = snap("Spain", "Brazil", 0, 0, 1);
        let b = snap("Brazil", "Spain", 0, 0, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_higher_total_ranks_first() {
        let low = snap("Mexico", "Canada", 0, 5, 1);
        let high = snap("Uruguay", "Italy", 6, 6, 4);
        assert_eq!(summary_order(&high, &low), Ordering::Less);
        assert_eq!(summary_order(&low, &high), Ordering::Greater);
    }

    #[test]
    fn test_equal_totals_rank_later_start_first() {
        let earlier = snap("Spain", "Brazil", 10, 2, 2);
        let later = snap("Uruguay", "Italy", 6, 6, 4);
        assert_eq!(summary_order(&later, &earlier), Ordering::Less);
    }

    proptest! {
        // Sorting any set of rows with unique sequences yields exactly the
        // "total desc, then sequence desc" order, pairwise.
        #[test]
        fn prop_summary_order_is_total_then_recency(
            rows in prop::collection::vec((0u64..100, 0u64..100), 1..20)
        ) {
            let mut snaps: Vec<MatchSnapshot> = rows
                .iter()
                .enumerate()
                .map(|(i, &(h, a))| snap(&format!("h{i}"), &format!("a{i}"), h, a, i as u64 + 1))
                .collect();
            snaps.sort_by(summary_order);

            for pair in snaps.windows(2) {
                let (first, second) = (&pair[0], &pair[1]);
                prop_assert!(
                    first.total() > second.total()
                        || (first.total() == second.total()
                            && first.sequence > second.sequence)
                );
            }
        }
    }
}
