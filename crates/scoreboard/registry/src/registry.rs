//! The concurrent match registry.
//!
//! Maps each team key to its current match. Both keys of a match map to the
//! same shared record, and a two-phase reservation emulates an atomic
//! two-key insert on a map that is only atomic per single key.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use scoreboard_types::{summary_order, MatchSnapshot, Score};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::RegistryConfig;
use crate::entry::MatchEntry;
use crate::error::{RegistryError, Result};
use crate::sequence::next_sequence;

/// Concurrent store of live matches, keyed by team.
///
/// Explicitly constructed and owned; create one and share it (typically
/// behind an `Arc`) with every caller. Locking is fine-grained: the map
/// handles per-key atomicity, each live match carries its own exclusion
/// lock, and two different matches never contend.
///
/// Inputs are assumed to be validated already; see
/// [`MatchValidator`](crate::validator::MatchValidator) and the
/// [`Scoreboard`](crate::board::Scoreboard) facade.
pub struct MatchRegistry {
    teams: DashMap<String, Arc<MatchEntry>>,
    config: RegistryConfig,
}

impl MatchRegistry {
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            teams: DashMap::new(),
            config,
        }
    }

    /// Start a new match at 0-0 and register it under both team keys.
    ///
    /// The two keys are reserved one at a time. If the second reservation
    /// finds its team already playing, the first is rolled back, so a failed
    /// start leaves the registry exactly as it was. Passing the same name
    /// for both sides fails the second reservation against the first, and is
    /// reported as [`RegistryError::AlreadyPlaying`] like any other conflict.
    ///
    /// Returns the 0-0 snapshot carrying the assigned sequence number.
    pub fn start(&self, home: &str, away: &str) -> Result<MatchSnapshot> {
        let entry = Arc::new(MatchEntry::new(
            home.to_owned(),
            away.to_owned(),
            next_sequence(),
        ));
        // Hold the new match's own lock across the registration window so an
        // update or remove that finds the first key cannot act on a
        // half-inserted pair.
        let registering = entry.guard.lock();

        match self.teams.entry(home.to_owned()) {
            Entry::Occupied(_) => {
                // Nothing was inserted; the wasted sequence number is the
                // only trace of this call.
                return Err(RegistryError::AlreadyPlaying(home.to_owned()));
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::clone(&entry));
            }
        }

        let away_taken = match self.teams.entry(away.to_owned()) {
            Entry::Occupied(_) => true,
            Entry::Vacant(slot) => {
                slot.insert(Arc::clone(&entry));
                false
            }
        };
        if away_taken {
            // All-or-nothing: undo the home reservation before reporting.
            self.teams.remove(home);
            return Err(RegistryError::AlreadyPlaying(away.to_owned()));
        }

        entry.mark_registered();
        drop(registering);

        info!(home, away, sequence = entry.sequence, "match started");
        Ok(entry.snapshot())
    }

    /// Replace the score of the match registered under `home`.
    ///
    /// Scores are absolute values, not deltas, and may move in either
    /// direction between calls. The pair is replaced as a single snapshot
    /// while the match's exclusion lock is held, with a bounded wait
    /// ([`RegistryConfig::lock_timeout`]) that fails with
    /// [`RegistryError::MatchLocked`] on expiry.
    ///
    /// Once the lock is held, `home` is re-checked against the locked
    /// record: a reservation that rolled back, or a remove that won the
    /// race, turns this call into `MatchNotStarted` instead of a score
    /// replacement on a match that no longer exists.
    ///
    /// If the away key disappears while the replacement is in flight (a
    /// concurrent remove won the race), this fails with `MatchNotStarted`
    /// for the away side after the fact. The home-side replacement is not
    /// rolled back, and the lock has been released by then on every path.
    pub fn update_score(
        &self,
        home: &str,
        away: &str,
        home_score: u64,
        away_score: u64,
    ) -> Result<MatchSnapshot> {
        let entry = self
            .teams
            .get(home)
            .map(|r| Arc::clone(r.value()))
            .ok_or_else(|| RegistryError::MatchNotStarted(home.to_owned()))?;

        {
            let _updating = entry
                .guard
                .try_lock_for(self.config.lock_timeout)
                .ok_or(RegistryError::MatchLocked)?;

            // The lookup raced ahead of the lock: the reservation we found
            // may have rolled back, or a remove may have freed the key for a
            // new match. Only a record still registered under this key gets
            // its score replaced.
            let still_current = self
                .teams
                .get(home)
                .map(|r| Arc::ptr_eq(r.value(), &entry))
                .unwrap_or(false);
            if !still_current {
                return Err(RegistryError::MatchNotStarted(home.to_owned()));
            }

            entry.replace_score(Score::new(home_score, away_score));
        }

        if !self.teams.contains_key(away) {
            warn!(home, away, "away side vanished during score update");
            return Err(RegistryError::MatchNotStarted(away.to_owned()));
        }

        debug!(home, away, home_score, away_score, "score updated");
        Ok(entry.snapshot())
    }

    /// End the match registered under `home`, deleting both of its keys.
    ///
    /// Takes the match's exclusion lock with the same bounded wait as
    /// [`update_score`](Self::update_score), then re-checks that `home`
    /// still maps to the locked match; a concurrent remove that won the race
    /// turns this call into [`RegistryError::MatchNotStarted`]. The keys
    /// deleted are the match's own two keys, so a caller passing a stale or
    /// mismatched away name cannot detach a key from some other live match.
    ///
    /// # Panics
    ///
    /// If either of the match's keys is missing while its lock is held. The
    /// two keys are only ever inserted and removed together under that lock,
    /// so a lone key means the registry is corrupted.
    pub fn remove(&self, home: &str, away: &str) -> Result<()> {
        let entry = self
            .teams
            .get(home)
            .map(|r| Arc::clone(r.value()))
            .ok_or_else(|| RegistryError::MatchNotStarted(home.to_owned()))?;

        let ending = entry
            .guard
            .try_lock_for(self.config.lock_timeout)
            .ok_or(RegistryError::MatchLocked)?;

        let still_current = self
            .teams
            .get(home)
            .map(|r| Arc::ptr_eq(r.value(), &entry))
            .unwrap_or(false);
        if !still_current {
            return Err(RegistryError::MatchNotStarted(home.to_owned()));
        }

        let home_gone = self
            .teams
            .remove_if(&entry.home, |_, v| Arc::ptr_eq(v, &entry))
            .is_none();
        let away_gone = self
            .teams
            .remove_if(&entry.away, |_, v| Arc::ptr_eq(v, &entry))
            .is_none();
        if home_gone || away_gone {
            panic!(
                "registry corrupted: match {} vs {} lost a key while its lock was held",
                entry.home, entry.away
            );
        }

        // Release before the entry is discarded so a waiter holding a stale
        // handle wakes up instead of timing out.
        drop(ending);

        info!(home, away, sequence = entry.sequence, "match removed");
        Ok(())
    }

    /// Ordered snapshot of every live match: total score descending, ties
    /// broken by most recent start first.
    ///
    /// Reads each match's score slot without taking its exclusion lock, so
    /// the traversal never blocks starts, updates, or removals. Every row is
    /// a match's state before or after any concurrent update, never a blend
    /// of the two sides. Interleaved remove+start traffic can still produce
    /// a snapshot in which one team appears on two rows; that weaker
    /// isolation is accepted.
    pub fn summary(&self) -> Vec<MatchSnapshot> {
        let mut rows: Vec<MatchSnapshot> = self
            .teams
            .iter()
            // Every match sits under both of its keys; keeping the
            // home-keyed copy lists each match exactly once. Entries still
            // inside the registration window are skipped.
            .filter(|r| r.value().home == *r.key() && r.value().is_registered())
            .map(|r| r.value().snapshot())
            .collect();
        rows.sort_by(summary_order);
        rows
    }

    /// Number of live matches.
    pub fn len(&self) -> usize {
        self.teams
            .iter()
            .filter(|r| r.value().home == *r.key() && r.value().is_registered())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Unconditionally forget every match. A reset between test scenarios or
    /// operational runs; not meant to race with live traffic.
    pub fn clear(&self) {
        self.teams.clear();
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}
