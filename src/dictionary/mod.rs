//! Working dictionary of still-possible words
//!
//! The store owns every entry loaded at startup and a logical length cursor.
//! Eliminated entries are swapped past the cursor instead of being removed, so
//! the backing vector is never reallocated or shifted.

pub mod loader;

use crate::core::{ConstraintState, Entry};
use log::debug;

/// Whether a prune pass removes entries or only counts them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prune {
    /// Swap failing entries past the logical end
    Commit,
    /// Count failing entries without touching the store
    DryRun,
}

/// Dense arena of entries with a shrink-only logical size
#[derive(Debug, Clone)]
pub struct Dictionary {
    entries: Vec<Entry>,
    len: usize,
}

impl Dictionary {
    /// Build a store whose logical region covers every entry
    #[must_use]
    pub fn new(entries: Vec<Entry>) -> Self {
        let len = entries.len();
        Self { entries, len }
    }

    /// Number of entries still in play
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of entries loaded, including eliminated ones
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// The logical region; nothing past it is ever exposed
    #[inline]
    #[must_use]
    pub fn live(&self) -> &[Entry] {
        &self.entries[..self.len]
    }

    /// Entry at `index` within the logical region
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.live().get(index)
    }

    /// Count live entries that `state` rules out
    #[must_use]
    pub fn count_eliminated(&self, state: &ConstraintState) -> usize {
        count_eliminated(self.live(), state)
    }

    /// Remove every live entry that `state` rules out, returning how many went
    ///
    /// Surviving entries may be reordered.
    pub fn prune(&mut self, state: &ConstraintState) -> usize {
        self.prune_with(state, Prune::Commit)
    }

    /// Single pass over the logical region in either mode
    pub fn prune_with(&mut self, state: &ConstraintState, mode: Prune) -> usize {
        if mode == Prune::DryRun {
            return self.count_eliminated(state);
        }

        let before = self.len;
        let mut i = 0;
        while i < self.len {
            if state.fits(&self.entries[i]) {
                i += 1;
            } else {
                // Recheck slot i: it now holds the entry swapped in from the end
                self.len -= 1;
                self.entries.swap(i, self.len);
            }
        }

        let removed = before - self.len;
        debug!("pruned {removed} entries, {} remain", self.len);
        removed
    }

    /// Bring every loaded entry back into play for a new game
    pub fn reset(&mut self) {
        self.len = self.entries.len();
    }
}

/// Number of entries in `live` that fail `state`
///
/// The non-mutating half of pruning, usable on any slice of the store.
#[must_use]
pub fn count_eliminated(live: &[Entry], state: &ConstraintState) -> usize {
    live.iter().filter(|entry| !state.fits(entry)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().map(|w| Entry::new(w).unwrap()).collect())
    }

    fn texts(dict: &Dictionary) -> Vec<String> {
        let mut words: Vec<String> = dict.live().iter().map(ToString::to_string).collect();
        words.sort();
        words
    }

    fn state_after(guess: &str, marks: &str) -> ConstraintState {
        let feedback: Feedback = marks.parse().unwrap();
        ConstraintState::new().apply(&Entry::new(guess).unwrap(), &feedback)
    }

    #[test]
    fn new_covers_everything() {
        let dict = dictionary(&["crane", "slate", "trace"]);
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.capacity(), 3);
        assert!(!dict.is_empty());
    }

    #[test]
    fn dry_run_does_not_mutate() {
        let mut dict = dictionary(&["crane", "slate", "trace", "pilot"]);
        let state = state_after("crane", "XXXXX");
        let order: Vec<String> = dict.live().iter().map(ToString::to_string).collect();

        assert_eq!(dict.prune_with(&state, Prune::DryRun), 3);
        assert_eq!(dict.count_eliminated(&state), 3);
        assert_eq!(dict.len(), 4);

        let after: Vec<String> = dict.live().iter().map(ToString::to_string).collect();
        assert_eq!(order, after);
    }

    #[test]
    fn commit_matches_dry_run_count() {
        let mut dict = dictionary(&["crane", "slate", "trace", "pilot", "cloud"]);
        let state = state_after("crane", "OXXXX");
        let expected = dict.count_eliminated(&state);

        assert_eq!(dict.prune(&state), expected);
        assert_eq!(dict.len(), 5 - expected);
        assert_eq!(texts(&dict), vec!["CLOUD"]);
    }

    #[test]
    fn prune_handles_consecutive_failures_at_end() {
        // Last entries fail too, so the swapped-in entry must be rechecked
        let mut dict = dictionary(&["pilot", "crane", "slate", "trace"]);
        let state = state_after("crane", "XXXXX");
        assert_eq!(dict.prune(&state), 3);
        assert_eq!(texts(&dict), vec!["PILOT"]);
        assert_eq!(dict.capacity(), 4);
    }

    #[test]
    fn prune_is_idempotent() {
        let mut dict = dictionary(&["crane", "slate", "trace", "pilot", "cloud"]);
        let state = state_after("crane", "-XXXX");
        dict.prune(&state);
        let len = dict.len();
        assert_eq!(dict.prune(&state), 0);
        assert_eq!(dict.len(), len);
    }

    #[test]
    fn prune_everything() {
        let mut dict = dictionary(&["crane", "slate"]);
        let state = state_after("eeeee", "XXXXX");
        assert_eq!(dict.prune(&state), 2);
        assert!(dict.is_empty());
        assert!(dict.live().is_empty());
        assert_eq!(dict.get(0), None);
    }

    #[test]
    fn reset_restores_all_entries() {
        let mut dict = dictionary(&["crane", "slate", "pilot"]);
        dict.prune(&state_after("crane", "XXXXX"));
        assert_eq!(dict.len(), 1);

        dict.reset();
        assert_eq!(dict.len(), 3);
        assert_eq!(texts(&dict), vec!["CRANE", "PILOT", "SLATE"]);
    }
}
