//! Round-by-round solver session

use super::SolverConfig;
use super::minimax::{Selection, select_best_guess};
use crate::core::{ConstraintState, Entry, Feedback};
use crate::dictionary::Dictionary;
use log::info;

/// A suggested guess together with its guarantee
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation<'a> {
    /// The word to play next
    pub entry: &'a Entry,
    /// Index of `entry` within the live region
    pub index: usize,
    /// Entries this guess is guaranteed to eliminate
    pub gain: usize,
}

/// Main Wordle solver session
///
/// Owns the working dictionary and the constraint state for one game. The
/// state and store only change in `apply_feedback`, strictly between
/// selections.
#[derive(Debug, Clone)]
pub struct Session {
    dictionary: Dictionary,
    state: ConstraintState,
    config: SolverConfig,
    turn: usize,
}

impl Session {
    #[must_use]
    pub const fn new(dictionary: Dictionary, config: SolverConfig) -> Self {
        Self {
            dictionary,
            state: ConstraintState::new(),
            config,
            turn: 1,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &ConstraintState {
        &self.state
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Turn number of the next guess, starting at 1
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Entries still consistent with every round of feedback
    #[must_use]
    pub fn remaining(&self) -> &[Entry] {
        self.dictionary.live()
    }

    #[must_use]
    pub const fn remaining_count(&self) -> usize {
        self.dictionary.len()
    }

    /// Best next guess, or `None` if no candidates remain
    ///
    /// With one candidate left there is nothing to evaluate, so it is returned
    /// directly with a guarantee of zero.
    #[must_use]
    pub fn next_guess(&self) -> Option<Recommendation<'_>> {
        let live = self.dictionary.live();
        let selection = match live.len() {
            0 => return None,
            1 => Selection { index: 0, gain: 0 },
            _ => select_best_guess(&self.state, live, self.config.workers)?,
        };

        Some(Recommendation {
            entry: &live[selection.index],
            index: selection.index,
            gain: selection.gain,
        })
    }

    /// Commit real feedback for `guess` and prune the dictionary
    ///
    /// Returns how many entries were eliminated.
    pub fn apply_feedback(&mut self, guess: &Entry, feedback: &Feedback) -> usize {
        self.state = self.state.apply(guess, feedback);
        let removed = self.dictionary.prune(&self.state);
        info!(
            "turn {}: {guess} {feedback} eliminated {removed}, {} left",
            self.turn,
            self.dictionary.len()
        );
        self.turn += 1;
        removed
    }

    /// Start a new game with the full dictionary
    pub fn reset(&mut self) {
        self.dictionary.reset();
        self.state = ConstraintState::new();
        self.turn = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(words: &[&str]) -> Session {
        let entries = words.iter().map(|w| Entry::new(w).unwrap()).collect();
        Session::new(Dictionary::new(entries), SolverConfig::new(Some(2)))
    }

    fn feedback(marks: &str) -> Feedback {
        marks.parse().unwrap()
    }

    #[test]
    fn next_guess_on_fresh_session() {
        let session = session(&["zzzzz", "crane", "slate", "pilot"]);
        let rec = session.next_guess().unwrap();
        assert_eq!(rec.entry.to_string(), "SLATE");
        assert_eq!(rec.index, 2);
        assert_eq!(rec.gain, 3);
    }

    #[test]
    fn next_guess_none_when_exhausted() {
        let mut session = session(&["crane", "slate"]);
        let guess = Entry::new("eeeee").unwrap();
        session.apply_feedback(&guess, &feedback("XXXXX"));
        assert_eq!(session.remaining_count(), 0);
        assert!(session.next_guess().is_none());
    }

    #[test]
    fn single_candidate_short_circuits() {
        let mut session = session(&["crane", "slate", "pilot"]);
        let guess = Entry::new("crane").unwrap();
        session.apply_feedback(&guess, &feedback("XXXXX"));

        let rec = session.next_guess().unwrap();
        assert_eq!(rec.entry.to_string(), "PILOT");
        assert_eq!(rec.gain, 0);
    }

    #[test]
    fn apply_feedback_shrinks_and_advances() {
        let mut session = session(&["crane", "slate", "trace", "grape", "plane"]);
        let guess = Entry::new("crane").unwrap();

        let removed = session.apply_feedback(&guess, &feedback("XOOXO"));
        assert_eq!(removed, 4);
        assert_eq!(session.turn(), 2);
        let words: Vec<String> = session.remaining().iter().map(ToString::to_string).collect();
        assert_eq!(words, vec!["GRAPE"]);
    }

    #[test]
    fn solved_feedback_keeps_only_the_guess() {
        let mut session = session(&["crane", "slate", "trace"]);
        let guess = Entry::new("trace").unwrap();
        session.apply_feedback(&guess, &Feedback::PERFECT);
        assert_eq!(session.remaining(), &[guess][..]);
    }

    #[test]
    fn reset_starts_over() {
        let mut session = session(&["crane", "slate", "pilot"]);
        session.apply_feedback(&Entry::new("crane").unwrap(), &feedback("XXXXX"));
        session.reset();

        assert_eq!(session.remaining_count(), 3);
        assert_eq!(session.turn(), 1);
        assert_eq!(*session.state(), ConstraintState::new());
    }
}
