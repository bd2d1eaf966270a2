//! Worst-case elimination for a single candidate guess
//!
//! For a guess, every one of the 243 feedback patterns is applied to the
//! current state and the eliminated entries are counted. The smallest count is
//! what the guess is guaranteed to remove.

use crate::core::{ConstraintState, Entry, Feedback};
use crate::dictionary::count_eliminated;

/// Minimum number of `live` entries `candidate` is guaranteed to eliminate
///
/// Patterns that no real target could produce are evaluated like any other;
/// they rule out more entries, never fewer, so they can't lower the minimum
/// below a reachable outcome.
///
/// # Examples
/// ```
/// use wordle_minimax::core::{ConstraintState, Entry};
/// use wordle_minimax::solver::minimax::worst_case_gain;
///
/// let live: Vec<Entry> = ["crane", "slate", "pilot"]
///     .iter()
///     .map(|w| Entry::new(w).unwrap())
///     .collect();
///
/// let gain = worst_case_gain(&ConstraintState::new(), &live[0], &live);
/// assert_eq!(gain, 2);
/// ```
#[must_use]
pub fn worst_case_gain(state: &ConstraintState, candidate: &Entry, live: &[Entry]) -> usize {
    worst_case_pattern(state, candidate, live).map_or(0, |(_, gain)| gain)
}

/// The first pattern achieving the worst case, and its elimination count
///
/// Returns `None` only when `live` is empty.
#[must_use]
pub fn worst_case_pattern(
    state: &ConstraintState,
    candidate: &Entry,
    live: &[Entry],
) -> Option<(Feedback, usize)> {
    if live.is_empty() {
        return None;
    }

    let mut worst: Option<(Feedback, usize)> = None;
    for feedback in Feedback::all() {
        let eliminated = count_eliminated(live, &state.apply(candidate, &feedback));
        if worst.is_none_or(|(_, min)| eliminated < min) {
            worst = Some((feedback, eliminated));
            if eliminated == 0 {
                break;
            }
        }
    }
    worst
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(words: &[&str]) -> Vec<Entry> {
        words.iter().map(|w| Entry::new(w).unwrap()).collect()
    }

    #[test]
    fn empty_dictionary_gains_nothing() {
        let candidate = Entry::new("crane").unwrap();
        assert_eq!(worst_case_gain(&ConstraintState::new(), &candidate, &[]), 0);
        assert!(worst_case_pattern(&ConstraintState::new(), &candidate, &[]).is_none());
    }

    #[test]
    fn single_entry_gains_nothing() {
        // Guessing the only word left can come back all-correct
        let live = entries(&["crane"]);
        assert_eq!(worst_case_gain(&ConstraintState::new(), &live[0], &live), 0);
    }

    #[test]
    fn gain_is_bounded_by_dictionary_size() {
        let live = entries(&["crane", "slate", "trace", "grape", "plane", "pilot"]);
        let state = ConstraintState::new();
        for candidate in &live {
            let gain = worst_case_gain(&state, candidate, &live);
            assert!(gain <= live.len(), "{candidate} gained {gain}");
        }
    }

    #[test]
    fn distinct_letter_signatures() {
        // Against SLATE, every entry shares a different subset of its letters,
        // so any pattern keeps at most one entry
        let live = entries(&["zzzzz", "crane", "slate", "pilot"]);
        let state = ConstraintState::new();
        assert_eq!(worst_case_gain(&state, &live[2], &live), 3);
        // CRANE can't tell PILOT from ZZZZZ
        assert_eq!(worst_case_gain(&state, &live[1], &live), 2);
        // ZZZZZ can't tell the other three apart
        assert_eq!(worst_case_gain(&state, &live[0], &live), 1);
    }

    #[test]
    fn anagram_dictionary_is_uninformative() {
        // Rotations of ABCDE never share a position with it, so "all
        // misplaced" keeps every one of them
        let live = entries(&["bcdea", "cdeab", "deabc", "eabcd"]);
        let candidate = Entry::new("abcde").unwrap();
        let state = ConstraintState::new();

        assert_eq!(worst_case_gain(&state, &candidate, &live), 0);
        let (pattern, _) = worst_case_pattern(&state, &candidate, &live).unwrap();
        assert_eq!(pattern.to_string(), "-----");
    }

    #[test]
    fn anagram_in_dictionary_eliminates_itself() {
        let live = entries(&["abcde", "bcdea", "cdeab", "deabc", "eabcd"]);
        assert_eq!(worst_case_gain(&ConstraintState::new(), &live[0], &live), 1);
    }

    #[test]
    fn worst_pattern_matches_gain() {
        let live = entries(&["crane", "slate", "trace", "grape", "plane"]);
        let state = ConstraintState::new();
        let candidate = &live[0];

        let (pattern, gain) = worst_case_pattern(&state, candidate, &live).unwrap();
        assert_eq!(gain, worst_case_gain(&state, candidate, &live));
        assert_eq!(count_eliminated(&live, &state.apply(candidate, &pattern)), gain);
    }
}
