//! Word analysis command
//!
//! Reports how much a single guess is guaranteed to shrink the full dictionary.

use crate::core::{ConstraintState, Entry, EntryError, Feedback};
use crate::dictionary::Dictionary;
use crate::solver::minimax::worst_case_pattern;

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub total_candidates: usize,
    /// Entries eliminated whatever the feedback
    pub guaranteed: usize,
    /// Feedback that leaves the most entries standing
    pub worst_feedback: Option<Feedback>,
    pub in_dictionary: bool,
}

impl AnalysisResult {
    /// Candidates left in the worst case
    #[must_use]
    pub const fn worst_remaining(&self) -> usize {
        self.total_candidates - self.guaranteed
    }
}

/// Analyze `word` as an opening guess against `dictionary`
///
/// # Errors
///
/// Returns an error if `word` is not a valid 5-letter word.
pub fn analyze_word(word: &str, dictionary: &Dictionary) -> Result<AnalysisResult, EntryError> {
    let guess = Entry::new(word)?;
    let live = dictionary.live();
    let worst = worst_case_pattern(&ConstraintState::new(), &guess, live);

    Ok(AnalysisResult {
        word: guess.to_string(),
        total_candidates: live.len(),
        guaranteed: worst.map_or(0, |(_, gain)| gain),
        worst_feedback: worst.map(|(feedback, _)| feedback),
        in_dictionary: live.contains(&guess),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::new(words.iter().map(|w| Entry::new(w).unwrap()).collect())
    }

    #[test]
    fn analyze_word_in_dictionary() {
        let dict = dictionary(&["zzzzz", "crane", "slate", "pilot"]);
        let result = analyze_word("slate", &dict).unwrap();

        assert_eq!(result.word, "SLATE");
        assert!(result.in_dictionary);
        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.guaranteed, 3);
        assert_eq!(result.worst_remaining(), 1);
        assert!(result.worst_feedback.is_some());
    }

    #[test]
    fn analyze_word_outside_dictionary() {
        let dict = dictionary(&["crane", "slate"]);
        let result = analyze_word("qqqqq", &dict).unwrap();

        assert!(!result.in_dictionary);
        assert_eq!(result.guaranteed, 0);
        assert_eq!(result.worst_feedback.unwrap().to_string(), "XXXXX");
    }

    #[test]
    fn analyze_rejects_invalid_word() {
        let dict = dictionary(&["crane"]);
        assert!(analyze_word("cr4ne", &dict).is_err());
    }
}
