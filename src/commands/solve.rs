//! Word solving command
//!
//! Plays a full game against a known target and records every step.

use crate::core::{Entry, EntryError, Feedback};
use crate::solver::Session;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: Feedback,
    pub guaranteed: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word, scoring each suggestion against the target
///
/// The target need not be in the dictionary; if it isn't, the game usually
/// ends with no candidates left.
///
/// # Errors
///
/// Returns an error if the target is not a valid 5-letter word.
pub fn solve_word(config: SolveConfig, session: &mut Session) -> Result<SolveResult, EntryError> {
    let target = Entry::new(&config.target)?;
    session.reset();

    let mut guesses = Vec::new();
    let mut success = false;

    while guesses.len() < config.max_guesses {
        let candidates_before = session.remaining_count();
        let Some(rec) = session.next_guess() else {
            break;
        };
        let guaranteed = rec.gain;
        let guess = rec.entry.clone();

        let feedback = Feedback::score(&guess, &target);
        session.apply_feedback(&guess, &feedback);

        guesses.push(GuessStep {
            word: guess.to_string(),
            feedback,
            guaranteed,
            candidates_before,
            candidates_after: session.remaining_count(),
        });

        if feedback.is_solved() {
            success = true;
            break;
        }
    }

    Ok(SolveResult {
        success,
        guesses,
        target: target.to_string(),
    })
}
