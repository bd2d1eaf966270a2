//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! Dictionary entries, feedback patterns, and the bitmask constraint state.

mod entry;
mod feedback;
mod state;

pub use entry::{Entry, EntryError, LetterMask};
pub use feedback::{Feedback, FeedbackError, Mark, Patterns};
pub use state::{ALL_LETTERS, ConstraintState, CountBounds};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Letters in the alphabet (A-Z)
pub const ALPHABET_SIZE: usize = 26;
