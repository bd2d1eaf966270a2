//! Dictionary entry representation
//!
//! An `Entry` stores a 5-letter word together with the per-position bitmasks and
//! per-letter counts the constraint checks run against.

use super::{ALPHABET_SIZE, WORD_LENGTH};
use std::fmt;

/// Bitset over the alphabet, bit `n` standing for letter `'A' + n`
pub type LetterMask = u32;

/// An immutable dictionary word with cached letter data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    letters: [u8; WORD_LENGTH],
    position_masks: [LetterMask; WORD_LENGTH],
    letter_counts: [u8; ALPHABET_SIZE],
}

/// Error type for invalid entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Word must contain only letters A-Z, found {ch:?}")
            }
        }
    }
}

impl std::error::Error for EntryError {}

impl Entry {
    /// Create a new entry from a word
    ///
    /// Input is case-folded to uppercase before validation.
    ///
    /// # Errors
    /// Returns `EntryError` if:
    /// - Length is not exactly 5 characters
    /// - Any character is outside A-Z
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Entry;
    ///
    /// let entry = Entry::new("crane").unwrap();
    /// assert_eq!(entry.to_string(), "CRANE");
    ///
    /// assert!(Entry::new("cranes").is_err());
    /// assert!(Entry::new("cr4ne").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, EntryError> {
        let len = text.chars().count();
        if len != WORD_LENGTH {
            return Err(EntryError::InvalidLength(len));
        }

        let mut letters = [0u8; WORD_LENGTH];
        let mut position_masks = [0; WORD_LENGTH];
        let mut letter_counts = [0u8; ALPHABET_SIZE];

        for (i, ch) in text.chars().enumerate() {
            let upper = ch.to_ascii_uppercase();
            if !upper.is_ascii_uppercase() {
                return Err(EntryError::InvalidCharacter(ch));
            }
            let index = upper as u8 - b'A';
            letters[i] = index;
            position_masks[i] = 1 << index;
            letter_counts[usize::from(index)] += 1;
        }

        Ok(Self {
            letters,
            position_masks,
            letter_counts,
        })
    }

    /// Alphabet index (0-25) of the letter at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Single-bit mask of the letter at `position`
    #[inline]
    #[must_use]
    pub const fn position_mask(&self, position: usize) -> LetterMask {
        self.position_masks[position]
    }

    #[inline]
    #[must_use]
    pub const fn position_masks(&self) -> &[LetterMask; WORD_LENGTH] {
        &self.position_masks
    }

    /// Occurrences of each letter, indexed by alphabet position
    #[inline]
    #[must_use]
    pub const fn letter_counts(&self) -> &[u8; ALPHABET_SIZE] {
        &self.letter_counts
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &index in &self.letters {
            write!(f, "{}", char::from(b'A' + index))?;
        }
        Ok(())
    }
}
