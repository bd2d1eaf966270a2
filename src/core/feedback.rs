//! Per-letter feedback for a guessed word
//!
//! Each position of a guess receives one of three marks:
//! - Incorrect (letter ruled out at that count)
//! - Misplaced (letter present, wrong position)
//! - Correct (letter in the right position)
//!
//! A `Feedback` is the full set of marks for one guess. There are 3^5 = 243
//! possible patterns; `Feedback::all` walks them with a base-3 odometer.

use super::{ALPHABET_SIZE, Entry, WORD_LENGTH};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// No further occurrence of this letter (gray)
    Incorrect,
    /// Letter occurs elsewhere in the word (yellow)
    Misplaced,
    /// Letter is in this exact position (green)
    Correct,
}

impl Mark {
    /// Parse a single feedback character (case-insensitive)
    ///
    /// - `O`/`G` for correct
    /// - `-`/`Y` for misplaced
    /// - `X`/`_`/`B` for incorrect
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_uppercase() {
            'O' | 'G' => Some(Self::Correct),
            '-' | 'Y' => Some(Self::Misplaced),
            'X' | '_' | 'B' => Some(Self::Incorrect),
            _ => None,
        }
    }

    /// The canonical input character for this mark
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Incorrect => 'X',
            Self::Misplaced => '-',
            Self::Correct => 'O',
        }
    }
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidCharacter(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(
                f,
                "Feedback must be exactly {WORD_LENGTH} characters, got {len}"
            ),
            Self::InvalidCharacter(ch) => write!(
                f,
                "Invalid feedback character {ch:?}; use 'O' (correct), '-' (misplaced) or 'X' (incorrect)"
            ),
        }
    }
}

impl std::error::Error for FeedbackError {}

/// Feedback pattern for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([Mark::Correct; WORD_LENGTH]);

    /// Number of distinct patterns (3^5)
    pub const COUNT: usize = 3usize.pow(WORD_LENGTH as u32);

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Iterate every possible pattern exactly once
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Feedback;
    ///
    /// assert_eq!(Feedback::all().count(), Feedback::COUNT);
    /// ```
    #[must_use]
    pub fn all() -> Patterns {
        Patterns {
            next: Some([Mark::Incorrect; WORD_LENGTH]),
        }
    }

    /// Feedback the game gives when `guess` is played against `target`
    ///
    /// Greens are assigned first and consume their letter; yellows are then
    /// handed out left to right while unmatched occurrences remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{Entry, Feedback};
    ///
    /// let guess = Entry::new("crane").unwrap();
    /// let target = Entry::new("slate").unwrap();
    /// assert_eq!(Feedback::score(&guess, &target).to_string(), "XXOXO");
    /// ```
    #[must_use]
    pub fn score(guess: &Entry, target: &Entry) -> Self {
        let mut marks = [Mark::Incorrect; WORD_LENGTH];
        let mut available = [0u8; ALPHABET_SIZE];

        for (i, mark) in marks.iter_mut().enumerate() {
            if guess.letter_at(i) == target.letter_at(i) {
                *mark = Mark::Correct;
            } else {
                available[usize::from(target.letter_at(i))] += 1;
            }
        }

        for (i, mark) in marks.iter_mut().enumerate() {
            if *mark == Mark::Correct {
                continue;
            }
            let slot = &mut available[usize::from(guess.letter_at(i))];
            if *slot > 0 {
                *mark = Mark::Misplaced;
                *slot -= 1;
            }
        }

        Self(marks)
    }

    /// Render as colored squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0
            .iter()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Misplaced => '🟨',
                Mark::Incorrect => '⬜',
            })
            .collect()
    }
}

impl FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let len = s.chars().count();
        if len != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(len));
        }

        let mut marks = [Mark::Incorrect; WORD_LENGTH];
        for (slot, ch) in marks.iter_mut().zip(s.chars()) {
            *slot = Mark::from_char(ch).ok_or(FeedbackError::InvalidCharacter(ch))?;
        }
        Ok(Self(marks))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.to_char())?;
        }
        Ok(())
    }
}

/// Odometer over all feedback patterns
///
/// Position 0 is the fastest-moving digit.
#[derive(Debug, Clone)]
pub struct Patterns {
    next: Option<[Mark; WORD_LENGTH]>,
}

impl Iterator for Patterns {
    type Item = Feedback;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;

        let mut digits = current;
        let mut carry = true;
        for mark in &mut digits {
            *mark = match *mark {
                Mark::Incorrect => Mark::Misplaced,
                Mark::Misplaced => Mark::Correct,
                Mark::Correct => Mark::Incorrect,
            };
            if *mark != Mark::Incorrect {
                carry = false;
                break;
            }
        }
        self.next = if carry { None } else { Some(digits) };

        Some(Feedback(current))
    }
}
