//! Accumulated knowledge about the hidden word
//!
//! A `ConstraintState` tracks which letters may still appear at each position
//! and how many times each letter may occur. It is a plain `Copy` value so the
//! solver can speculate on copies without touching the real state.

use super::entry::LetterMask;
use super::{ALPHABET_SIZE, Entry, Feedback, Mark, WORD_LENGTH};

/// Mask with every letter of the alphabet allowed
pub const ALL_LETTERS: LetterMask = (1 << ALPHABET_SIZE) - 1;

/// Closed interval on how many times a letter occurs in the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountBounds {
    pub min: u8,
    pub max: u8,
}

impl CountBounds {
    /// Unconstrained bounds `[0, 5]`
    pub const OPEN: Self = Self {
        min: 0,
        max: WORD_LENGTH as u8,
    };

    #[inline]
    #[must_use]
    pub const fn contains(self, count: u8) -> bool {
        self.min <= count && count <= self.max
    }
}

impl Default for CountBounds {
    fn default() -> Self {
        Self::OPEN
    }
}

/// Per-position allowed letters plus per-letter count bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstraintState {
    position_possible: [LetterMask; WORD_LENGTH],
    count_bounds: [CountBounds; ALPHABET_SIZE],
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintState {
    /// State with nothing learned yet
    #[must_use]
    pub const fn new() -> Self {
        Self {
            position_possible: [ALL_LETTERS; WORD_LENGTH],
            count_bounds: [CountBounds::OPEN; ALPHABET_SIZE],
        }
    }

    /// Letters still allowed at `position`
    #[inline]
    #[must_use]
    pub const fn position_possible(&self, position: usize) -> LetterMask {
        self.position_possible[position]
    }

    /// Count bounds for the letter with alphabet index `letter`
    #[inline]
    #[must_use]
    pub const fn count_bounds(&self, letter: u8) -> CountBounds {
        self.count_bounds[letter as usize]
    }

    /// Whether `entry` is consistent with everything learned so far
    ///
    /// Every position's letter must still be allowed there and every letter
    /// count must sit inside its bounds.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{ConstraintState, Entry};
    ///
    /// let state = ConstraintState::new();
    /// assert!(state.fits(&Entry::new("crane").unwrap()));
    /// ```
    #[must_use]
    pub fn fits(&self, entry: &Entry) -> bool {
        let positions_ok = entry
            .position_masks()
            .iter()
            .zip(&self.position_possible)
            .all(|(&letter, &allowed)| letter & allowed != 0);

        positions_ok
            && entry
                .letter_counts()
                .iter()
                .zip(&self.count_bounds)
                .all(|(&count, bounds)| bounds.contains(count))
    }

    /// False when the state has visibly contradicted itself
    ///
    /// Catches crossed bounds (`min > max`), a position with no letter left,
    /// and more required letters than there are positions. Each is only
    /// reachable by applying feedback that contradicts earlier rounds, and
    /// such a state admits no entry at all.
    #[must_use]
    pub fn is_satisfiable(&self) -> bool {
        let required: usize = self.count_bounds.iter().map(|b| usize::from(b.min)).sum();

        required <= WORD_LENGTH
            && self.position_possible.iter().all(|&mask| mask != 0)
            && self.count_bounds.iter().all(|b| b.min <= b.max)
    }

    /// State that results from `guess` receiving `feedback`
    ///
    /// Leaves `self` untouched. Bounds only ever tighten: an Incorrect mark caps
    /// the letter at the number of Misplaced/Correct marks it received in this
    /// same pattern, so a repeated letter with one green and one gray means
    /// "exactly one", not "none".
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{ConstraintState, Entry, Feedback};
    ///
    /// let guess = Entry::new("speed").unwrap();
    /// let feedback: Feedback = "XXOXX".parse().unwrap();
    /// let state = ConstraintState::new().apply(&guess, &feedback);
    ///
    /// let e = b'E' - b'A';
    /// assert_eq!(state.count_bounds(e).min, 1);
    /// assert_eq!(state.count_bounds(e).max, 1);
    /// ```
    #[must_use]
    pub fn apply(&self, guess: &Entry, feedback: &Feedback) -> Self {
        let mut next = *self;
        let mut seen = [0u8; ALPHABET_SIZE];
        let mut capped = [false; ALPHABET_SIZE];

        for (i, &mark) in feedback.marks().iter().enumerate() {
            let letter = usize::from(guess.letter_at(i));
            let mask = guess.position_mask(i);
            match mark {
                Mark::Incorrect => {
                    next.position_possible[i] &= !mask;
                    capped[letter] = true;
                }
                Mark::Misplaced => {
                    next.position_possible[i] &= !mask;
                    seen[letter] += 1;
                }
                Mark::Correct => {
                    next.position_possible[i] = mask;
                    seen[letter] += 1;
                }
            }
        }

        for ((bounds, &count), &cap) in next.count_bounds.iter_mut().zip(&seen).zip(&capped) {
            bounds.min = bounds.min.max(count);
            if cap {
                bounds.max = bounds.max.min(count);
            }
        }

        next
    }
}
