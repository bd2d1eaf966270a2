//! Minimax-based guess selection strategy
//!
//! Picks the live entry with the largest guaranteed elimination count. The
//! live region is split into one contiguous chunk per worker and evaluated on
//! a thread pool built for this call alone.

use super::calculator::worst_case_gain;
use crate::core::{ConstraintState, Entry};
use log::{debug, warn};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use std::time::Instant;

/// Winning candidate of a selection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    /// Index into the live region
    pub index: usize,
    /// Entries the guess is guaranteed to eliminate
    pub gain: usize,
}

impl Selection {
    /// Keep `self` unless `other` is strictly better
    ///
    /// Folding candidates in scan order with this makes the earliest entry win
    /// every tie.
    #[must_use]
    fn or_better(self, other: Self) -> Self {
        if other.gain > self.gain { other } else { self }
    }
}

/// Select the live entry with the best worst-case elimination
///
/// Returns `None` if `live` is empty. The result depends only on `state` and
/// the order of `live`, never on `workers`.
///
/// # Examples
/// ```
/// use wordle_minimax::core::{ConstraintState, Entry};
/// use wordle_minimax::solver::minimax::select_best_guess;
///
/// let live: Vec<Entry> = ["zzzzz", "crane", "slate", "pilot"]
///     .iter()
///     .map(|w| Entry::new(w).unwrap())
///     .collect();
///
/// let best = select_best_guess(&ConstraintState::new(), &live, 2).unwrap();
/// assert_eq!(live[best.index].to_string(), "SLATE");
/// assert_eq!(best.gain, 3);
/// ```
#[must_use]
pub fn select_best_guess(
    state: &ConstraintState,
    live: &[Entry],
    workers: usize,
) -> Option<Selection> {
    if live.is_empty() {
        return None;
    }

    let workers = workers.clamp(1, live.len());
    let chunk_size = live.len().div_ceil(workers);
    let started = Instant::now();

    let evaluate = || -> Vec<Option<Selection>> {
        live.par_chunks(chunk_size)
            .enumerate()
            .map(|(chunk, candidates)| {
                best_in_chunk(state, live, chunk * chunk_size, candidates)
            })
            .collect()
    };

    let locals = match ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(evaluate),
        Err(e) => {
            warn!("could not start {workers} worker threads ({e}), using the global pool");
            evaluate()
        }
    };

    let best = locals.into_iter().flatten().reduce(Selection::or_better);

    debug!(
        "evaluated {} candidates on {workers} workers in {:.2?}",
        live.len(),
        started.elapsed()
    );
    best
}

/// Best candidate within one worker's contiguous slice
///
/// `offset` is the slice's position in `live`, so returned indices refer to
/// the whole live region.
fn best_in_chunk(
    state: &ConstraintState,
    live: &[Entry],
    offset: usize,
    candidates: &[Entry],
) -> Option<Selection> {
    candidates
        .iter()
        .enumerate()
        .map(|(i, candidate)| Selection {
            index: offset + i,
            gain: worst_case_gain(state, candidate, live),
        })
        .reduce(Selection::or_better)
}
