//! Benchmark command
//!
//! Solves a batch of target words and summarizes the guess counts.

use super::solve::{SolveConfig, solve_word};
use crate::core::Entry;
use crate::solver::Session;
use indicatif::{ProgressBar, ProgressStyle};
use log::warn;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of solved words
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run benchmark on a set of target words
///
/// Each target is played from a fresh game on `session`. Unsolved targets
/// count toward `total_words` but not the guess statistics.
pub fn run_benchmark(
    session: &mut Session,
    targets: &[Entry],
    max_guesses: usize,
) -> BenchmarkResult {
    let progress = ProgressBar::new(targets.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {msg} [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses_seen = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for target in targets {
        progress.set_message(target.to_string());
        let config = SolveConfig {
            target: target.to_string(),
            max_guesses,
        };

        match solve_word(config, session) {
            Ok(result) if result.success => {
                let guesses = result.guesses.len();
                solved += 1;
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses_seen = max_guesses_seen.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            Ok(_) => warn!("{target} not solved within {max_guesses} guesses"),
            Err(e) => warn!("skipping {target}: {e}"),
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
    session.reset();

    let duration = start.elapsed();
    let secs = duration.as_secs_f64();

    BenchmarkResult {
        total_words: targets.len(),
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses: max_guesses_seen,
        distribution,
        duration,
        words_per_second: if secs > 0.0 {
            targets.len() as f64 / secs
        } else {
            0.0
        },
    }
}
