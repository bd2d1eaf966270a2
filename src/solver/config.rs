//! Solver configuration

use std::num::NonZeroUsize;
use std::thread;

/// Tunables for guess selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Worker threads per selection call
    pub workers: usize,
}

impl SolverConfig {
    /// Use `workers` threads, or the hardware parallelism when `None`
    ///
    /// A request for zero workers is treated as one.
    #[must_use]
    pub fn new(workers: Option<usize>) -> Self {
        workers.map_or_else(Self::default, |workers| Self {
            workers: workers.max(1),
        })
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            workers: thread::available_parallelism().map_or(1, NonZeroUsize::get),
        }
    }
}
