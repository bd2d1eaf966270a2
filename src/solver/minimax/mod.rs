//! Minimax-based Wordle solver
//!
//! Implements worst-case elimination scoring and parallel guess selection.

mod calculator;
mod selector;

pub use calculator::{worst_case_gain, worst_case_pattern};
pub use selector::{Selection, select_best_guess};
