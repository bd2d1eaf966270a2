//! Wordle solving algorithms
//!
//! The minimax evaluator and the session that drives it round by round.

mod config;
mod engine;
pub mod minimax;

pub use config::SolverConfig;
pub use engine::{Recommendation, Session};
