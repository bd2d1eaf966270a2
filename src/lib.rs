//! Wordle Minimax Solver
//!
//! A Wordle solver that always plays the guess with the best guaranteed
//! reduction of the dictionary, whatever feedback comes back.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_minimax::core::{Entry, Feedback};
//! use wordle_minimax::dictionary::Dictionary;
//! use wordle_minimax::solver::{Session, SolverConfig};
//!
//! let words = ["crane", "slate", "trace", "grape", "plane"];
//! let entries = words.iter().map(|w| Entry::new(w).unwrap()).collect();
//! let mut session = Session::new(Dictionary::new(entries), SolverConfig::default());
//!
//! let guess = session.next_guess().unwrap().entry.clone();
//! let feedback: Feedback = "XOOXO".parse().unwrap();
//! session.apply_feedback(&guess, &feedback);
//! assert!(session.remaining_count() < words.len());
//! ```

// Core domain types
pub mod core;

// Working dictionary and loading
pub mod dictionary;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
