//! Wordle Benchmark
//!
//! Simulates Wordle games between a hidden-answer chooser and a guessing
//! strategy, and measures how strategies perform over many games.
//!
//! Feedback for every `(guess, answer)` pair is precomputed once into a
//! [`core::FeedbackTable`], so a turn costs a single table lookup.
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use wordle_bench::core::FeedbackTable;
//! use wordle_bench::game::{GameEngine, RandomUniformChooser};
//! use wordle_bench::solver::RandomConsistentSolver;
//! use wordle_bench::wordlists::loader::words_from_slice;
//!
//! let words = words_from_slice(&["crane", "slate", "apple", "grape"]).unwrap();
//! let table = Arc::new(FeedbackTable::build(&words, &words).unwrap());
//!
//! let mut engine = GameEngine::new(
//!     table,
//!     6,
//!     RandomUniformChooser::new(Some(7)),
//!     RandomConsistentSolver::new(Some(7)),
//! );
//! let state = engine.run().unwrap();
//! assert!(state.is_won());
//! ```

// Core domain types
pub mod core;

// Game state machine and answer choosers
pub mod game;

// Guessing strategies
pub mod solver;

// Word lists
pub mod wordlists;

// Feedback table cache
pub mod cache;

// Runtime settings and logging
pub mod config;
pub mod logging;

// Benchmarks and statistics
pub mod stats;

// Terminal output formatting
pub mod output;

// CLI command bodies
pub mod commands;

mod error;

pub use error::{Error, Result};
