//! Word lists for Wordle simulation
//!
//! Loads the guess and answer lists from flat files and checks they fit
//! together.

pub mod loader;

pub use loader::{Vocabulary, load_words};
