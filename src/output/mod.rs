//! Terminal output formatting
//!
//! Coloured rendering of games, feedback and benchmark results.

pub mod display;
pub mod formatters;

pub use display::{print_feedback, print_game, print_metrics};
pub use formatters::code_to_emoji;
