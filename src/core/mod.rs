//! Core domain types for Wordle
//!
//! Words, the feedback codec and the precomputed feedback table. Everything
//! here is pure and deterministic.

mod feedback;
mod table;
mod word;

pub use feedback::{CODE_COUNT, DecodeTable, FeedbackCode, Mark, decode_table};
pub use table::FeedbackTable;
pub use word::{WORD_LEN, Word, WordError};
