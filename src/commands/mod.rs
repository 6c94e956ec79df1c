//! Command implementations
//!
//! Each command returns plain data; the binary decides how to print it.

pub mod benchmark;
pub mod feedback;
pub mod play;

pub use benchmark::run_benchmarks;
pub use feedback::feedback;
pub use play::{PlayResult, play};

use crate::cache::TableCache;
use crate::config::Settings;
use crate::core::FeedbackTable;
use crate::error::Result;
use crate::wordlists::Vocabulary;
use std::sync::Arc;

/// Load the configured word lists and their feedback table, from cache when
/// possible
///
/// # Errors
/// Returns `Error::Io` or a validation error for unusable word lists.
pub fn load_table(settings: &Settings) -> Result<Arc<FeedbackTable>> {
    let word_bank = settings.paths.word_bank_path();
    let valid_words = settings.paths.valid_words_path();

    let vocabulary = Vocabulary::load(&word_bank, &valid_words)?;
    let cache = TableCache::new(&settings.paths.cache_folder);
    let table = cache.load_or_build(&[&word_bank, &valid_words], &vocabulary)?;

    Ok(Arc::new(table))
}
