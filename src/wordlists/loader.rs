//! Word list loading utilities
//!
//! Word lists are flat files with one word per line. A trailing CSV column is
//! ignored so single-column CSV exports load as-is.

use crate::core::Word;
use crate::error::{Error, Result};
use log::debug;
use rustc_hash::FxHashSet;
use std::fs;
use std::path::Path;

/// Load words from a file
///
/// Blank lines are skipped and words are lowercased. Any other line that is
/// not a 5-letter word fails the whole load.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read and `Error::InvalidWord`
/// naming the first malformed entry.
///
/// # Examples
/// ```no_run
/// use wordle_bench::wordlists::loader::load_words;
///
/// let words = load_words("data/valid-words.csv").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let words = words_from_str(&content)?;
    debug!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse words from file contents
///
/// # Errors
///
/// Returns `Error::InvalidWord` for the first entry that fails validation.
pub fn words_from_str(content: &str) -> Result<Vec<Word>> {
    content
        .lines()
        .filter_map(|line| {
            let field = line.split(',').next().unwrap_or_default().trim();
            (!field.is_empty()).then_some(field)
        })
        .map(parse_word)
        .collect()
}

/// Convert a string slice to a Word vector
///
/// # Errors
///
/// Returns `Error::InvalidWord` for the first entry that fails validation.
///
/// # Examples
/// ```
/// use wordle_bench::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["apple", "grape"]).unwrap();
/// assert_eq!(words.len(), 2);
/// ```
pub fn words_from_slice(slice: &[&str]) -> Result<Vec<Word>> {
    slice.iter().map(|s| parse_word(s)).collect()
}

pub(crate) fn parse_word(text: &str) -> Result<Word> {
    Word::new(text).map_err(|source| Error::InvalidWord {
        word: text.to_string(),
        source,
    })
}

/// Guess and answer lists for one simulation
#[derive(Debug, Clone)]
pub struct Vocabulary {
    word_bank: Vec<Word>,
    valid_words: Vec<Word>,
}

impl Vocabulary {
    /// Validate a pair of word lists
    ///
    /// # Errors
    ///
    /// - `Error::EmptyVocabulary` if either list is empty
    /// - `Error::UnknownWord` if a valid answer is missing from the word bank,
    ///   since the solvers may guess any answer
    pub fn new(word_bank: Vec<Word>, valid_words: Vec<Word>) -> Result<Self> {
        if word_bank.is_empty() || valid_words.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        let bank: FxHashSet<&Word> = word_bank.iter().collect();
        if let Some(missing) = valid_words.iter().find(|w| !bank.contains(w)) {
            return Err(Error::UnknownWord(missing.to_string()));
        }

        Ok(Self {
            word_bank,
            valid_words,
        })
    }

    /// Load and validate both lists from disk
    ///
    /// # Errors
    ///
    /// See [`load_words`] and [`Vocabulary::new`].
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(word_bank: P, valid_words: Q) -> Result<Self> {
        Self::new(load_words(word_bank)?, load_words(valid_words)?)
    }

    #[must_use]
    pub fn word_bank(&self) -> &[Word] {
        &self.word_bank
    }

    #[must_use]
    pub fn valid_words(&self) -> &[Word] {
        &self.valid_words
    }
}
