//! Precomputed feedback lookup table
//!
//! Stores the code for every (guess, answer) pair of a vocabulary so the game
//! loop and the solvers never recompute feedback. The table is a pure cache of
//! [`FeedbackCode::encode`]; it is immutable once built and can be shared
//! across threads behind an `Arc`.

use super::{FeedbackCode, Word};
use crate::error::{Error, Result};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Dense `word_bank × valid_words` matrix of feedback codes
#[derive(Debug, Clone)]
pub struct FeedbackTable {
    word_bank: Vec<Word>,
    valid_words: Vec<Word>,
    guess_index: FxHashMap<Word, usize>,
    answer_index: FxHashMap<Word, usize>,
    codes: Vec<u8>,
}

impl FeedbackTable {
    /// Build the table over the full guess and answer vocabularies
    ///
    /// Rows are computed in parallel; the result is identical to a
    /// sequential build.
    ///
    /// # Errors
    /// Returns `Error::EmptyVocabulary` if either list is empty.
    pub fn build(word_bank: &[Word], valid_words: &[Word]) -> Result<Self> {
        let mut table = Self::empty(word_bank, valid_words)?;
        let columns = valid_words.len();

        table
            .codes
            .par_chunks_mut(columns)
            .zip(word_bank.par_iter())
            .for_each(|(row, guess)| {
                for (cell, answer) in row.iter_mut().zip(valid_words) {
                    *cell = FeedbackCode::encode(guess, answer).value();
                }
            });

        Ok(table)
    }

    /// Reassemble a table from previously computed codes
    ///
    /// Returns `None` when the code buffer does not match the vocabulary's
    /// dimensions or holds a value outside the code range.
    #[must_use]
    pub fn from_codes(word_bank: &[Word], valid_words: &[Word], codes: Vec<u8>) -> Option<Self> {
        if codes.len() != word_bank.len() * valid_words.len()
            || codes.iter().any(|&c| FeedbackCode::new(c).is_none())
        {
            return None;
        }
        let mut table = Self::empty(word_bank, valid_words).ok()?;
        table.codes = codes;
        Some(table)
    }

    fn empty(word_bank: &[Word], valid_words: &[Word]) -> Result<Self> {
        if word_bank.is_empty() || valid_words.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        Ok(Self {
            word_bank: word_bank.to_vec(),
            valid_words: valid_words.to_vec(),
            guess_index: index_of(word_bank),
            answer_index: index_of(valid_words),
            codes: vec![0; word_bank.len() * valid_words.len()],
        })
    }

    /// All legal guesses, in table row order
    #[must_use]
    pub fn word_bank(&self) -> &[Word] {
        &self.word_bank
    }

    /// All legal hidden answers, in table column order
    #[must_use]
    pub fn valid_words(&self) -> &[Word] {
        &self.valid_words
    }

    /// Raw row-major code buffer
    #[must_use]
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Row index of a guess
    ///
    /// # Errors
    /// Returns `Error::UnknownWord` if the word is not in the word bank.
    pub fn guess_index(&self, word: &Word) -> Result<usize> {
        self.guess_index
            .get(word)
            .copied()
            .ok_or_else(|| Error::UnknownWord(word.to_string()))
    }

    /// Column index of an answer
    ///
    /// # Errors
    /// Returns `Error::UnknownWord` if the word is not a valid answer.
    pub fn answer_index(&self, word: &Word) -> Result<usize> {
        self.answer_index
            .get(word)
            .copied()
            .ok_or_else(|| Error::UnknownWord(word.to_string()))
    }

    /// Code at a (row, column) position
    ///
    /// # Panics
    /// Panics if either index is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, guess: usize, answer: usize) -> FeedbackCode {
        assert!(answer < self.valid_words.len(), "answer index out of range");
        FeedbackCode::from_raw(self.codes[guess * self.valid_words.len() + answer])
    }

    /// Code for a pair of words
    ///
    /// # Errors
    /// Returns `Error::UnknownWord` if either word is outside its vocabulary.
    pub fn lookup(&self, guess: &Word, answer: &Word) -> Result<FeedbackCode> {
        Ok(self.get(self.guess_index(guess)?, self.answer_index(answer)?))
    }

    /// One guess's codes against every answer
    #[inline]
    #[must_use]
    pub fn row(&self, guess: usize) -> &[u8] {
        let columns = self.valid_words.len();
        &self.codes[guess * columns..(guess + 1) * columns]
    }
}

fn index_of(words: &[Word]) -> FxHashMap<Word, usize> {
    let mut index = FxHashMap::default();
    for (i, &word) in words.iter().enumerate() {
        // First occurrence wins for duplicated entries
        index.entry(word).or_insert(i);
    }
    index
}
