//! Random consistent guessing
//!
//! Keeps the set of answers that would have produced every feedback seen so
//! far and guesses uniformly among them. Because feedback comes from the same
//! table used for pruning, the true answer is never removed.

use super::Solver;
use crate::core::Word;
use crate::error::{Error, Result};
use crate::game::{GameState, seeded_rng};
use log::trace;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Consistency-filter solver
///
/// Candidates are stored as column indices into the table's valid words and
/// are created lazily on the first guess after a reset.
#[derive(Debug, Clone)]
pub struct RandomConsistentSolver {
    rng: StdRng,
    candidates: Option<Vec<usize>>,
    processed_turns: usize,
}

impl RandomConsistentSolver {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed),
            candidates: None,
            processed_turns: 0,
        }
    }

    /// Fold the newest history entry into the candidate set
    ///
    /// Only the most recent `(guess, feedback)` pair is applied, even if
    /// several turns were played since the last call; the processed count
    /// then jumps to the full history length. Within the engine the solver is
    /// consulted every turn, so nothing is skipped there.
    ///
    /// # Errors
    /// Returns `Error::UnknownWord` if the recorded guess is not in the word
    /// bank.
    pub fn update(&mut self, state: &GameState) -> Result<()> {
        let history = state.history();
        if history.len() <= self.processed_turns {
            return Ok(());
        }

        let table = state.table();
        let candidates = self
            .candidates
            .get_or_insert_with(|| (0..table.valid_words().len()).collect());

        let (last_guess, last_code) = history[history.len() - 1];
        let row = table.row(table.guess_index(&last_guess)?);
        let before = candidates.len();
        candidates.retain(|&answer| row[answer] == last_code.value());
        trace!(
            "'{last_guess}' -> {last_code}: {before} -> {} candidates",
            candidates.len()
        );

        self.processed_turns = history.len();
        Ok(())
    }

    /// Number of candidates left, or `None` before the first update
    #[must_use]
    pub fn candidate_count(&self) -> Option<usize> {
        self.candidates.as_ref().map(Vec::len)
    }

    /// Remaining candidate words
    ///
    /// Before the first update this is every valid answer.
    #[must_use]
    pub fn candidates(&self, state: &GameState) -> Vec<Word> {
        let valid = state.valid_words();
        match &self.candidates {
            Some(indices) => indices.iter().map(|&i| valid[i]).collect(),
            None => valid.to_vec(),
        }
    }
}

impl Solver for RandomConsistentSolver {
    fn guess(&mut self, state: &GameState) -> Result<Word> {
        self.update(state)?;

        let candidates = self
            .candidates
            .get_or_insert_with(|| (0..state.valid_words().len()).collect());

        candidates
            .choose(&mut self.rng)
            .map(|&i| state.valid_words()[i])
            .ok_or(Error::EmptyCandidateSet)
    }

    fn reset(&mut self) {
        self.candidates = None;
        self.processed_turns = 0;
    }

    fn name(&self) -> &'static str {
        "random-consistent"
    }
}
