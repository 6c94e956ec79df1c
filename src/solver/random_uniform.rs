//! Uniform random guessing
//!
//! Ignores feedback entirely. Useful as a baseline for the benchmark.

use super::Solver;
use crate::core::Word;
use crate::error::{Error, Result};
use crate::game::{GameState, seeded_rng};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Picks a random word every turn
#[derive(Debug, Clone)]
pub struct RandomUniformSolver {
    rng: StdRng,
    choose_from_all: bool,
}

impl RandomUniformSolver {
    /// # Parameters
    /// - `seed`: Fixes the guess sequence when set
    /// - `choose_from_all`: Sample from the whole word bank instead of the
    ///   valid answers
    #[must_use]
    pub fn new(seed: Option<u64>, choose_from_all: bool) -> Self {
        Self {
            rng: seeded_rng(seed),
            choose_from_all,
        }
    }
}

impl Solver for RandomUniformSolver {
    fn guess(&mut self, state: &GameState) -> Result<Word> {
        let pool = if self.choose_from_all {
            state.word_bank()
        } else {
            state.valid_words()
        };
        pool.choose(&mut self.rng)
            .copied()
            .ok_or(Error::EmptyVocabulary)
    }

    fn reset(&mut self) {}

    fn name(&self) -> &'static str {
        if self.choose_from_all {
            "random-uniform-all"
        } else {
            "random-uniform"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackTable;
    use std::sync::Arc;

    fn state() -> GameState {
        let bank: Vec<Word> = ["crane", "slate", "irate", "crate"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let answers = bank[2..].to_vec();
        GameState::new(Arc::new(FeedbackTable::build(&bank, &answers).unwrap()), 6)
    }

    #[test]
    fn answers_only_by_default() {
        let state = state();
        let mut solver = RandomUniformSolver::new(Some(11), false);
        for _ in 0..30 {
            let guess = solver.guess(&state).unwrap();
            assert!(state.valid_words().contains(&guess));
        }
    }

    #[test]
    fn whole_bank_when_asked() {
        let state = state();
        let mut solver = RandomUniformSolver::new(Some(11), true);
        let seen: Vec<Word> = (0..200).map(|_| solver.guess(&state).unwrap()).collect();
        assert!(seen.iter().all(|w| state.word_bank().contains(w)));
        assert!(seen.iter().any(|w| !state.valid_words().contains(w)));
    }
}
