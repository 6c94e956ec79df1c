//! Hidden answer selection

use crate::core::Word;
use crate::error::{Error, Result};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Picks the hidden answer for each new game
pub trait Chooser {
    /// Select one word from `valid_words`
    ///
    /// # Errors
    /// Returns `Error::EmptyVocabulary` if `valid_words` is empty.
    fn choose(&mut self, valid_words: &[Word]) -> Result<Word>;

    /// Short name used in benchmark reports
    fn name(&self) -> &'static str;
}

// Mixed into the chooser's seed so a solver built from the same seed draws
// from a different stream
const ANSWER_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Uniformly random answer, optionally seeded for reproducibility
#[derive(Debug, Clone)]
pub struct RandomUniformChooser {
    rng: StdRng,
}

impl RandomUniformChooser {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            rng: seeded_rng(seed.map(|s| s ^ ANSWER_STREAM)),
        }
    }
}

impl Chooser for RandomUniformChooser {
    fn choose(&mut self, valid_words: &[Word]) -> Result<Word> {
        valid_words
            .choose(&mut self.rng)
            .copied()
            .ok_or(Error::EmptyVocabulary)
    }

    fn name(&self) -> &'static str {
        "random-uniform"
    }
}

/// Seeded `StdRng`, or one drawn from OS entropy when no seed is given
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}
