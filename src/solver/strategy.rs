//! Guess selection strategies
//!
//! Defines the Solver trait and the enum used to pick a strategy by name.

use super::{RandomConsistentSolver, RandomUniformSolver};
use crate::core::Word;
use crate::error::{Error, Result};
use crate::game::GameState;

/// A strategy producing one guess per turn
///
/// Every solver must be resettable so that a single instance can play many
/// games in a row.
pub trait Solver {
    /// Produce the next guess for the current state
    ///
    /// The state is only borrowed for this call; solvers keep whatever they
    /// need in their own fields.
    ///
    /// # Errors
    /// Returns an error if the solver has nothing left to guess.
    fn guess(&mut self, state: &GameState) -> Result<Word>;

    /// Drop all per-game state before a new game
    fn reset(&mut self);

    /// Short name used in benchmark reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all solver types
///
/// Allows runtime selection of a solver while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum SolverKind {
    /// Uniform over valid answers or the whole word bank
    RandomUniform(RandomUniformSolver),
    /// Uniform over answers consistent with all feedback so far
    RandomConsistent(RandomConsistentSolver),
}

impl SolverKind {
    /// Names accepted by [`SolverKind::from_name`]
    pub const NAMES: [&'static str; 3] = ["random", "random-all", "consistent"];

    /// Create a solver from its name
    ///
    /// # Errors
    /// Returns `Error::InvalidSettings` for an unrecognized name.
    pub fn from_name(name: &str, seed: Option<u64>) -> Result<Self> {
        match name {
            "random" => Ok(Self::RandomUniform(RandomUniformSolver::new(seed, false))),
            "random-all" => Ok(Self::RandomUniform(RandomUniformSolver::new(seed, true))),
            "consistent" => Ok(Self::RandomConsistent(RandomConsistentSolver::new(seed))),
            other => Err(Error::InvalidSettings(format!(
                "unknown strategy '{other}', expected one of: {}",
                Self::NAMES.join(", ")
            ))),
        }
    }
}

impl Solver for SolverKind {
    fn guess(&mut self, state: &GameState) -> Result<Word> {
        match self {
            Self::RandomUniform(s) => s.guess(state),
            Self::RandomConsistent(s) => s.guess(state),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::RandomUniform(s) => s.reset(),
            Self::RandomConsistent(s) => s.reset(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::RandomUniform(s) => s.name(),
            Self::RandomConsistent(s) => s.name(),
        }
    }
}
