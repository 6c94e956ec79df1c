//! Wordle solving strategies
//!
//! Every strategy implements [`Solver`]; [`SolverKind`] selects one by name.

mod consistent;
mod random_uniform;
pub mod strategy;

pub use consistent::RandomConsistentSolver;
pub use random_uniform::RandomUniformSolver;
pub use strategy::{Solver, SolverKind};
