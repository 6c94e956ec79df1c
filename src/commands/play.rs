//! Play command
//!
//! Plays a single game between a random chooser and a named strategy.

use crate::core::FeedbackTable;
use crate::error::Result;
use crate::game::{GameEngine, GameState, RandomUniformChooser};
use crate::solver::{Solver, SolverKind};
use std::sync::Arc;

/// Finished game with the strategy that played it
#[derive(Debug, Clone)]
pub struct PlayResult {
    pub strategy: &'static str,
    pub state: GameState,
}

/// Play one game to completion
///
/// # Errors
/// Returns `Error::InvalidSettings` for an unknown strategy, or any engine
/// error.
pub fn play(
    table: Arc<FeedbackTable>,
    max_turns: usize,
    strategy: &str,
    seed: Option<u64>,
) -> Result<PlayResult> {
    let solver = SolverKind::from_name(strategy, seed)?;
    let chooser = RandomUniformChooser::new(seed);
    let mut engine = GameEngine::new(table, max_turns, chooser, solver);
    let state = engine.run()?.clone();

    Ok(PlayResult {
        strategy: engine.solver().name(),
        state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::wordlists::loader::words_from_slice;

    fn table() -> Arc<FeedbackTable> {
        let words = words_from_slice(&["crane", "slate", "apple", "grape"]).unwrap();
        Arc::new(FeedbackTable::build(&words, &words).unwrap())
    }

    #[test]
    fn plays_to_the_end() {
        let result = play(table(), 6, "consistent", Some(5)).unwrap();
        assert_eq!(result.strategy, "random-consistent");
        assert!(result.state.is_won());
        assert!(result.state.revealed_answer().is_some());
    }

    #[test]
    fn seeded_games_repeat() {
        let first = play(table(), 6, "random", Some(9)).unwrap();
        let second = play(table(), 6, "random", Some(9)).unwrap();
        assert_eq!(first.state.history(), second.state.history());
    }

    #[test]
    fn unknown_strategy() {
        assert!(matches!(
            play(table(), 6, "oracle", None),
            Err(Error::InvalidSettings(_))
        ));
    }
}
