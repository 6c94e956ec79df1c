//! Game engine
//!
//! Drives one game at a time: picks the answer, asks the solver for guesses,
//! reads feedback from the shared table and records it.

use super::{Chooser, GameState};
use crate::core::{FeedbackCode, FeedbackTable, Word};
use crate::error::{Error, Result};
use crate::solver::Solver;
use log::{debug, info};
use std::sync::Arc;

/// Runs games between a chooser and a solver
///
/// The engine owns the game state and lends it to the solver read-only for
/// each guess. A new engine is not playable until [`GameEngine::reset`] (or
/// [`GameEngine::run`]) has chosen an answer.
pub struct GameEngine<C: Chooser, S: Solver> {
    chooser: C,
    solver: S,
    state: GameState,
}

impl<C: Chooser, S: Solver> GameEngine<C, S> {
    /// Create an engine over a prebuilt table
    ///
    /// # Parameters
    /// - `table`: Feedback table for the vocabulary, shared between engines
    /// - `max_turns`: Guesses allowed per game
    /// - `chooser`: Source of hidden answers
    /// - `solver`: Strategy producing guesses
    pub fn new(table: Arc<FeedbackTable>, max_turns: usize, chooser: C, solver: S) -> Self {
        Self {
            chooser,
            solver,
            state: GameState::new(table, max_turns),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn solver(&self) -> &S {
        &self.solver
    }

    /// Start a new game
    ///
    /// Clears the history, draws a new hidden answer and resets the solver.
    ///
    /// # Errors
    /// Propagates the chooser's error, e.g. `Error::EmptyVocabulary`.
    pub fn reset(&mut self) -> Result<()> {
        let answer = self.chooser.choose(self.state.valid_words())?;
        self.state.start(answer);
        self.solver.reset();
        debug!("New game: answer chosen by {}", self.chooser.name());
        Ok(())
    }

    /// Play one turn and return the guess with its feedback
    ///
    /// # Errors
    /// - `Error::GameAlreadyTerminal` if the game is already won or lost
    /// - `Error::NoAnswerSet` if `reset` has not been called
    /// - Any error from the solver, e.g. `Error::EmptyCandidateSet`
    /// - `Error::UnknownWord` if the solver guesses outside the word bank
    pub fn play_turn(&mut self) -> Result<(Word, FeedbackCode)> {
        if self.state.is_terminal() {
            return Err(Error::GameAlreadyTerminal);
        }
        let answer = self.state.answer.ok_or(Error::NoAnswerSet)?;

        let guess = self.solver.guess(&self.state)?;
        let code = self.state.table().lookup(&guess, &answer)?;
        self.state.record(guess, code);

        debug!("Turn {}: guess='{guess}', feedback='{code}'", self.state.turn());
        Ok((guess, code))
    }

    /// Reset, then play until the game ends
    ///
    /// # Errors
    /// Propagates any error from [`GameEngine::reset`] or
    /// [`GameEngine::play_turn`].
    pub fn run(&mut self) -> Result<&GameState> {
        self.reset()?;

        while !self.state.is_terminal() {
            self.play_turn()?;
        }

        if self.state.is_won() {
            info!(
                "{} won in {} turns",
                self.solver.name(),
                self.state.turn()
            );
        } else if let Some(answer) = self.state.revealed_answer() {
            info!("{} lost; the answer was '{answer}'", self.solver.name());
        }

        Ok(&self.state)
    }
}
