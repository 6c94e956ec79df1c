//! Per-game state
//!
//! Turn count, terminality and the win flag are derived from the history on
//! every call and never stored.

use crate::core::{FeedbackCode, FeedbackTable, Word};
use std::sync::Arc;

/// Progress of a single game
///
/// Owned by the engine. Solvers only ever see a shared reference for the
/// duration of one `guess` call.
#[derive(Debug, Clone)]
pub struct GameState {
    table: Arc<FeedbackTable>,
    pub(super) answer: Option<Word>,
    history: Vec<(Word, FeedbackCode)>,
    max_turns: usize,
}

impl GameState {
    /// Fresh state with no answer and an empty history
    #[must_use]
    pub fn new(table: Arc<FeedbackTable>, max_turns: usize) -> Self {
        Self {
            table,
            answer: None,
            history: Vec::new(),
            max_turns,
        }
    }

    /// Shared feedback table for this game's vocabulary
    #[must_use]
    pub fn table(&self) -> &FeedbackTable {
        &self.table
    }

    /// All legal guesses
    #[must_use]
    pub fn word_bank(&self) -> &[Word] {
        self.table.word_bank()
    }

    /// All legal hidden answers
    #[must_use]
    pub fn valid_words(&self) -> &[Word] {
        self.table.valid_words()
    }

    /// `(guess, feedback)` pairs in the order they were played
    #[must_use]
    pub fn history(&self) -> &[(Word, FeedbackCode)] {
        &self.history
    }

    #[must_use]
    pub const fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Number of guesses already made
    #[must_use]
    pub fn turn(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn remaining_turns(&self) -> usize {
        self.max_turns.saturating_sub(self.turn())
    }

    /// Solved, or out of turns
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        match self.history.last() {
            Some((_, code)) => code.is_win() || self.turn() >= self.max_turns,
            None => false,
        }
    }

    /// The last guess matched the answer
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history.last().is_some_and(|(_, code)| code.is_win())
    }

    /// Out of turns without a win
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.is_terminal() && !self.is_won()
    }

    /// The hidden answer, revealed only once the game is over
    #[must_use]
    pub fn revealed_answer(&self) -> Option<Word> {
        if self.is_terminal() { self.answer } else { None }
    }

    pub(crate) fn record(&mut self, guess: Word, code: FeedbackCode) {
        self.history.push((guess, code));
    }

    pub(crate) fn start(&mut self, answer: Word) {
        self.history.clear();
        self.answer = Some(answer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(max_turns: usize) -> GameState {
        let words: Vec<Word> = ["apple", "grape", "mango"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        let table = FeedbackTable::build(&words, &words).unwrap();
        GameState::new(Arc::new(table), max_turns)
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn empty_history_is_not_terminal() {
        let state = state(3);
        assert!(!state.is_terminal());
        assert!(!state.is_won());
        assert!(!state.is_lost());
        assert_eq!(state.turn(), 0);
        assert_eq!(state.remaining_turns(), 3);
    }

    #[test]
    fn win_is_terminal_on_any_turn() {
        let mut state = state(6);
        state.start(word("apple"));
        state.record(word("apple"), FeedbackCode::WIN);

        assert!(state.is_terminal());
        assert!(state.is_won());
        assert_eq!(state.turn(), 1);
        assert_eq!(state.remaining_turns(), 5);
    }

    #[test]
    fn turn_limit_is_terminal_without_win() {
        let mut state = state(2);
        state.start(word("apple"));
        let miss = state.table().lookup(&word("mango"), &word("apple")).unwrap();

        state.record(word("mango"), miss);
        assert!(!state.is_terminal());

        state.record(word("mango"), miss);
        assert!(state.is_terminal());
        assert!(state.is_lost());
        assert_eq!(state.remaining_turns(), 0);
    }

    #[test]
    fn win_on_last_turn_counts_as_win() {
        let mut state = state(2);
        state.start(word("apple"));
        let miss = state.table().lookup(&word("grape"), &word("apple")).unwrap();
        state.record(word("grape"), miss);
        state.record(word("apple"), FeedbackCode::WIN);

        assert!(state.is_terminal());
        assert!(state.is_won());
    }

    #[test]
    fn answer_hidden_until_terminal() {
        let mut state = state(1);
        state.start(word("grape"));
        assert_eq!(state.revealed_answer(), None);

        state.record(word("grape"), FeedbackCode::WIN);
        assert_eq!(state.revealed_answer(), Some(word("grape")));
    }

    #[test]
    fn start_clears_history() {
        let mut state = state(1);
        state.start(word("grape"));
        state.record(word("grape"), FeedbackCode::WIN);

        state.start(word("mango"));
        assert!(state.history().is_empty());
        assert!(!state.is_terminal());
    }
}
