//! Crate-wide error type
//!
//! Every failure here is a local, synchronous contract violation. Nothing is
//! retried: feedback and state transitions are deterministic, so an error
//! always points at a sequencing bug or bad input on the caller's side.

use crate::core::WordError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the game core, the solvers and their collaborators
#[derive(Error, Debug)]
pub enum Error {
    /// A word failed validation (length or alphabet)
    #[error("invalid word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    /// A chooser or table was given no words to work with
    #[error("vocabulary is empty")]
    EmptyVocabulary,

    /// A turn was requested after the game was won or ran out of turns
    #[error("cannot play turn: game has already terminated")]
    GameAlreadyTerminal,

    /// A turn was requested before `reset` chose a hidden answer
    #[error("cannot play turn: hidden answer has not been set")]
    NoAnswerSet,

    /// A word was looked up in an index it does not belong to
    #[error("word '{0}' is not part of the vocabulary")]
    UnknownWord(String),

    /// Filtering left the consistency solver with nothing to guess
    #[error("no candidate answers remain consistent with the feedback")]
    EmptyCandidateSet,

    /// A setting was out of its accepted range
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            Error::UnknownWord("zzzzz".into()).to_string(),
            "word 'zzzzz' is not part of the vocabulary"
        );
        assert!(
            Error::GameAlreadyTerminal
                .to_string()
                .contains("already terminated")
        );
        assert!(Error::NoAnswerSet.to_string().contains("hidden answer"));
    }

    #[test]
    fn invalid_word_keeps_source() {
        use std::error::Error as _;

        let err = Error::InvalidWord {
            word: "toolong".into(),
            source: WordError::InvalidLength(7),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("toolong"));
    }
}
