//! Feedback command

use crate::core::{FeedbackCode, Word};
use crate::error::Result;
use crate::wordlists::loader::parse_word;

/// Validate both words and compute the feedback for `guess` against `answer`
///
/// # Errors
/// Returns `Error::InvalidWord` naming the first malformed word.
pub fn feedback(guess: &str, answer: &str) -> Result<(Word, Word, FeedbackCode)> {
    let guess = parse_word(guess)?;
    let answer = parse_word(answer)?;
    Ok((guess, answer, FeedbackCode::encode(&guess, &answer)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn encodes_valid_words() {
        let (guess, answer, code) = feedback("SPEED", "abide").unwrap();
        assert_eq!(guess.as_str(), "speed");
        assert_eq!(answer.as_str(), "abide");
        assert_eq!(code.pattern(), "AAPAP");
    }

    #[test]
    fn names_the_bad_word() {
        assert!(matches!(
            feedback("crane", "sl4te"),
            Err(Error::InvalidWord { word, .. }) if word == "sl4te"
        ));
    }
}
