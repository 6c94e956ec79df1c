//! Wordle feedback encoding and decoding
//!
//! Feedback for one guess is packed into a single byte using base-3 encoding:
//! - 0 = Absent (letter not in word, or its budget is used up)
//! - 1 = Present (letter in word, wrong position)
//! - 2 = Correct (letter in correct position)
//!
//! Position `i` contributes `digit × 3^i`, so position 0 is the
//! least-significant digit and every code lies in `0..=242`. This layout is
//! the one stored in cached tables and exported records, so it must not change.

use super::{WORD_LEN, Word};
use std::fmt;
use std::sync::LazyLock;

/// Number of distinct feedback codes (3^5)
pub const CODE_COUNT: usize = 243;

const POWERS_OF_THREE: [u8; WORD_LEN] = [1, 3, 9, 27, 81];

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    /// Ternary digit for this mark
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    /// Single-letter display form: `A`, `P` or `C`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'A',
            Self::Present => 'P',
            Self::Correct => 'C',
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Encoded feedback for one guess against one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeedbackCode(u8);

impl FeedbackCode {
    /// All positions correct; the only code meaning guess == answer
    pub const WIN: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Wrap a raw code, rejecting values outside `0..=242`
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if (value as usize) < CODE_COUNT {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Wrap a code already known to be in range
    #[inline]
    pub(crate) const fn from_raw(value: u8) -> Self {
        debug_assert!((value as usize) < CODE_COUNT, "feedback code must be < 243");
        Self(value)
    }

    /// Get the raw code (0-242)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.0 == Self::WIN.0
    }

    /// Compute the feedback when `guess` is played against `answer`
    ///
    /// Correct letters consume the answer's letter budget before any present
    /// letter is credited, so a repeated guess letter never earns more marks
    /// than the answer holds.
    ///
    /// # Examples
    /// ```
    /// use wordle_bench::core::{FeedbackCode, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    ///
    /// // c(A) r(A) a(C) n(A) e(C): 2×9 + 2×81 = 180
    /// assert_eq!(FeedbackCode::encode(&guess, &answer).value(), 180);
    /// ```
    #[must_use]
    pub fn encode(guess: &Word, answer: &Word) -> Self {
        let mut remaining = answer.letter_counts();
        let guess = guess.bytes();
        let answer = answer.bytes();

        let mut correct = [false; WORD_LEN];
        let mut code = 0u8;

        for i in 0..WORD_LEN {
            if guess[i] == answer[i] {
                correct[i] = true;
                remaining[usize::from(guess[i] - b'a')] -= 1;
                code += 2 * POWERS_OF_THREE[i];
            }
        }

        for i in 0..WORD_LEN {
            if correct[i] {
                continue;
            }
            let slot = &mut remaining[usize::from(guess[i] - b'a')];
            if *slot > 0 {
                *slot -= 1;
                code += POWERS_OF_THREE[i];
            }
        }

        Self(code)
    }

    /// Unpack the code into per-position marks
    #[must_use]
    pub fn decode(self) -> [Mark; WORD_LEN] {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut value = self.0;
        for mark in &mut marks {
            *mark = Mark::from_digit(value % 3);
            value /= 3;
        }
        marks
    }

    /// Pack per-position marks back into a code
    #[must_use]
    pub fn from_marks(marks: [Mark; WORD_LEN]) -> Self {
        let code = marks
            .iter()
            .zip(POWERS_OF_THREE)
            .map(|(mark, power)| mark.digit() * power)
            .sum();
        Self(code)
    }

    /// Display pattern such as `"AACAC"`, read from the shared decode table
    #[must_use]
    pub fn pattern(self) -> &'static str {
        decode_table().get(self)
    }
}

impl fmt::Display for FeedbackCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// Every code's display pattern, indexed by code
///
/// Depends only on the encoding, never on the vocabulary.
#[derive(Debug, Clone)]
pub struct DecodeTable {
    patterns: Vec<String>,
}

impl DecodeTable {
    /// Build the 243-entry table
    #[must_use]
    pub fn build() -> Self {
        let patterns = (0..CODE_COUNT)
            .map(|value| {
                FeedbackCode(value as u8)
                    .decode()
                    .iter()
                    .map(|mark| mark.symbol())
                    .collect()
            })
            .collect();
        Self { patterns }
    }

    #[must_use]
    pub fn get(&self, code: FeedbackCode) -> &str {
        &self.patterns[usize::from(code.0)]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

static DECODE_TABLE: LazyLock<DecodeTable> = LazyLock::new(DecodeTable::build);

/// Process-wide decode table, built on first use
#[must_use]
pub fn decode_table() -> &'static DecodeTable {
    &DECODE_TABLE
}
