//! Formatting utilities for terminal output

use crate::core::{FeedbackCode, Mark};

/// Format a feedback code as an emoji row
#[must_use]
pub fn code_to_emoji(code: FeedbackCode) -> String {
    code.decode()
        .iter()
        .map(|mark| match mark {
            Mark::Absent => '⬜',
            Mark::Present => '🟨',
            Mark::Correct => '🟩',
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    #[test]
    fn emoji_all_absent() {
        let code = FeedbackCode::new(0).unwrap();
        assert_eq!(code_to_emoji(code), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_win() {
        assert_eq!(code_to_emoji(FeedbackCode::WIN), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_follows_positions() {
        let code = FeedbackCode::encode(&Word::new("robot").unwrap(), &Word::new("floor").unwrap());
        assert_eq!(code_to_emoji(code), "🟨🟨⬜🟩⬜");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
