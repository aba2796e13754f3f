//! Formatting utilities for terminal output

use crate::core::{Feedback, Verdict};
use colored::Colorize;

/// Format a feedback row as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .verdicts()
        .iter()
        .map(|verdict| match verdict {
            Verdict::Exact => '🟩',
            Verdict::Present => '🟨',
            Verdict::Absent => '⬜',
        })
        .collect()
}

/// Format a guessed row as colored tiles, one per letter
#[must_use]
pub fn colored_row(guess: &str, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.verdicts())
        .map(|(letter, verdict)| {
            let tile = format!(" {letter} ");
            match verdict {
                Verdict::Exact => tile.black().on_green().to_string(),
                Verdict::Present => tile.black().on_yellow().to_string(),
                Verdict::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect()
}
