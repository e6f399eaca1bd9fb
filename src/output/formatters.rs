//! Formatting utilities for terminal output

use crate::board::Board;
use crate::core::{EvaluationRow, LetterState};
use crate::puzzle::GameMode;
use colored::Colorize;

/// Format a guess with its feedback colors
///
/// Letters are uppercased; correct letters render green, present letters
/// yellow and absent letters dimmed.
#[must_use]
pub fn colorize_guess(word: &str, row: &EvaluationRow) -> String {
    word.chars()
        .zip(row.states())
        .map(|(ch, state)| {
            let letter = ch.to_uppercase().to_string();
            match state {
                LetterState::Correct => letter.bright_green().bold().to_string(),
                LetterState::Present => letter.bright_yellow().bold().to_string(),
                LetterState::Absent => letter.bright_black().to_string(),
                LetterState::Empty => letter,
            }
        })
        .collect()
}

/// Build the shareable result grid
///
/// Header line then one emoji row per guess, e.g.:
///
/// ```text
/// Słówko dzienne 17 3/6
/// ⬛🟨⬛⬛⬛
/// 🟩🟩🟩⬛⬛
/// 🟩🟩🟩🟩🟩
/// ```
///
/// A lost game shows `X` in place of the guess count.
#[must_use]
pub fn share_text(mode: GameMode, word_number: i64, board: &Board, won: bool) -> String {
    let score = if won {
        board.attempts().to_string()
    } else {
        "X".to_string()
    };

    let mut out = format!(
        "Słówko {} {} {}/{}",
        mode.name().to_lowercase(),
        word_number,
        score,
        board.max_attempts()
    );
    for row in board.rows() {
        out.push('\n');
        out.push_str(&row.row().to_emoji());
    }
    out
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format remaining time as `HH:MM:SS`
#[must_use]
pub fn format_time_remaining(millis: i64) -> String {
    let total_seconds = millis.max(0) / 1000;
    let hours = total_seconds / 3600;
    let minutes = total_seconds % 3600 / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
