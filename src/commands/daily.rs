//! Puzzle window command
//!
//! Reports the current puzzle number, its seed and the time remaining in
//! the window, without revealing the solution.

use crate::puzzle::{GameMode, new_seed, time_remaining, word_number};

/// Information about the current puzzle window
pub struct PuzzleInfo {
    pub mode: GameMode,
    pub seed: i64,
    pub word_number: i64,
    /// Milliseconds until the next puzzle; `None` for infinite mode
    pub remaining_millis: Option<i64>,
}

/// Describe the puzzle window at `now_millis`
#[must_use]
pub fn puzzle_info(mode: GameMode, now_millis: i64, utc_offset_minutes: i64) -> PuzzleInfo {
    let seed = new_seed(mode, now_millis, utc_offset_minutes);
    let remaining_millis = match mode {
        GameMode::Infinite => None,
        _ => Some(time_remaining(mode, seed, now_millis, utc_offset_minutes)),
    };

    PuzzleInfo {
        mode,
        seed,
        word_number: word_number(mode, seed),
        remaining_millis,
    }
}
