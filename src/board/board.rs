//! Game board
//!
//! An append-only sequence of evaluated guesses. Rows are committed once and
//! never mutated; committing returns a new board value.

use crate::core::{EvaluationRow, Word};
use std::fmt;

/// Default number of guesses before the game is lost
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// One committed guess with its feedback row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardRow {
    guess: Word,
    row: EvaluationRow,
}

impl BoardRow {
    /// The guessed word
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &Word {
        &self.guess
    }

    /// The feedback row for the guess
    #[inline]
    #[must_use]
    pub fn row(&self) -> &EvaluationRow {
        &self.row
    }
}

/// Terminal state of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Error type for invalid board commits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Guess or row length differs from the board's word length
    LengthMismatch { expected: usize, actual: usize },
    /// The board is already won or lost
    Terminal(GameStatus),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { expected, actual } => {
                write!(f, "Row has {actual} cells, board expects {expected}")
            }
            Self::Terminal(GameStatus::Won) => write!(f, "Board is already won"),
            Self::Terminal(_) => write!(f, "Board is already finished"),
        }
    }
}

impl std::error::Error for BoardError {}

/// An append-only board of evaluated guesses
///
/// Created empty, grows by exactly one row per submitted guess and becomes
/// terminal on an all-correct row (won) or when `max_attempts` rows are
/// committed without one (lost).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    word_length: usize,
    max_attempts: usize,
    rows: Vec<BoardRow>,
}

impl Board {
    /// Create an empty board for words of the given length
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self::with_max_attempts(word_length, DEFAULT_MAX_ATTEMPTS)
    }

    /// Create an empty board with a custom attempt limit
    #[must_use]
    pub fn with_max_attempts(word_length: usize, max_attempts: usize) -> Self {
        Self {
            word_length,
            max_attempts,
            rows: Vec::new(),
        }
    }

    /// Word length every committed row must have
    #[inline]
    #[must_use]
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Maximum number of guesses
    #[inline]
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Committed rows, in commit order
    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[BoardRow] {
        &self.rows
    }

    /// Number of committed guesses
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.rows.len()
    }

    /// The most recently committed row, if any
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&BoardRow> {
        self.rows.last()
    }

    /// Current board status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.rows.last() {
            Some(last) if last.row.is_win() => GameStatus::Won,
            _ if self.rows.len() >= self.max_attempts => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    /// Whether no further guesses are accepted
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// Commit an evaluated guess, returning the successor board
    ///
    /// # Errors
    /// - `BoardError::Terminal` when the board is already won or lost
    /// - `BoardError::LengthMismatch` when guess or row length differs from
    ///   the board's word length
    pub fn commit(&self, guess: Word, row: EvaluationRow) -> Result<Self, BoardError> {
        let status = self.status();
        if status != GameStatus::InProgress {
            return Err(BoardError::Terminal(status));
        }
        if guess.len() != self.word_length {
            return Err(BoardError::LengthMismatch {
                expected: self.word_length,
                actual: guess.len(),
            });
        }
        if row.len() != self.word_length {
            return Err(BoardError::LengthMismatch {
                expected: self.word_length,
                actual: row.len(),
            });
        }

        let mut rows = self.rows.clone();
        rows.push(BoardRow { guess, row });
        Ok(Self {
            word_length: self.word_length,
            max_attempts: self.max_attempts,
            rows,
        })
    }
}
