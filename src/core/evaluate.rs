//! Guess evaluation
//!
//! Computes the per-cell feedback row for a guess against a solution using
//! the two-pass algorithm: exact matches first, then present-elsewhere
//! letters drawn from the multiset of still-unmatched solution letters. A
//! letter guessed more times than the solution contains it yields `Absent`
//! for the surplus copies, never a second `Present`.

use super::state::LetterState;
use super::word::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// The feedback row for one evaluated guess
///
/// One `LetterState` per position. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationRow(Vec<LetterState>);

/// Error type for evaluation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvalError {
    LengthMismatch { guess: usize, solution: usize },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { guess, solution } => {
                write!(
                    f,
                    "Guess has {guess} letters but the solution has {solution}"
                )
            }
        }
    }
}

impl std::error::Error for EvalError {}

impl EvaluationRow {
    /// Number of cells in the row
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the row has no cells
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The per-cell states
    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.0
    }

    /// State at a given position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn state_at(&self, position: usize) -> LetterState {
        self.0[position]
    }

    /// True when every cell is `Correct` (a winning row)
    #[must_use]
    pub fn is_win(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Number of `Correct` cells
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.0.iter().filter(|&&s| s == LetterState::Correct).count()
    }

    /// Render the row as a share-grid emoji string
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }

    /// Parse a row from feedback symbols like `"G-Y--"` or `"🟩⬛🟨⬛⬛"`
    ///
    /// Returns `None` on unknown symbols or unsupported lengths.
    #[must_use]
    pub fn from_symbols(s: &str) -> Option<Self> {
        let states: Option<Vec<LetterState>> = s.chars().map(LetterState::from_symbol).collect();
        let states = states?;

        use super::word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&states.len()) {
            return None;
        }

        Some(Self(states))
    }
}

impl fmt::Display for EvaluationRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

/// Multiset of solution letters left unmatched after the exact-match pass
///
/// For each position where guess and solution disagree, the solution letter
/// at that position is available for a `Present` mark elsewhere in the
/// guess. Resolves duplicate-letter tie-breaking.
#[must_use]
pub fn unmatched_letters(guess: &Word, solution: &Word) -> FxHashMap<char, u8> {
    let mut counts = solution.char_counts();

    for (i, &ch) in guess.chars().iter().enumerate() {
        if i < solution.len() && solution.char_at(i) == ch {
            if let Some(count) = counts.get_mut(&ch) {
                *count = count.saturating_sub(1);
            }
        }
    }

    counts.retain(|_, count| *count > 0);
    counts
}

/// Evaluate a guess against the solution
///
/// # Algorithm
/// 1. First pass: mark exact position matches `Correct` and consume those
///    solution letters.
/// 2. Second pass: mark `Present` where the letter still exists in the
///    unmatched multiset, decrementing it; otherwise `Absent`.
///
/// Comparisons are on normalized lowercase characters ([`Word`] guarantees
/// this).
///
/// # Errors
/// Returns `EvalError::LengthMismatch` when guess and solution lengths
/// differ.
///
/// # Examples
/// ```
/// use slowko::core::{LetterState, Word, evaluate};
///
/// let guess = Word::new("radio").unwrap();
/// let solution = Word::new("rzeka").unwrap();
/// let row = evaluate(&guess, &solution).unwrap();
///
/// assert_eq!(row.state_at(0), LetterState::Correct); // r
/// assert_eq!(row.state_at(1), LetterState::Present); // a occurs later
/// ```
pub fn evaluate(guess: &Word, solution: &Word) -> Result<EvaluationRow, EvalError> {
    if guess.len() != solution.len() {
        return Err(EvalError::LengthMismatch {
            guess: guess.len(),
            solution: solution.len(),
        });
    }

    let mut states = vec![LetterState::Absent; guess.len()];
    let mut available = unmatched_letters(guess, solution);

    // First pass: exact matches
    for (i, &ch) in guess.chars().iter().enumerate() {
        if solution.char_at(i) == ch {
            states[i] = LetterState::Correct;
        }
    }

    // Second pass: present-elsewhere letters from the remaining pool
    for (i, &ch) in guess.chars().iter().enumerate() {
        if states[i] == LetterState::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&ch)
            && *count > 0
        {
            states[i] = LetterState::Present;
            *count -= 1;
        }
    }

    Ok(EvaluationRow(states))
}
