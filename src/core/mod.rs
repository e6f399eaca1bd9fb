//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with no I/O: the Polish
//! alphabet, validated words, per-cell letter states and the guess evaluator.
//! All types here are pure and deterministic.

pub mod alphabet;
mod evaluate;
mod state;
mod word;

pub use evaluate::{EvalError, EvaluationRow, evaluate, unmatched_letters};
pub use state::LetterState;
pub use word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, Word, WordError};
