//! Board state and history analysis
//!
//! The append-only game board plus everything derived from its history:
//! accumulated letter constraints, hard-mode validation and the candidate
//! filter.

#[allow(clippy::module_inception)]
mod board;
mod constraints;
mod filter;
mod hard_mode;

pub use board::{Board, BoardError, BoardRow, DEFAULT_MAX_ATTEMPTS, GameStatus};
pub use constraints::{ConstraintSet, LetterCount};
pub use filter::CandidateFilter;
pub use hard_mode::{Violation, ViolationKind, check_hard_mode};
