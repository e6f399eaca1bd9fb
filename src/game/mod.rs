//! Game orchestration
//!
//! Ties the evaluation engine, board and word lists into a playable game:
//! guess validation, win/loss statistics and keyboard hints.

#[allow(clippy::module_inception)]
mod game;
mod keyboard;
mod stats;

pub use game::{Game, GuessError};
pub use keyboard::Keyboard;
pub use stats::Stats;
