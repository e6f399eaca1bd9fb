//! Puzzle scheduling
//!
//! Deterministic mapping from wall-clock time to puzzle identity: game
//! modes, window seeds, sequential word numbers and the seeded solution
//! pick. Everything is a pure function of its inputs; the caller supplies
//! the current time and time-zone offset.

mod mode;
mod seed;

pub use mode::{GameMode, MODE_START_EPOCH_MS, MS_DAY, MS_HOUR, MS_MINUTE, MS_SECOND};
pub use seed::{new_seed, pick_solution_index, time_remaining, word_number};
