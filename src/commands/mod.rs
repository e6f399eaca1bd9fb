//! Command implementations

pub mod benchmark;
pub mod daily;
pub mod hint;
pub mod score;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use daily::{PuzzleInfo, puzzle_info};
pub use hint::{HintResult, find_candidates};
pub use score::{ScoreResult, score_guess};
pub use simple::{SimpleConfig, now_millis, run_simple};
pub use solve::{SolveConfig, SolveResult, SolveStep, solve_word};
