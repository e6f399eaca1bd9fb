//! Output and display functionality

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_hint_result, print_puzzle_info, print_score_result,
    print_solve_result, print_stats,
};
pub use formatters::{colorize_guess, create_progress_bar, format_time_remaining, share_text};
