//! Słówko
//!
//! A Polish Wordle-style word game: deterministic daily, hourly and
//! infinite puzzles over 4-7 letter Polish words, with a TUI client,
//! a plain CLI mode and solver-style helper commands.
//!
//! # Quick Start
//!
//! ```rust
//! use slowko::core::{LetterState, Word, evaluate};
//!
//! let guess = Word::new("radio").unwrap();
//! let solution = Word::new("rzeka").unwrap();
//!
//! let row = evaluate(&guess, &solution).unwrap();
//! assert_eq!(row.state_at(0), LetterState::Correct);
//! ```

// Core domain types
pub mod core;

// Board history and derived constraints
pub mod board;

// Seeded puzzle selection
pub mod puzzle;

// Game orchestration
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
