//! Word solving command
//!
//! Plays a game automatically against a known solution, always guessing the
//! first answer still consistent with the board. Shows how quickly the
//! candidate pool collapses for a given word.

use crate::board::{Board, CandidateFilter};
use crate::core::{EvaluationRow, Word, evaluate};
use crate::wordlists::WordList;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// A single guess step in the solution
pub struct SolveStep {
    pub word: String,
    pub row: EvaluationRow,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub steps: Vec<SolveStep>,
    pub success: bool,
}

/// Pick the next guess: the first answer consistent with the board
fn next_guess<'a>(board: &Board, list: &'a WordList) -> Option<&'a Word> {
    let filter = CandidateFilter::from_board(board);
    list.answers().iter().find(|w| filter.allows(w))
}

/// Solve a specific word by candidate elimination
///
/// # Errors
///
/// Returns an error if the target is not a valid answer word or the
/// candidate pool runs dry, which indicates an inconsistent word list.
pub fn solve_word(config: &SolveConfig, list: &WordList) -> Result<SolveResult, String> {
    let target = Word::new(&config.target).map_err(|e| format!("Nieprawidłowe słowo: {e}"))?;
    if !list.answers().contains(&target) {
        return Err(format!(
            "Słowo \"{target}\" nie występuje na liście rozwiązań"
        ));
    }

    let mut board = Board::with_max_attempts(target.len(), config.max_guesses);
    let mut steps = Vec::new();

    while !board.is_terminal() {
        let filter = CandidateFilter::from_board(&board);
        let candidates_before = filter.count(list.answers());

        let guess = next_guess(&board, list)
            .ok_or_else(|| "Brak pasujących słów na liście rozwiązań".to_string())?
            .clone();

        let row = evaluate(&guess, &target).map_err(|e| e.to_string())?;
        board = board.commit(guess.clone(), row.clone()).map_err(|e| e.to_string())?;

        let candidates_after = CandidateFilter::from_board(&board).count(list.answers());
        let won = row.is_win();

        steps.push(SolveStep {
            word: guess.text().to_string(),
            row,
            candidates_before,
            candidates_after,
        });

        if won {
            return Ok(SolveResult {
                target: config.target.clone(),
                steps,
                success: true,
            });
        }
    }

    Ok(SolveResult {
        target: config.target.clone(),
        steps,
        success: false,
    })
}
