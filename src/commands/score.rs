//! Guess scoring command
//!
//! Evaluates one guess against a known solution and returns the feedback
//! row, for checking positions by hand or scripting.

use crate::core::{EvaluationRow, Word, evaluate};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: String,
    pub solution: String,
    pub row: EvaluationRow,
}

/// Score a guess against a solution
///
/// # Errors
///
/// Returns an error if either word is malformed or the lengths differ.
pub fn score_guess(guess: &str, solution: &str) -> Result<ScoreResult, String> {
    let guess = Word::new(guess).map_err(|e| format!("Nieprawidłowe słowo: {e}"))?;
    let solution = Word::new(solution).map_err(|e| format!("Nieprawidłowe rozwiązanie: {e}"))?;

    let row = evaluate(&guess, &solution).map_err(|e| e.to_string())?;

    Ok(ScoreResult {
        guess: guess.text().to_string(),
        solution: solution.text().to_string(),
        row,
    })
}
