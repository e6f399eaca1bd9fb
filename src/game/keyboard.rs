//! Keyboard letter hints
//!
//! Aggregates the best-known state of every guessed letter for on-screen
//! keyboard coloring. States only improve: a letter shown green never
//! downgrades to yellow when a later guess places it wrong.

use crate::board::Board;
use crate::core::LetterState;
use rustc_hash::FxHashMap;

/// Best-known evaluation state per guessed letter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    states: FxHashMap<char, LetterState>,
}

impl Keyboard {
    /// Aggregate letter states from every committed row
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut states = FxHashMap::default();
        for row in board.rows() {
            for (ch, state) in row.guess().chars().iter().zip(row.row().states()) {
                let entry = states.entry(*ch).or_insert(LetterState::Empty);
                *entry = entry.merge(*state);
            }
        }
        Self { states }
    }

    /// State of one letter, `Empty` if never guessed
    #[must_use]
    pub fn state_of(&self, ch: char) -> LetterState {
        self.states.get(&ch).copied().unwrap_or_default()
    }

    /// Letters with any recorded state
    #[must_use]
    pub fn guessed_letters(&self) -> impl Iterator<Item = (char, LetterState)> + '_ {
        self.states.iter().map(|(&ch, &state)| (ch, state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, evaluate};

    fn board_after(solution: &str, guesses: &[&str]) -> Board {
        let solution = Word::new(solution).unwrap();
        let mut board = Board::new(solution.len());
        for raw in guesses {
            let guess = Word::new(raw).unwrap();
            let row = evaluate(&guess, &solution).unwrap();
            board = board.commit(guess, row).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_gives_empty_keyboard() {
        let keyboard = Keyboard::from_board(&Board::new(5));
        assert_eq!(keyboard.state_of('a'), LetterState::Empty);
        assert_eq!(keyboard.guessed_letters().count(), 0);
    }

    #[test]
    fn states_reflect_evaluation() {
        let board = board_after("rzeka", &["radio"]);
        let keyboard = Keyboard::from_board(&board);

        assert_eq!(keyboard.state_of('r'), LetterState::Correct);
        assert_eq!(keyboard.state_of('a'), LetterState::Present);
        assert_eq!(keyboard.state_of('d'), LetterState::Absent);
        assert_eq!(keyboard.state_of('z'), LetterState::Empty);
    }

    #[test]
    fn correct_never_downgrades() {
        // 'e' is green in rzecz; serce later shows it yellow elsewhere
        let board = board_after("rzeka", &["rzecz", "serce"]);
        let keyboard = Keyboard::from_board(&board);

        assert_eq!(keyboard.state_of('e'), LetterState::Correct);
    }

    #[test]
    fn present_upgrades_to_correct() {
        let board = board_after("rzeka", &["radio", "rzeka"]);
        let keyboard = Keyboard::from_board(&board);

        assert_eq!(keyboard.state_of('a'), LetterState::Correct);
    }
}
