//! Game state
//!
//! One puzzle in progress: the secret solution, the board so far and the
//! rules in force. `Game` is an immutable record; submitting a guess
//! returns the successor state instead of mutating in place.

use crate::board::{Board, BoardError, GameStatus, Violation, check_hard_mode};
use crate::core::{EvalError, EvaluationRow, Word, WordError};
use crate::puzzle::{GameMode, pick_solution_index, word_number};
use crate::wordlists::WordList;
use std::fmt;

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The game is already won or lost
    GameOver,
    /// The guess is not a well-formed word of the right length
    Word(WordError),
    /// The guess is not in the dictionary
    NotInDictionary(String),
    /// The guess ignores information revealed by the previous guess
    HardMode(Violation),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "Gra już się zakończyła"),
            Self::Word(e) => write!(f, "{e}"),
            Self::NotInDictionary(word) => {
                write!(f, "Nie znaleziono słowa \"{word}\" w słowniku")
            }
            Self::HardMode(violation) => write!(f, "{violation}"),
        }
    }
}

impl std::error::Error for GuessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Word(e) => Some(e),
            _ => None,
        }
    }
}

impl From<WordError> for GuessError {
    fn from(e: WordError) -> Self {
        Self::Word(e)
    }
}

/// A single puzzle with its board and rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    mode: GameMode,
    seed: i64,
    word_number: i64,
    solution: Word,
    board: Board,
    hard: bool,
}

impl Game {
    /// Start a game with an explicit solution
    #[must_use]
    pub fn new(mode: GameMode, seed: i64, solution: Word, hard: bool) -> Self {
        let board = Board::new(solution.len());
        Self {
            mode,
            seed,
            word_number: word_number(mode, seed),
            solution,
            board,
            hard,
        }
    }

    /// Start the game for a puzzle window, drawing the solution from the
    /// answer pool by seed
    ///
    /// # Panics
    /// Panics if the list's answer pool is empty.
    #[must_use]
    pub fn from_seed(mode: GameMode, seed: i64, list: &WordList, hard: bool) -> Self {
        let index = pick_solution_index(seed, list.answers().len());
        Self::new(mode, seed, list.answers()[index].clone(), hard)
    }

    /// Submit a guess, returning the successor game state
    ///
    /// Validation order: game must be in progress, the raw input must parse
    /// to a word of the board's length, the word must be in the dictionary,
    /// and under hard mode it must respect the previous row's reveals.
    ///
    /// # Errors
    /// Returns `GuessError` describing the first failed check.
    pub fn submit(&self, raw: &str, list: &WordList) -> Result<Self, GuessError> {
        if self.board.is_terminal() {
            return Err(GuessError::GameOver);
        }

        let guess = Word::with_length(raw, self.board.word_length())?;

        if !list.contains(&guess) {
            return Err(GuessError::NotInDictionary(guess.text().to_string()));
        }

        if self.hard
            && let Some(previous) = self.board.last()
            && let Some(violation) = check_hard_mode(previous.guess(), previous.row(), &guess)
        {
            return Err(GuessError::HardMode(violation));
        }

        let row = self.evaluate_guess(&guess)?;
        let board = self
            .board
            .commit(guess, row)
            .map_err(|e| self.map_board_error(e))?;

        Ok(Self {
            board,
            solution: self.solution.clone(),
            ..*self
        })
    }

    fn evaluate_guess(&self, guess: &Word) -> Result<EvaluationRow, GuessError> {
        crate::core::evaluate(guess, &self.solution).map_err(|e| match e {
            // Unreachable after the explicit length check, kept as a typed error
            EvalError::LengthMismatch { guess, .. } => {
                GuessError::Word(WordError::InvalidLength(guess))
            }
        })
    }

    fn map_board_error(&self, e: BoardError) -> GuessError {
        match e {
            BoardError::Terminal(_) => GuessError::GameOver,
            BoardError::LengthMismatch { actual, .. } => {
                GuessError::Word(WordError::InvalidLength(actual))
            }
        }
    }

    /// The game mode this puzzle belongs to
    #[inline]
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Seed of the puzzle window
    #[inline]
    #[must_use]
    pub fn seed(&self) -> i64 {
        self.seed
    }

    /// Sequential puzzle number for display and streaks
    #[inline]
    #[must_use]
    pub fn word_number(&self) -> i64 {
        self.word_number
    }

    /// The secret solution
    #[inline]
    #[must_use]
    pub fn solution(&self) -> &Word {
        &self.solution
    }

    /// The board so far
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whether hard mode is in force
    #[inline]
    #[must_use]
    pub fn hard(&self) -> bool {
        self.hard
    }

    /// Current status
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Guesses used so far
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.board.attempts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ViolationKind;
    use crate::wordlists::select_word_list;

    fn game_with(solution: &str, hard: bool) -> (Game, WordList) {
        let list = select_word_list(5, false).unwrap();
        let solution = Word::new(solution).unwrap();
        (Game::new(GameMode::Daily, 0, solution, hard), list)
    }

    #[test]
    fn winning_scenario_rzeka() {
        let (game, list) = game_with("rzeka", false);

        let game = game.submit("radio", &list).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);

        let game = game.submit("rzecz", &list).unwrap();
        assert_eq!(game.status(), GameStatus::InProgress);

        let game = game.submit("rzeka", &list).unwrap();
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.attempts(), 3);
    }

    #[test]
    fn uppercase_input_accepted() {
        let (game, list) = game_with("rzeka", false);
        let game = game.submit("RZEKA", &list).unwrap();
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn submit_does_not_mutate_previous_state() {
        let (game, list) = game_with("rzeka", false);
        let next = game.submit("radio", &list).unwrap();

        assert_eq!(game.attempts(), 0);
        assert_eq!(next.attempts(), 1);
    }

    #[test]
    fn unknown_word_rejected() {
        let (game, list) = game_with("rzeka", false);
        let result = game.submit("bzdet", &list);
        assert_eq!(
            result,
            Err(GuessError::NotInDictionary("bzdet".to_string()))
        );
    }

    #[test]
    fn malformed_word_rejected() {
        let (game, list) = game_with("rzeka", false);
        assert!(matches!(
            game.submit("dach", &list),
            Err(GuessError::Word(WordError::InvalidLength(4)))
        ));
        assert!(matches!(
            game.submit("rock!", &list),
            Err(GuessError::Word(WordError::InvalidCharacter('!')))
        ));
    }

    #[test]
    fn hard_mode_enforced() {
        let (game, list) = game_with("rzeka", true);
        let game = game.submit("radio", &list).unwrap();

        // kotek abandons the confirmed leading r
        let result = game.submit("kotek", &list);
        match result {
            Err(GuessError::HardMode(violation)) => {
                assert_eq!(violation.kind, ViolationKind::PositionLock);
                assert_eq!(violation.position, 0);
            }
            other => panic!("expected hard mode violation, got {other:?}"),
        }

        // rzeka respects the reveals
        assert!(game.submit("rzeka", &list).is_ok());
    }

    #[test]
    fn hard_mode_ignored_when_disabled() {
        let (game, list) = game_with("rzeka", false);
        let game = game.submit("radio", &list).unwrap();
        assert!(game.submit("kotek", &list).is_ok());
    }

    #[test]
    fn no_guesses_after_win() {
        let (game, list) = game_with("rzeka", false);
        let game = game.submit("rzeka", &list).unwrap();
        assert_eq!(game.submit("radio", &list), Err(GuessError::GameOver));
    }

    #[test]
    fn loss_after_max_attempts() {
        let (game, list) = game_with("rzeka", false);
        let mut game = game;
        for _ in 0..game.board().max_attempts() {
            game = game.submit("radio", &list).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.submit("rzeka", &list), Err(GuessError::GameOver));
    }

    #[test]
    fn from_seed_is_deterministic() {
        let list = select_word_list(5, false).unwrap();
        let a = Game::from_seed(GameMode::Daily, 1_754_863_200_000, &list, false);
        let b = Game::from_seed(GameMode::Daily, 1_754_863_200_000, &list, false);

        assert_eq!(a.solution(), b.solution());
        assert_eq!(a.word_number(), b.word_number());
    }
}
