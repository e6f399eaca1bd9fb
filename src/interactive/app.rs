//! TUI application state and logic

use crate::board::GameStatus;
use crate::game::{Game, GuessError, Keyboard, Stats};
use crate::output::formatters::share_text;
use crate::puzzle::{GameMode, new_seed, time_remaining};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// What keyboard input currently controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Typing a guess into the current row
    Typing,
    /// Game finished; waiting for new-game or quit
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
pub struct App {
    pub game: Game,
    pub list: WordList,
    pub stats: Stats,
    pub hard: bool,
    pub utc_offset_minutes: i64,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(game: Game, list: WordList, utc_offset_minutes: i64) -> Self {
        let hard = game.hard();
        let mut app = Self {
            game,
            list,
            stats: Stats::default(),
            hard,
            utc_offset_minutes,
            input_buffer: String::new(),
            input_mode: InputMode::Typing,
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Słówko nr {} ({}). Powodzenia!",
                app.game.word_number(),
                app.game.mode().name().to_lowercase()
            ),
            MessageStyle::Info,
        );
        app
    }

    /// The keyboard hint states for the current board
    #[must_use]
    pub fn keyboard(&self) -> Keyboard {
        Keyboard::from_board(self.game.board())
    }

    /// Milliseconds until the next puzzle window, if the mode has one
    #[must_use]
    pub fn countdown(&self, now_millis: i64) -> Option<i64> {
        match self.game.mode() {
            GameMode::Infinite => None,
            mode => Some(time_remaining(
                mode,
                self.game.seed(),
                now_millis,
                self.utc_offset_minutes,
            )),
        }
    }

    pub fn push_letter(&mut self, ch: char) {
        if self.input_buffer.chars().count() < self.game.board().word_length()
            && crate::core::alphabet::is_polish_letter(crate::core::alphabet::normalize(ch))
        {
            self.input_buffer
                .push(crate::core::alphabet::normalize(ch));
        }
    }

    pub fn pop_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed word as a guess
    pub fn submit_guess(&mut self) {
        let raw = self.input_buffer.clone();
        match self.game.submit(&raw, &self.list) {
            Ok(next) => {
                self.game = next;
                self.input_buffer.clear();
                self.after_commit();
            }
            Err(GuessError::GameOver) => {
                self.input_mode = InputMode::GameOver;
            }
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    fn after_commit(&mut self) {
        match self.game.status() {
            GameStatus::Won => {
                self.stats = self.stats.record_win(
                    self.game.mode(),
                    self.game.seed(),
                    self.game.attempts(),
                );
                self.input_mode = InputMode::GameOver;
                let praise = match self.game.attempts() {
                    1 => "Geniusz!",
                    2 => "Wspaniale!",
                    3 => "Imponująco!",
                    4 => "Znakomicie!",
                    5 => "Świetnie!",
                    _ => "Uff!",
                };
                self.add_message(praise, MessageStyle::Success);
                self.add_message("'n' nowa gra, Esc wyjście", MessageStyle::Info);
            }
            GameStatus::Lost => {
                self.stats = self.stats.record_loss(self.game.mode(), self.game.seed());
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    &format!(
                        "Koniec prób! Szukane słowo: {}",
                        self.game.solution().text().to_uppercase()
                    ),
                    MessageStyle::Error,
                );
                self.add_message("'n' nowa gra, Esc wyjście", MessageStyle::Info);
            }
            GameStatus::InProgress => {}
        }
    }

    /// Start the puzzle for the current window
    ///
    /// Daily and hourly windows replay the same word until the window rolls
    /// over; infinite mode draws a fresh one every second.
    pub fn new_game(&mut self, now_millis: i64) {
        let mode = self.game.mode();
        let seed = new_seed(mode, now_millis, self.utc_offset_minutes);
        self.game = Game::from_seed(mode, seed, &self.list, self.hard);
        self.input_buffer.clear();
        self.input_mode = InputMode::Typing;
        self.messages.clear();
        self.add_message(
            &format!("Słówko nr {}. Powodzenia!", self.game.word_number()),
            MessageStyle::Info,
        );
    }

    /// Shareable emoji grid for the finished game
    #[must_use]
    pub fn share_grid(&self) -> String {
        share_text(
            self.game.mode(),
            self.game.word_number(),
            self.game.board(),
            self.game.status() == GameStatus::Won,
        )
    }

    /// Letters of the guess being typed, padded to the board width
    #[must_use]
    pub fn current_row_letters(&self) -> Vec<Option<char>> {
        let mut letters: Vec<Option<char>> = self.input_buffer.chars().map(Some).collect();
        letters.resize(self.game.board().word_length(), None);
        letters
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Błąd: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        let now = crate::commands::now_millis();
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc | KeyCode::Char('q') => {
                        app.should_quit = true;
                    }
                    KeyCode::Char('n') => {
                        app.new_game(crate::commands::now_millis());
                    }
                    _ => {}
                },
                // Letters are game input, so only Esc and Ctrl-C quit here
                InputMode::Typing => match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        app.should_quit = true;
                    }
                    KeyCode::Esc => {
                        app.should_quit = true;
                    }
                    KeyCode::Char(c) => {
                        app.push_letter(c);
                    }
                    KeyCode::Backspace => {
                        app.pop_letter();
                    }
                    KeyCode::Enter => {
                        app.submit_guess();
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::select_word_list;

    fn test_app(solution: &str) -> App {
        let list = select_word_list(5, false).unwrap();
        let solution = Word::new(solution).unwrap();
        let game = Game::new(GameMode::Infinite, 0, solution, false);
        App::new(game, list, 0)
    }

    #[test]
    fn typing_respects_word_length() {
        let mut app = test_app("rzeka");
        for ch in "radioo".chars() {
            app.push_letter(ch);
        }
        assert_eq!(app.input_buffer, "radio");
    }

    #[test]
    fn non_polish_letters_ignored() {
        let mut app = test_app("rzeka");
        app.push_letter('q');
        app.push_letter('r');
        app.push_letter('7');
        assert_eq!(app.input_buffer, "r");
    }

    #[test]
    fn uppercase_input_normalized() {
        let mut app = test_app("rzeka");
        app.push_letter('R');
        app.push_letter('Ż');
        assert_eq!(app.input_buffer, "rż");
    }

    #[test]
    fn winning_guess_ends_game() {
        let mut app = test_app("rzeka");
        for ch in "rzeka".chars() {
            app.push_letter(ch);
        }
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.won(), 1);
        assert!(app.share_grid().ends_with("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn rejected_guess_keeps_buffer_and_reports() {
        let mut app = test_app("rzeka");
        for ch in "bzdet".chars() {
            app.push_letter(ch);
        }
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::Typing);
        assert_eq!(app.game.attempts(), 0);
        assert!(
            app.messages
                .iter()
                .any(|m| matches!(m.style, MessageStyle::Error))
        );
    }

    #[test]
    fn current_row_pads_to_width() {
        let mut app = test_app("rzeka");
        app.push_letter('r');
        app.push_letter('z');
        let letters = app.current_row_letters();
        assert_eq!(letters.len(), 5);
        assert_eq!(letters[0], Some('r'));
        assert_eq!(letters[2], None);
    }

    #[test]
    fn new_game_resets_board() {
        let mut app = test_app("rzeka");
        for ch in "rzeka".chars() {
            app.push_letter(ch);
        }
        app.submit_guess();
        app.new_game(1_754_863_200_000);

        assert_eq!(app.game.attempts(), 0);
        assert_eq!(app.input_mode, InputMode::Typing);
    }
}
