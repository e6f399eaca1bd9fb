//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI: type a guess, see the colored
//! feedback, repeat until the word is found or the board runs out.

use crate::board::GameStatus;
use crate::core::LetterState;
use crate::core::alphabet::KEYBOARD_ROWS;
use crate::game::{Game, GuessError, Keyboard, Stats};
use crate::output::display::print_stats;
use crate::output::formatters::{colorize_guess, share_text};
use crate::puzzle::{GameMode, new_seed};
use crate::wordlists::{WordList, select_word_list};
use colored::Colorize;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

/// Win messages indexed by guesses used
const PRAISE: [&str; 6] = [
    "Geniusz!",
    "Wspaniale!",
    "Imponująco!",
    "Znakomicie!",
    "Świetnie!",
    "Uff!",
];

/// Configuration for the simple game loop
pub struct SimpleConfig {
    pub mode: GameMode,
    pub length: usize,
    pub hard: bool,
    pub extra_hard: bool,
    pub utc_offset_minutes: i64,
}

/// Run the simple interactive game
///
/// # Errors
///
/// Returns an error on I/O failure or an unsupported word length.
pub fn run_simple(config: &SimpleConfig) -> Result<(), String> {
    let list = select_word_list(config.length, config.extra_hard).map_err(|e| e.to_string())?;
    let mut stats = Stats::default();

    loop {
        let game = new_game(config, &list);
        let seed = game.seed();
        print_banner(&game, config);

        let outcome = play_one(game, &list)?;
        match outcome {
            Some((GameStatus::Won, attempts)) => {
                stats = stats.record_win(config.mode, seed, attempts);
            }
            Some((GameStatus::Lost, _)) => {
                stats = stats.record_loss(config.mode, seed);
            }
            _ => {}
        }

        let keep_playing = outcome.is_some() && config.mode == GameMode::Infinite;
        if keep_playing {
            match read_input("Jeszcze raz? (tak/nie)")?.to_lowercase().as_str() {
                "tak" | "t" | "yes" | "y" => {
                    println!();
                    continue;
                }
                _ => {}
            }
        }

        if stats.played() > 1 {
            print_stats(&stats);
        }
        return Ok(());
    }
}

fn new_game(config: &SimpleConfig, list: &WordList) -> Game {
    let now = now_millis();
    let seed = new_seed(config.mode, now, config.utc_offset_minutes);
    Game::from_seed(config.mode, seed, list, config.hard)
}

fn print_banner(game: &Game, config: &SimpleConfig) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    println!(
        " {} — tryb {}, słówko nr {}",
        "SŁÓWKO".bright_green().bold(),
        game.mode().name().to_lowercase(),
        game.word_number()
    );
    println!("{}", "═".repeat(50).bright_cyan());
    println!(
        "\nZgadnij {}-literowe słowo w {} próbach.",
        config.length,
        game.board().max_attempts()
    );
    if config.hard {
        println!("{}", "Tryb trudny: kolejne próby muszą używać odkrytych liter.".yellow());
    }
    println!("Komendy: 'poddaj' odkrywa słowo, 'koniec' wychodzi.\n");
}

/// Play a single game to completion
///
/// Returns the final status and guesses used, or `None` when the player
/// quit mid-game. Giving up counts as a loss.
fn play_one(mut game: Game, list: &WordList) -> Result<Option<(GameStatus, usize)>, String> {
    while game.status() == GameStatus::InProgress {
        let prompt = format!(
            "Próba {}/{}",
            game.attempts() + 1,
            game.board().max_attempts()
        );
        let input = read_input(&prompt)?.to_lowercase();

        match input.as_str() {
            "koniec" | "quit" | "q" => {
                println!("\nDo zobaczenia!\n");
                return Ok(None);
            }
            "poddaj" => {
                println!(
                    "\nSzukane słowo: {}\n",
                    game.solution().text().to_uppercase().bright_yellow().bold()
                );
                return Ok(Some((GameStatus::Lost, game.attempts())));
            }
            _ => {}
        }

        match game.submit(&input, list) {
            Ok(next) => {
                game = next;
                print_board(&game);
            }
            Err(GuessError::GameOver) => break,
            Err(e) => println!("{}\n", e.to_string().red()),
        }
    }

    match game.status() {
        GameStatus::Won => {
            let attempts = game.attempts();
            println!(
                "\n{} Rozwiązano w {} próbach.\n",
                PRAISE[attempts.saturating_sub(1).min(PRAISE.len() - 1)]
                    .bright_green()
                    .bold(),
                attempts
            );
            println!(
                "{}\n",
                share_text(game.mode(), game.word_number(), game.board(), true)
            );
        }
        GameStatus::Lost => {
            println!(
                "\nKoniec prób! Szukane słowo: {}\n",
                game.solution().text().to_uppercase().bright_yellow().bold()
            );
            println!(
                "{}\n",
                share_text(game.mode(), game.word_number(), game.board(), false)
            );
        }
        GameStatus::InProgress => {}
    }
    Ok(Some((game.status(), game.attempts())))
}

fn print_board(game: &Game) {
    println!();
    for row in game.board().rows() {
        println!("  {}", colorize_guess(row.guess().text(), row.row()));
    }
    print_keyboard(&Keyboard::from_board(game.board()));
    println!();
}

fn print_keyboard(keyboard: &Keyboard) {
    println!();
    for (i, row) in KEYBOARD_ROWS.iter().enumerate() {
        let line: String = row
            .chars()
            .map(|ch| {
                let letter = ch.to_uppercase().to_string();
                let colored = match keyboard.state_of(ch) {
                    LetterState::Correct => letter.bright_green().bold().to_string(),
                    LetterState::Present => letter.bright_yellow().bold().to_string(),
                    LetterState::Absent => letter.bright_black().to_string(),
                    LetterState::Empty => letter,
                };
                format!("{colored} ")
            })
            .collect();
        println!("  {}{}", " ".repeat(i), line);
    }
}

fn read_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

/// Milliseconds since the Unix epoch
///
/// # Panics
/// Panics if the system clock reports a time before 1970.
#[must_use]
pub fn now_millis() -> i64 {
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before Unix epoch");
    i64::try_from(since_epoch.as_millis()).unwrap_or(i64::MAX)
}
