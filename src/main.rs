//! Słówko - CLI
//!
//! Polish Wordle-style game with TUI and CLI modes, plus helper commands
//! for scoring, hints and word list benchmarks.

use anyhow::Result;
use clap::{Parser, Subcommand};
use slowko::{
    commands::{
        SimpleConfig, SolveConfig, find_candidates, now_millis, puzzle_info, run_benchmark,
        run_simple, score_guess, solve_word,
    },
    game::Game,
    output::{
        print_benchmark_result, print_hint_result, print_puzzle_info, print_score_result,
        print_solve_result,
    },
    puzzle::{GameMode, new_seed},
    wordlists::{WordList, loader::load_from_file, select_word_list},
};

#[derive(Parser)]
#[command(
    name = "slowko",
    about = "Polskie Słówko - gra w zgadywanie słów (daily, hourly and infinite puzzles)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length (4-7 letters)
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,

    /// Puzzle mode: daily, hourly or infinite
    #[arg(short, long, global = true, default_value = "daily")]
    mode: String,

    /// Hard mode: every guess must reuse revealed letters
    #[arg(long, global = true)]
    hard: bool,

    /// Extra-hard mode: obscure words can be solutions too
    #[arg(long, global = true)]
    extra_hard: bool,

    /// Answer list override: path to a file with one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Local time zone as minutes east of UTC (120 for Polish summer time)
    #[arg(long, global = true, default_value = "120", allow_hyphen_values = true)]
    utc_offset: i64,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode without TUI
    Simple,

    /// Score one guess against a known solution
    Score {
        /// The guessed word
        guess: String,

        /// The solution word
        solution: String,
    },

    /// List answers consistent with a guess history
    Hint {
        /// History entries as word=symbols, e.g. radio=G-Y--
        history: Vec<String>,

        /// Maximum number of candidates to print
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Solve a target word by candidate elimination
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the current puzzle number and countdown
    Daily,

    /// Check that every answer is solvable within six guesses
    Benchmark {
        /// Limit number of words to test
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Build the word lists for the chosen length, honoring `-w` overrides
fn load_word_list(cli: &Cli) -> Result<WordList> {
    match &cli.wordlist {
        Some(path) => {
            let answers = load_from_file(path, cli.length)?;
            anyhow::ensure!(
                !answers.is_empty(),
                "no {}-letter words found in {path}",
                cli.length
            );
            let valid = select_word_list(cli.length, false)
                .map_err(|e| anyhow::anyhow!(e))?
                .valid()
                .to_vec();
            Ok(WordList::from_parts(answers, valid))
        }
        None => select_word_list(cli.length, cli.extra_hard).map_err(|e| anyhow::anyhow!(e)),
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    let mode = GameMode::from_name(&cli.mode);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, mode),
        Commands::Simple => {
            let config = SimpleConfig {
                mode,
                length: cli.length,
                hard: cli.hard,
                extra_hard: cli.extra_hard,
                utc_offset_minutes: cli.utc_offset,
            };
            run_simple(&config).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Score { guess, solution } => {
            let result = score_guess(&guess, &solution).map_err(|e| anyhow::anyhow!(e))?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Hint { history, limit } => {
            let list = load_word_list(&cli)?;
            let result =
                find_candidates(&history, cli.length, &list).map_err(|e| anyhow::anyhow!(e))?;
            print_hint_result(&result, limit);
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let list = load_word_list(&cli)?;
            let config = SolveConfig::new(word);
            let result = solve_word(&config, &list).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Daily => {
            let info = puzzle_info(mode, now_millis(), cli.utc_offset);
            print_puzzle_info(&info);
            Ok(())
        }
        Commands::Benchmark { limit } => {
            let list = load_word_list(&cli)?;
            let result = run_benchmark(&list, limit).map_err(|e| anyhow::anyhow!(e))?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli, mode: GameMode) -> Result<()> {
    use slowko::interactive::{App, run_tui};

    let list = load_word_list(cli)?;
    let seed = new_seed(mode, now_millis(), cli.utc_offset);
    let game = Game::from_seed(mode, seed, &list, cli.hard);

    let app = App::new(game, list, cli.utc_offset);
    run_tui(app)
}
