//! Display functions for command results

use super::formatters::{colorize_guess, create_progress_bar, format_time_remaining};
use crate::commands::{BenchmarkResult, HintResult, PuzzleInfo, ScoreResult, SolveResult};
use crate::game::Stats;
use colored::Colorize;

/// Print a scored guess with colors and the share-grid emoji
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{}  {}",
        colorize_guess(&result.guess, &result.row),
        result.row.to_emoji()
    );
    if result.row.is_win() {
        println!("{}", "Trafione!".bright_green().bold());
    }
}

/// Print the candidates consistent with a guess history
pub fn print_hint_result(result: &HintResult, limit: usize) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(
        "Wzorzec: {}",
        result.pattern.bright_yellow().bold()
    );
    if !result.excluded_letters.is_empty() {
        let excluded: String = result
            .excluded_letters
            .iter()
            .flat_map(|ch| ch.to_uppercase())
            .collect();
        println!("Wykluczone litery: {}", excluded.bright_black());
    }
    for &(ch, min, exact) in &result.letter_counts {
        let letter: String = ch.to_uppercase().collect();
        if exact {
            println!("Litera {letter}: dokładnie {min}");
        } else {
            println!("Litera {letter}: co najmniej {min}");
        }
    }
    println!(
        "Pasujące słowa: {} z {}",
        result.candidates.len().to_string().bright_green().bold(),
        result.total_answers
    );
    println!("{}", "─".repeat(50).cyan());

    for word in result.candidates.iter().take(limit) {
        println!("  {}", word.to_uppercase());
    }
    if result.candidates.len() > limit {
        println!("  … i {} więcej", result.candidates.len() - limit);
    }
}

/// Print the path an automatic solve took
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(
        "Szukane słowo: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(50).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nPróba {}: {} {}",
            i + 1,
            colorize_guess(&step.word, &step.row),
            step.row.to_emoji()
        );
        if verbose {
            println!(
                "  Kandydaci: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("Rozwiązano w {} próbach", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Nie rozwiązano w {} próbach", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the current puzzle window
pub fn print_puzzle_info(info: &PuzzleInfo) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(
        " Tryb {} — słówko nr {}",
        info.mode.name().to_lowercase().bright_cyan().bold(),
        info.word_number.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(50).cyan());
    println!("  Ziarno:    {}", info.seed);
    if let Some(remaining) = info.remaining_millis {
        println!(
            "  Następne:  za {}",
            format_time_remaining(remaining).bright_green()
        );
    }
}

/// Print benchmark statistics
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "WYNIKI TESTU".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n  Słów:             {}", result.total_words);
    println!(
        "  Rozwiązanych:     {} ({:.1}%)",
        result.solved,
        result.solved as f64 / result.total_words.max(1) as f64 * 100.0
    );
    if result.failed > 0 {
        println!(
            "  Nierozwiązanych:  {}",
            result.failed.to_string().red().bold()
        );
        for word in result.failed_words.iter().take(10) {
            println!("    {}", word.to_uppercase().red());
        }
    }
    println!(
        "  Średnio prób:     {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Najlepiej:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "  Najgorzej:        {}",
        result.max_guesses.to_string().yellow()
    );
    println!("  Czas:             {:.2}s", result.duration.as_secs_f64());

    println!("\n  Rozkład prób:");
    let max_count = result.distribution.values().copied().max().unwrap_or(1);
    for guesses in 1..=6 {
        let count = result.distribution.get(&guesses).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 30);
        println!("  {guesses}: {} {count:4}", bar.green());
    }
}

/// Print win/loss statistics
pub fn print_stats(stats: &Stats) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATYSTYKI".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("\n  Rozegranych:   {}", stats.played());
    println!(
        "  Wygranych:     {} ({:.0}%)",
        stats.won(),
        stats.win_rate()
    );
    println!("  Seria:         {}", stats.streak());
    println!("  Rekord serii:  {}", stats.max_streak());

    println!("\n  Rozkład wygranych:");
    let max_count = stats.distribution().iter().copied().max().unwrap_or(1);
    for (i, &count) in stats.distribution().iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max_count.max(1)), 30);
        println!("  {}: {} {count:4}", i + 1, bar.green());
    }
}
