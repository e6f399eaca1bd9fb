//! Benchmark command
//!
//! Runs the candidate-elimination solver against every answer word of one
//! length and collects guess statistics. Useful for checking that a word
//! list is solvable within six guesses.

use super::solve::{SolveConfig, solve_word};
use crate::wordlists::WordList;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Statistics from benchmarking a word list
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Successful games by guess count
    pub distribution: HashMap<usize, usize>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Words the solver could not finish in six guesses
    pub failed_words: Vec<String>,
    pub duration: Duration,
}

/// Solve every answer word and aggregate the results
///
/// # Errors
///
/// Returns an error if any solve run hits an inconsistent word list.
pub fn run_benchmark(list: &WordList, limit: Option<usize>) -> Result<BenchmarkResult, String> {
    let answers = list.answers();
    let count = limit.unwrap_or(answers.len()).min(answers.len());

    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failed_words = Vec::new();
    let mut total_guesses = 0_usize;
    let start = Instant::now();

    for (idx, target) in answers.iter().take(count).enumerate() {
        let config = SolveConfig::new(target.text().to_string());
        let result = solve_word(&config, list)?;

        if result.success {
            *distribution.entry(result.steps.len()).or_insert(0) += 1;
            total_guesses += result.steps.len();
        } else {
            failed_words.push(target.text().to_string());
        }

        if idx % 10 == 0 && total_guesses > 0 {
            let solved = idx + 1 - failed_words.len();
            let avg = total_guesses as f64 / solved.max(1) as f64;
            pb.set_message(format!("śr. {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Gotowe");

    let solved: usize = distribution.values().sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        total_words: count,
        solved,
        failed: failed_words.len(),
        min_guesses: distribution.keys().copied().min().unwrap_or(0),
        max_guesses: distribution.keys().copied().max().unwrap_or(0),
        distribution,
        average_guesses,
        failed_words,
        duration: start.elapsed(),
    })
}
