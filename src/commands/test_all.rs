//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every possible secret and generates statistics.

use crate::core::{Code, Feedback};
use crate::solver::{Session, SessionState, StrategyType};
use crate::universe::full_universe;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Guess budget per secret; nothing legitimate gets close to it
const MAX_GUESSES: usize = 12;

/// Result from testing a single secret
#[derive(Debug, Clone)]
struct SecretTestResult {
    secret: String,
    num_guesses: usize,
    success: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub best_secret: Option<(String, usize)>,
    pub worst_secrets: Vec<(String, usize)>,
}

/// Run solver on all secrets (or a limited subset)
#[must_use]
pub fn run_test_all(strategy: &StrategyType, limit: Option<usize>) -> TestAllStatistics {
    let universe = full_universe();
    let test_secrets: Vec<Code> = universe
        .iter()
        .take(limit.unwrap_or(universe.len()))
        .copied()
        .collect();

    println!("🎯 Testing {} secrets...", test_secrets.len());

    let pb = ProgressBar::new(test_secrets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut results = Vec::new();
    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();

    let total_start = Instant::now();

    for (idx, secret) in test_secrets.iter().enumerate() {
        let mut session = Session::with_strategy(strategy.clone());
        let mut num_guesses = 0;
        let mut success = false;

        for _ in 1..=MAX_GUESSES {
            let Ok(guess) = session.next_guess() else {
                break;
            };
            num_guesses += 1;

            let feedback = Feedback::score(&guess, secret);
            if session.apply_feedback(guess, feedback) == SessionState::Solved {
                success = true;
                break;
            }
        }

        results.push(SecretTestResult {
            secret: secret.to_string(),
            num_guesses,
            success,
        });

        if success {
            *guess_distribution.entry(num_guesses).or_insert(0) += 1;
        }

        if idx % 100 == 0 && !results.is_empty() {
            let avg = results.iter().map(|r| r.num_guesses).sum::<usize>() as f64
                / results.len() as f64;
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let solved_count = results.iter().filter(|r| r.success).count();
    let failed_count = results.len() - solved_count;

    let total_guesses: usize = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_guesses)
        .sum();
    let average_guesses = if solved_count > 0 {
        total_guesses as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_guesses = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_guesses)
        .max()
        .unwrap_or(0);

    let min_guesses = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.num_guesses)
        .min()
        .unwrap_or(0);

    let best_secret = results
        .iter()
        .filter(|r| r.success)
        .min_by_key(|r| r.num_guesses)
        .map(|r| (r.secret.clone(), r.num_guesses));

    let mut worst_secrets: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.success)
        .filter(|r| r.num_guesses >= max_guesses.saturating_sub(1))
        .map(|r| (r.secret.clone(), r.num_guesses))
        .collect();
    worst_secrets.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_secrets.truncate(10);

    TestAllStatistics {
        total_secrets: results.len(),
        solved: solved_count,
        failed: failed_count,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        best_secret,
        worst_secrets,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    // Overall performance
    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_secrets as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_secrets as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:      {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per secret:      {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_secrets as f64
    );

    // Guess distribution
    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    for guesses in 1..=stats.max_guesses.max(1) {
        let count = stats.guess_distribution.get(&guesses).unwrap_or(&0);
        if stats.solved > 0 {
            let percentage = *count as f64 / stats.solved as f64 * 100.0;
            let bar_len = if max_count > 0 {
                (*count * 40 / max_count).max(usize::from(*count > 0))
            } else {
                0
            };
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
            );

            println!("  {guesses:2} guesses: {bar} {count:4} ({percentage:5.1}%)");
        }
    }

    // Information theory metrics
    println!("\n🧮 Information Theory Metrics");
    let total_bits = (stats.total_secrets as f64).log2();
    let bits_per_guess = if stats.average_guesses > 0.0 {
        total_bits / stats.average_guesses
    } else {
        0.0
    };
    // Feedback has at most 14 classes, so one guess yields at most log2(14) bits
    let per_guess_ceiling = 14f64.log2();
    println!("  Total information:   {total_bits:.2} bits");
    println!("  Bits per guess:      {bits_per_guess:.2} bits");
    println!(
        "  Ceiling per guess:   {per_guess_ceiling:.2} bits (14 feedback classes)"
    );

    // Best and worst cases
    if let Some((secret, guesses)) = &stats.best_secret {
        println!("\n✨ {}", "Best Performance".green().bold());
        println!(
            "  {} solved in {} guess{}",
            secret.bright_green(),
            guesses,
            if *guesses == 1 { "" } else { "es" }
        );
    }

    if !stats.worst_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, guesses) in stats.worst_secrets.iter().take(5) {
            println!("  {} ({} guesses)", secret.yellow(), guesses);
        }
    }
}
