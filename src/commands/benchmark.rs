//! Benchmark command
//!
//! Tests solver performance across multiple secrets.

use crate::core::{Code, Feedback};
use crate::solver::{Session, SessionState, StrategyType};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Guess budget per secret; nothing legitimate gets close to it
const MAX_GUESSES: usize = 12;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Run benchmark on a set of target secrets
///
/// Each secret gets a fresh session with its own copy of the strategy.
#[must_use]
pub fn run_benchmark(strategy: &StrategyType, secrets: &[Code]) -> BenchmarkResult {
    let start = Instant::now();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for secret in secrets {
        let mut session = Session::with_strategy(strategy.clone());
        let mut guesses = 0;

        loop {
            guesses += 1;

            let Ok(guess) = session.next_guess() else {
                break;
            };

            let feedback = Feedback::score(&guess, secret);
            let state = session.apply_feedback(guess, feedback);

            if state == SessionState::Solved || guesses >= MAX_GUESSES {
                break;
            }
        }

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_secrets = secrets.len();

    BenchmarkResult {
        total_secrets,
        total_guesses,
        average_guesses: total_guesses as f64 / total_secrets as f64,
        min_guesses,
        max_guesses,
        distribution,
        duration,
        secrets_per_second: total_secrets as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::full_universe;

    fn first_secrets(count: usize) -> Vec<Code> {
        full_universe().into_iter().take(count).collect()
    }

    #[test]
    fn benchmark_runs() {
        let secrets = first_secrets(10);
        let strategy = StrategyType::from_name("first");

        let result = run_benchmark(&strategy, &secrets);

        assert_eq!(result.total_secrets, 10);
        assert!(result.total_guesses > 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= MAX_GUESSES);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let secrets = first_secrets(10);
        let strategy = StrategyType::from_name("first");

        let result = run_benchmark(&strategy, &secrets);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_secrets);
    }

    #[test]
    fn benchmark_solves_first_secret_immediately() {
        // 0123 is the opening guess of the default policy
        let secrets = first_secrets(1);
        let strategy = StrategyType::from_name("first");

        let result = run_benchmark(&strategy, &secrets);

        assert_eq!(result.min_guesses, 1);
        assert_eq!(result.max_guesses, 1);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let secrets = first_secrets(10);
        let strategy = StrategyType::from_name("first");

        let result = run_benchmark(&strategy, &secrets);

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);

        for &guess_count in result.distribution.keys() {
            assert!((1..=MAX_GUESSES).contains(&guess_count));
        }
    }
}
