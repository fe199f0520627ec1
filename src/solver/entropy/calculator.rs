//! Shannon entropy calculation for feedback partitions
//!
//! Given a guess and set of candidates, computes the expected information gain.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing feedback x.
///
/// # Examples
/// ```
/// use bulls_and_cows::core::Code;
/// use bulls_and_cows::solver::entropy::calculate_entropy;
///
/// let guess = Code::new("0123").unwrap();
/// let candidates = vec![
///     Code::new("0123").unwrap(), // scores (4, 0)
///     Code::new("4567").unwrap(), // scores (0, 0)
/// ];
///
/// // Two equally likely feedback classes: exactly one bit
/// let entropy = calculate_entropy(&guess, &candidates);
/// assert!((entropy - 1.0).abs() < 0.001);
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Code, candidates: &[Code]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    // Group candidates by feedback class
    let feedback_counts = group_by_feedback(guess, candidates);

    // Calculate Shannon entropy
    shannon_entropy(&feedback_counts)
}

/// Group candidates by the feedback they produce with the guess
fn group_by_feedback(guess: &Code, candidates: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::score(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one feedback class with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n feedback classes
#[must_use]
pub fn shannon_entropy<S>(feedback_counts: &std::collections::HashMap<Feedback, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = feedback_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    feedback_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
/// This enables minimax and hybrid tiebreaking strategies.
#[must_use]
pub fn calculate_metrics(guess: &Code, candidates: &[Code]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = group_by_feedback(guess, candidates);
    let total = candidates.len() as f64;

    let entropy: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum();

    // Each candidate lands in its own class with probability |class| / total,
    // leaving |class| candidates afterwards
    let expected_remaining: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / total;
            p * count as f64
        })
        .sum();

    let max_partition = counts.values().max().copied().unwrap_or(0);

    GuessMetrics {
        entropy,
        expected_remaining,
        max_partition,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::new(s).unwrap()
    }

    fn feedback(bulls: u8, cows: u8) -> Feedback {
        Feedback::new(bulls, cows).unwrap()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 feedback classes, each appearing once = log2(4) = 2 bits
        let mut counts = FxHashMap::default();
        counts.insert(feedback(0, 0), 1);
        counts.insert(feedback(0, 1), 1);
        counts.insert(feedback(1, 0), 1);
        counts.insert(feedback(1, 1), 1);

        let entropy = shannon_entropy(&counts);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        // Only one feedback class = 0 bits (no uncertainty)
        let mut counts = FxHashMap::default();
        counts.insert(feedback(0, 0), 10);

        let entropy = shannon_entropy(&counts);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        // Skewed distribution has less entropy than uniform
        let mut uniform = FxHashMap::default();
        uniform.insert(feedback(0, 0), 25);
        uniform.insert(feedback(0, 1), 25);
        uniform.insert(feedback(1, 0), 25);
        uniform.insert(feedback(1, 1), 25);

        let mut skewed = FxHashMap::default();
        skewed.insert(feedback(0, 0), 97);
        skewed.insert(feedback(0, 1), 1);
        skewed.insert(feedback(1, 0), 1);
        skewed.insert(feedback(1, 1), 1);

        assert!(shannon_entropy(&uniform) > shannon_entropy(&skewed));
    }

    #[test]
    fn shannon_entropy_bounds() {
        let mut counts = FxHashMap::default();
        counts.insert(feedback(0, 0), 10);
        counts.insert(feedback(0, 1), 20);
        counts.insert(feedback(0, 2), 30);

        let entropy = shannon_entropy(&counts);
        assert!(entropy >= 0.0);
        assert!(entropy <= (counts.len() as f64).log2());
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Feedback, usize> = FxHashMap::default();
        let entropy = shannon_entropy(&counts);
        assert!((entropy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn calculate_entropy_perfect_split() {
        // Perfect binary split = 1 bit
        let guess = code("0123");
        let candidates = [code("0123"), code("4567")];

        let entropy = calculate_entropy(&guess, &candidates);
        assert!((entropy - 1.0).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_all_same_feedback() {
        // Every candidate disjoint from the guess: one class, 0 bits
        let guess = code("0123");
        let candidates = [code("4567"), code("4576"), code("5467")];

        let entropy = calculate_entropy(&guess, &candidates);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_diverse_candidates() {
        let guess = code("0123");
        let candidates = [
            code("0123"), // (4, 0)
            code("0132"), // (2, 2)
            code("4567"), // (0, 0)
            code("1032"), // (0, 4)
        ];

        // Four distinct classes, uniform: exactly 2 bits
        let entropy = calculate_entropy(&guess, &candidates);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn calculate_entropy_empty_candidates() {
        let guess = code("0123");
        let entropy = calculate_entropy(&guess, &[]);
        assert!((entropy - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn group_by_feedback_works() {
        let guess = code("0123");
        let candidates = [code("0123"), code("4567"), code("5467")];

        let groups = group_by_feedback(&guess, &candidates);

        // (4,0) once, (0,0) twice
        assert_eq!(groups.len(), 2);
        assert_eq!(groups.get(&Feedback::PERFECT), Some(&1));
        assert_eq!(groups.get(&feedback(0, 0)), Some(&2));
    }

    #[test]
    fn metrics_consistency() {
        let guess = code("0123");
        let candidates = [code("0123"), code("0132"), code("4567"), code("1032")];

        let metrics = calculate_metrics(&guess, &candidates);

        assert!(metrics.entropy > 0.0);
        assert!(metrics.max_partition >= 1);
        assert!(metrics.max_partition <= candidates.len());
        assert!(metrics.expected_remaining >= 1.0);
        assert!(metrics.expected_remaining <= candidates.len() as f64);
    }

    #[test]
    fn metrics_empty_candidates() {
        let metrics = calculate_metrics(&code("0123"), &[]);

        assert!((metrics.entropy - 0.0).abs() < f64::EPSILON);
        assert!((metrics.expected_remaining - 0.0).abs() < f64::EPSILON);
        assert_eq!(metrics.max_partition, 0);
    }
}
