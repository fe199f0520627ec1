//! Guess analysis command
//!
//! Analyzes the entropy and information content of a specific guess.

use crate::core::Code;
use crate::solver::entropy::calculate_metrics;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: String,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    pub total_candidates: usize,
}

/// Analyze the entropy of a guess against a set of candidates
///
/// Every 4-distinct-digit code is a legal guess, so no membership check
/// against a fixed list applies.
///
/// # Errors
///
/// Returns an error if the guess is not a valid code.
pub fn analyze_guess(guess: &str, candidates: &[Code]) -> Result<AnalysisResult, String> {
    let code = Code::new(guess).map_err(|e| format!("Invalid guess: {e}"))?;

    let metrics = calculate_metrics(&code, candidates);

    let total_candidates = candidates.len();
    let expected_reduction = metrics.entropy.exp2();
    let expected_remaining = total_candidates as f64 / expected_reduction;

    Ok(AnalysisResult {
        guess: guess.to_string(),
        entropy: metrics.entropy,
        expected_reduction,
        expected_remaining,
        max_partition: metrics.max_partition,
        total_candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::universe::full_universe;

    #[test]
    fn analyze_valid_guess() {
        let universe = full_universe();

        let result = analyze_guess("0123", &universe).unwrap();

        assert_eq!(result.guess, "0123");
        assert!(result.entropy > 0.0);
        assert!(result.expected_reduction >= 1.0);
        assert_eq!(result.total_candidates, universe.len());
    }

    #[test]
    fn analyze_invalid_guess() {
        let universe = full_universe();

        assert!(analyze_guess("012", &universe).is_err());
        assert!(analyze_guess("0122", &universe).is_err());
    }

    #[test]
    fn entropy_properties() {
        let universe = full_universe();

        let result = analyze_guess("0123", &universe).unwrap();

        // At most 14 feedback classes exist for distinct-digit codes, so
        // entropy is bounded by log2(14)
        assert!(result.entropy >= 0.0);
        assert!(result.entropy <= 14f64.log2());

        assert!(result.expected_remaining >= 0.0);
        assert!(result.expected_remaining <= universe.len() as f64);

        assert!(result.max_partition >= 1);
        assert!(result.max_partition <= universe.len());
    }

    #[test]
    fn all_guesses_equivalent_on_fresh_universe() {
        // By symmetry every opening guess carries the same information
        let universe = full_universe();

        let a = analyze_guess("0123", &universe).unwrap();
        let b = analyze_guess("9876", &universe).unwrap();

        assert!((a.entropy - b.entropy).abs() < 0.001);
        assert_eq!(a.max_partition, b.max_partition);
    }
}
