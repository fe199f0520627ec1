//! Secret solving command
//!
//! Solves a specific target secret and returns the guess path.

use crate::core::{Code, Feedback};
use crate::solver::entropy::calculate_entropy;
use crate::solver::{Session, SessionState, Strategy};

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    /// Default guess budget, comfortably above the worst case of the
    /// first-candidate policy on the 5040-code universe
    pub const DEFAULT_MAX_GUESSES: usize = 12;

    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_guesses: Self::DEFAULT_MAX_GUESSES,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub steps: Vec<GuessStep>,
    pub secret: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve a specific secret with the given session
///
/// # Errors
///
/// Returns an error if:
/// - The secret is invalid (wrong length, non-digits, repeated digits)
/// - The session runs out of candidates (only possible with inconsistent
///   state, never when feedback is computed from a real secret)
pub fn solve_secret<S: Strategy>(
    config: SolveConfig,
    mut session: Session<S>,
) -> Result<SolveResult, String> {
    let secret = Code::new(&config.secret).map_err(|e| format!("Invalid secret: {e}"))?;

    let mut steps: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let candidates_before = session.remaining();

        let guess = session.next_guess().map_err(|e| e.to_string())?;

        // Expected information for this guess against the live candidates
        let (entropy, expected_remaining) = if candidates_before > 1 {
            let ent = calculate_entropy(&guess, session.candidates());
            let exp_remaining = candidates_before as f64 / ent.exp2();
            (Some(ent), Some(exp_remaining))
        } else {
            (None, None)
        };

        let feedback = Feedback::score(&guess, &secret);
        let state = session.apply_feedback(guess, feedback);

        steps.push(GuessStep {
            guess,
            feedback,
            candidates_before,
            candidates_after: session.remaining(),
            entropy,
            expected_remaining,
        });

        if state == SessionState::Solved {
            return Ok(SolveResult {
                success: true,
                steps,
                secret: config.secret,
            });
        }
    }

    // Ran out of the guess budget
    Ok(SolveResult {
        success: false,
        steps,
        secret: config.secret,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::FirstCandidate;

    #[test]
    fn solve_first_universe_code_in_one_guess() {
        let config = SolveConfig::new("0123".to_string());
        let result = solve_secret(config, Session::new()).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].guess.to_string(), "0123");
        assert!(result.steps[0].feedback.is_perfect());
    }

    #[test]
    fn solve_near_neighbor_in_two_guesses() {
        // 0123 scores (3, 0) against 0124, and 0124 is the first survivor
        let config = SolveConfig::new("0124".to_string());
        let result = solve_secret(config, Session::new()).unwrap();

        assert!(result.success);
        assert_eq!(result.steps.len(), 2);
        assert_eq!(result.steps[1].guess.to_string(), "0124");
    }

    #[test]
    fn solve_far_secret_within_budget() {
        let config = SolveConfig::new("9876".to_string());
        let max_guesses = config.max_guesses;
        let result = solve_secret(config, Session::new()).unwrap();

        assert!(result.success || result.steps.len() == max_guesses);
        assert!(!result.steps.is_empty());
    }

    #[test]
    fn solve_steps_shrink_candidates() {
        let config = SolveConfig::new("5290".to_string());
        let result = solve_secret(config, Session::new()).unwrap();

        for step in &result.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        for bad in ["123", "0122", "01a3"] {
            let config = SolveConfig::new(bad.to_string());
            assert!(solve_secret(config, Session::new()).is_err());
        }
    }

    #[test]
    fn solve_respects_max_guesses_limit() {
        let mut config = SolveConfig::new("9876".to_string());
        config.max_guesses = 2;

        let result = solve_secret(config, Session::with_strategy(FirstCandidate)).unwrap();
        assert!(result.steps.len() <= 2);
    }
}
