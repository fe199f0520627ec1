//! Minimax worst-case calculation for feedback partitions
//!
//! Given a guess and set of candidates, computes the maximum remaining
//! candidates for any possible feedback.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// Returns the worst-case number of remaining candidates after this guess.
///
/// # Strategy
/// For each feedback the guess could receive:
/// - Count how many candidates would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use bulls_and_cows::core::Code;
/// use bulls_and_cows::solver::minimax::calculate_max_remaining;
///
/// let guess = Code::new("0123").unwrap();
/// let candidates = vec![
///     Code::new("0123").unwrap(),
///     Code::new("4567").unwrap(),
/// ];
///
/// // The guess separates both candidates completely
/// assert_eq!(calculate_max_remaining(&guess, &candidates), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Code, candidates: &[Code]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    let feedback_counts = group_by_feedback(guess, candidates);

    feedback_counts.values().max().copied().unwrap_or(0)
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
