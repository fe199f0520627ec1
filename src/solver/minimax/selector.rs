//! Minimax-based guess selection
//!
//! Always selects the guess that minimizes worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Returns the code with the lowest maximum remaining candidates and that
/// value, or `None` if the guess pool is empty. Ties break toward the lower
/// code so the choice is deterministic regardless of parallel scheduling.
///
/// # Examples
/// ```
/// use bulls_and_cows::core::Code;
/// use bulls_and_cows::solver::minimax::select_best_guess;
///
/// let pool = vec![
///     Code::new("0123").unwrap(),
///     Code::new("4567").unwrap(),
/// ];
/// let candidates = vec![
///     Code::new("0123").unwrap(),
///     Code::new("0132").unwrap(),
/// ];
///
/// let (best, max_remaining) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.to_string(), "0123");
/// assert_eq!(max_remaining, 1);
/// ```
#[must_use]
pub fn select_best_guess(pool: &[Code], candidates: &[Code]) -> Option<(Code, usize)> {
    pool.par_iter()
        .map(|&guess| {
            let max_remaining = calculate_max_remaining(&guess, candidates);
            (guess, max_remaining)
        })
        .min_by(|(c1, m1), (c2, m2)| m1.cmp(m2).then_with(|| c1.cmp(c2)))
}
