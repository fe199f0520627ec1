//! Pure entropy-based guess selection
//!
//! Selects codes that maximize Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Code;
use rayon::prelude::*;

/// Select best guess by maximizing entropy
///
/// Returns the code with highest entropy and its entropy value, or `None`
/// if the guess pool is empty. Ties break toward the lower code so the
/// choice is deterministic regardless of parallel scheduling.
///
/// # Examples
/// ```
/// use bulls_and_cows::core::Code;
/// use bulls_and_cows::solver::entropy::select_best_guess;
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
/// // 0123 splits the candidates, 4567 cannot tell them apart
/// let (best, entropy) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(best.to_string(), "0123");
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess(pool: &[Code], candidates: &[Code]) -> Option<(Code, f64)> {
    pool.par_iter()
        .map(|&guess| {
            let entropy = calculate_entropy(&guess, candidates);
            (guess, entropy)
        })
        .max_by(|(c1, e1), (c2, e2)| e1.total_cmp(e2).then_with(|| c2.cmp(c1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> Code {
        Code::new(s).unwrap()
    }

    #[test]
    fn selects_highest_entropy() {
        let pool = [
            code("8967"), // shares nothing useful with the candidates
            code("0123"), // splits them
        ];
        let candidates = [code("0123"), code("0132"), code("0145"), code("2301")];

        let (best, entropy) = select_best_guess(&pool, &candidates).unwrap();

        assert_eq!(best, code("0123"));
        assert!(entropy > 0.5);
    }

    #[test]
    fn single_pool_code_returns_it() {
        let pool = [code("0123")];
        let candidates = [code("4567")];

        let (best, _) = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best, code("0123"));
    }

    #[test]
    fn ties_resolved_deterministically() {
        // Neither pool code can distinguish the candidates; both score zero
        // entropy, so the lower code must win every time
        let pool = [code("5678"), code("4567")];
        let candidates = [code("0123")];

        for _ in 0..3 {
            let (best, entropy) = select_best_guess(&pool, &candidates).unwrap();
            assert_eq!(best, code("4567"));
            assert!(entropy.abs() < 0.001);
        }
    }

    #[test]
    fn returns_none_on_empty_pool() {
        let candidates = [code("0123")];
        assert!(select_best_guess(&[], &candidates).is_none());
    }
}
