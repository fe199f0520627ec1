//! The code universe
//!
//! Every valid secret is a permutation of 4 distinct digits drawn from the
//! 10-digit alphabet: 10 x 9 x 8 x 7 = 5040 codes. Enumeration order is
//! lexicographic by digit value so that guess selection stays reproducible
//! across runs.

use crate::core::Code;
use itertools::Itertools;

/// Number of codes in the full universe
pub const UNIVERSE_SIZE: usize = 5040;

/// Generate the full universe of valid codes in lexicographic order
///
/// # Examples
/// ```
/// use bulls_and_cows::universe::{UNIVERSE_SIZE, full_universe};
///
/// let universe = full_universe();
/// assert_eq!(universe.len(), UNIVERSE_SIZE);
/// assert_eq!(universe[0].to_string(), "0123");
/// ```
#[must_use]
pub fn full_universe() -> Vec<Code> {
    (0u8..10)
        .permutations(4)
        .map(|p| {
            Code::from_digits([p[0], p[1], p[2], p[3]])
                .expect("permutations of distinct digits are valid codes")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn universe_has_expected_size() {
        assert_eq!(full_universe().len(), UNIVERSE_SIZE);
    }

    #[test]
    fn universe_codes_are_unique() {
        let universe = full_universe();
        let unique: HashSet<Code> = universe.iter().copied().collect();
        assert_eq!(unique.len(), UNIVERSE_SIZE);
    }

    #[test]
    fn universe_is_lexicographically_sorted() {
        let universe = full_universe();
        assert!(universe.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn universe_boundaries() {
        let universe = full_universe();
        assert_eq!(universe[0].to_string(), "0123");
        assert_eq!(universe[UNIVERSE_SIZE - 1].to_string(), "9876");
    }

    #[test]
    fn universe_codes_have_distinct_digits() {
        // Code construction already enforces this; spot check the invariant anyway
        for code in full_universe().iter().take(100) {
            let digits: HashSet<u8> = code.digits().iter().copied().collect();
            assert_eq!(digits.len(), 4);
        }
    }
}
