//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations. The default
//! policy takes the first remaining candidate in universe order; the
//! information-theoretic strategies may probe with any code from the full
//! pool without changing the session contract.

use crate::core::Code;

/// A strategy for selecting the next guess
pub trait Strategy {
    /// Select the next guess given the full pool and the current candidates
    ///
    /// Returns `None` if there is nothing to select from.
    fn select_guess(&self, pool: &[Code], candidates: &[Code]) -> Option<Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Clone)]
pub enum StrategyType {
    /// First remaining candidate in universe order (default)
    First(FirstCandidate),
    /// Pure entropy maximization
    Entropy(EntropyStrategy),
    /// Pure minimax optimization
    Minimax(MinimaxStrategy),
    /// Hybrid entropy/minimax
    Hybrid(HybridStrategy),
    /// Random selection from candidates
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, pool: &[Code], candidates: &[Code]) -> Option<Code> {
        match self {
            Self::First(s) => s.select_guess(pool, candidates),
            Self::Entropy(s) => s.select_guess(pool, candidates),
            Self::Minimax(s) => s.select_guess(pool, candidates),
            Self::Hybrid(s) => s.select_guess(pool, candidates),
            Self::Random(s) => s.select_guess(pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "first", "entropy", "minimax", "hybrid", "random".
    /// Defaults to first-candidate if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "entropy" => Self::Entropy(EntropyStrategy),
            "minimax" => Self::Minimax(MinimaxStrategy),
            "hybrid" => Self::Hybrid(HybridStrategy::default()),
            "random" => Self::Random(RandomStrategy),
            _ => Self::First(FirstCandidate),
        }
    }
}

/// First-candidate policy
///
/// Deterministically returns the first remaining candidate in universe
/// order. Not information-optimal, but correctness-preserving and fully
/// reproducible.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidate;

impl Strategy for FirstCandidate {
    fn select_guess(&self, _pool: &[Code], candidates: &[Code]) -> Option<Code> {
        candidates.first().copied()
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the pool code with the highest Shannon entropy over the
/// candidate partition.
#[derive(Debug, Clone, Copy)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn select_guess(&self, pool: &[Code], candidates: &[Code]) -> Option<Code> {
        super::entropy::select_best_guess(pool, candidates).map(|(best, _)| best)
    }
}

/// Pure minimax strategy
///
/// Always selects the pool code that minimizes the worst-case remaining
/// candidates.
#[derive(Debug, Clone, Copy)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess(&self, pool: &[Code], candidates: &[Code]) -> Option<Code> {
        super::minimax::select_best_guess(pool, candidates).map(|(best, _)| best)
    }
}

/// Hybrid strategy combining entropy and minimax
///
/// Uses entropy while many candidates remain, switches to minimax near the
/// end.
#[derive(Debug, Clone, Copy)]
pub struct HybridStrategy {
    /// Switch to minimax when candidates <= this threshold
    pub minimax_threshold: usize,
}

impl HybridStrategy {
    /// Create a new hybrid strategy
    ///
    /// # Parameters
    /// - `minimax_threshold`: Switch to minimax when candidates <= this value (default: 5)
    #[must_use]
    pub const fn new(minimax_threshold: usize) -> Self {
        Self { minimax_threshold }
    }
}

impl Default for HybridStrategy {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Strategy for HybridStrategy {
    fn select_guess(&self, pool: &[Code], candidates: &[Code]) -> Option<Code> {
        if candidates.len() <= self.minimax_threshold {
            super::minimax::select_best_guess(pool, candidates).map(|(best, _)| best)
        } else {
            super::entropy::select_best_guess(pool, candidates).map(|(best, _)| best)
        }
    }
}

/// Random strategy
///
/// Randomly selects from remaining candidates. A candidate is always a
/// legal, potentially winning guess.
#[derive(Debug, Clone, Copy)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess(&self, _pool: &[Code], candidates: &[Code]) -> Option<Code> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut rand::rng()).copied()
    }
}
