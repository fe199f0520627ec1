//! Bulls and Cows solving algorithms
//!
//! This module contains the candidate-tracking session and the guess
//! selection strategies.

mod engine;
pub mod entropy;
pub mod minimax;
pub mod strategy;

pub use engine::{HistoryEntry, Session, SessionState, SolverError, filter_candidates};
pub use strategy::{
    EntropyStrategy, FirstCandidate, HybridStrategy, MinimaxStrategy, RandomStrategy, Strategy,
    StrategyType,
};
