//! Bulls and Cows Solver
//!
//! A Bulls and Cows solver built on exact candidate filtering: the universe
//! of 5040 four-distinct-digit codes shrinks with every observed
//! (bulls, cows) response until one code survives.
//!
//! # Quick Start
//!
//! ```rust
//! use bulls_and_cows::core::{Code, Feedback};
//!
//! // Score a guess against a secret
//! let guess = Code::new("0123").unwrap();
//! let secret = Code::new("4523").unwrap();
//! let feedback = Feedback::score(&guess, &secret);
//!
//! assert_eq!(feedback.bulls(), 2);
//! assert_eq!(feedback.cows(), 0);
//! ```

// Core domain types
pub mod core;

// The 5040-code universe
pub mod universe;

// Candidate tracking and guess selection
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
