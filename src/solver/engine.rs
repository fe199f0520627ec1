//! Candidate tracking session
//!
//! A `Session` owns one game: the candidate set, the guess history and the
//! state machine. Feedback narrows the candidates; the strategy picks the
//! next guess from what survives.

use super::strategy::{FirstCandidate, Strategy};
use crate::core::{Code, Feedback, FeedbackError};
use crate::universe::full_universe;
use std::fmt;

/// Where a session stands after the latest feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Candidates remain and no guess has been confirmed correct
    Active,
    /// A guess received 4 bulls; terminal
    Solved,
    /// Filtering eliminated every candidate, so the feedback history is
    /// internally inconsistent; terminal failure
    Contradiction,
}

impl SessionState {
    /// Check whether the session accepts further transitions
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Contradiction)
    }
}

/// Errors surfaced by a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// No candidate satisfies the feedback history
    EmptyCandidateSet,
    /// Submitted feedback is outside the valid numeric range
    InvalidFeedback(FeedbackError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidateSet => {
                write!(
                    f,
                    "No candidates remain; the feedback history is contradictory"
                )
            }
            Self::InvalidFeedback(e) => write!(f, "Invalid feedback: {e}"),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidFeedback(e) => Some(e),
            Self::EmptyCandidateSet => None,
        }
    }
}

/// One (guess, feedback) round, kept for display only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub guess: Code,
    pub feedback: Feedback,
}

/// Keep the candidates consistent with an observed (guess, feedback) pair
///
/// Returns the order-preserving subset of `candidates` whose score against
/// `guess` equals `feedback`. Monotonic (result is a subset of the input)
/// and idempotent (reapplying the same pair changes nothing).
#[must_use]
pub fn filter_candidates(candidates: &[Code], guess: &Code, feedback: Feedback) -> Vec<Code> {
    candidates
        .iter()
        .filter(|candidate| Feedback::score(candidate, guess) == feedback)
        .copied()
        .collect()
}

/// A Bulls and Cows guessing session
///
/// Coordinates the candidate set, the guess history and the state machine
/// using a given strategy.
pub struct Session<S: Strategy = FirstCandidate> {
    strategy: S,
    pool: Vec<Code>,
    candidates: Vec<Code>,
    history: Vec<HistoryEntry>,
    state: SessionState,
}

impl Session {
    /// Start a session over the full universe with the default
    /// first-candidate policy
    #[must_use]
    pub fn new() -> Self {
        Self::with_strategy(FirstCandidate)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Strategy> Session<S> {
    /// Start a session over the full universe with the given strategy
    ///
    /// The strategy may probe with any code from the full pool; the
    /// candidate set itself only ever shrinks.
    #[must_use]
    pub fn with_strategy(strategy: S) -> Self {
        let pool = full_universe();
        let candidates = pool.clone();

        Self {
            strategy,
            pool,
            candidates,
            history: Vec::new(),
            state: SessionState::Active,
        }
    }

    /// Pick the next guess
    ///
    /// # Errors
    /// Returns `SolverError::EmptyCandidateSet` when no candidate remains,
    /// i.e. the session is in `Contradiction`.
    pub fn next_guess(&self) -> Result<Code, SolverError> {
        if self.candidates.is_empty() {
            return Err(SolverError::EmptyCandidateSet);
        }

        // One candidate left: guess it, no strategy needed
        if self.candidates.len() == 1 {
            return Ok(self.candidates[0]);
        }

        self.strategy
            .select_guess(&self.pool, &self.candidates)
            .ok_or(SolverError::EmptyCandidateSet)
    }

    /// Record raw feedback counts for a guess
    ///
    /// Validates the counts, filters the candidates, appends to the history
    /// and transitions the state machine.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidFeedback` when bulls > 4 or
    /// cows > 4 - bulls; the session is left unchanged.
    pub fn submit_feedback(
        &mut self,
        guess: Code,
        bulls: u8,
        cows: u8,
    ) -> Result<SessionState, SolverError> {
        let feedback = Feedback::new(bulls, cows).map_err(SolverError::InvalidFeedback)?;
        Ok(self.apply_feedback(guess, feedback))
    }

    /// Record already-validated feedback for a guess
    ///
    /// Terminal sessions accept no further transitions; the current state is
    /// returned unchanged.
    pub fn apply_feedback(&mut self, guess: Code, feedback: Feedback) -> SessionState {
        if self.state.is_terminal() {
            return self.state;
        }

        self.candidates = filter_candidates(&self.candidates, &guess, feedback);
        self.history.push(HistoryEntry { guess, feedback });

        // 4 bulls wins even if the guess was not a tracked candidate
        self.state = if feedback.is_perfect() {
            SessionState::Solved
        } else if self.candidates.is_empty() {
            SessionState::Contradiction
        } else {
            SessionState::Active
        };

        self.state
    }

    /// The ordered (guess, feedback) rounds so far
    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Codes still consistent with every observed feedback
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    /// Number of candidates still in play
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.candidates.len()
    }

    /// The full guess pool strategies may probe from
    #[must_use]
    pub fn pool(&self) -> &[Code] {
        &self.pool
    }

    /// Current state of the session
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }
}
