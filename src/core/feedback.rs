//! Bulls and Cows feedback calculation and representation
//!
//! Feedback for a guess is a (bulls, cows) pair:
//! - bulls = digits correct in both value and position
//! - cows  = digits present in the other code but in a different position
//!
//! Codes never repeat digits, so 0 <= bulls <= 4 and 0 <= cows <= 4 - bulls.

use super::Code;
use std::fmt;

/// Feedback for a Bulls and Cows guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    bulls: u8,
    cows: u8,
}

/// Error type for feedback values outside the valid range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackError {
    TooManyBulls(u8),
    TooManyCows { bulls: u8, cows: u8 },
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooManyBulls(bulls) => {
                write!(f, "Bulls must be at most 4, got {bulls}")
            }
            Self::TooManyCows { bulls, cows } => {
                write!(
                    f,
                    "Cows must be at most {} with {bulls} bulls, got {cows}",
                    4 - bulls
                )
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl Feedback {
    /// The solved response (all four digits placed)
    pub const PERFECT: Self = Self { bulls: 4, cows: 0 };

    /// Create feedback from raw counts, validating the range
    ///
    /// # Errors
    /// Returns `FeedbackError` if bulls > 4 or cows > 4 - bulls.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::Feedback;
    ///
    /// assert!(Feedback::new(1, 2).is_ok());
    /// assert!(Feedback::new(5, 0).is_err());
    /// assert!(Feedback::new(0, 5).is_err());
    /// assert!(Feedback::new(2, 3).is_err());
    /// ```
    pub const fn new(bulls: u8, cows: u8) -> Result<Self, FeedbackError> {
        if bulls > 4 {
            return Err(FeedbackError::TooManyBulls(bulls));
        }
        if cows > 4 - bulls {
            return Err(FeedbackError::TooManyCows { bulls, cows });
        }
        Ok(Self { bulls, cows })
    }

    /// Score `guess` against `secret`
    ///
    /// bulls counts matching positions; cows counts digits of `guess` that
    /// appear anywhere in `secret`, minus the bulls. Distinct digits mean
    /// there is no multiplicity to resolve, so a single pass suffices.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::{Code, Feedback};
    ///
    /// let guess = Code::new("0123").unwrap();
    /// let secret = Code::new("0214").unwrap();
    /// let feedback = Feedback::score(&guess, &secret);
    ///
    /// // 0 placed; 1 and 2 present elsewhere; 3 absent
    /// assert_eq!(feedback.bulls(), 1);
    /// assert_eq!(feedback.cows(), 2);
    /// ```
    #[must_use]
    pub fn score(guess: &Code, secret: &Code) -> Self {
        let mut bulls = 0u8;
        let mut shared = 0u8;

        for (i, &digit) in guess.digits().iter().enumerate() {
            if secret.digit_at(i) == digit {
                bulls += 1;
            }
            if secret.contains(digit) {
                shared += 1;
            }
        }

        Self {
            bulls,
            cows: shared - bulls,
        }
    }

    /// Number of digits correct in value and position
    #[inline]
    #[must_use]
    pub const fn bulls(self) -> u8 {
        self.bulls
    }

    /// Number of digits correct in value but not position
    #[inline]
    #[must_use]
    pub const fn cows(self) -> u8 {
        self.cows
    }

    /// Check if this is the solved response (4 bulls)
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.bulls == 4
    }

    /// Parse feedback from user input like "1 2", "1,2" or "12"
    ///
    /// Returns `None` if the text does not contain exactly two counts or the
    /// counts are outside the valid range.
    ///
    /// # Examples
    /// ```
    /// use bulls_and_cows::core::Feedback;
    ///
    /// let a = Feedback::from_str("1 2").unwrap();
    /// let b = Feedback::from_str("1,2").unwrap();
    /// let c = Feedback::from_str("12").unwrap();
    /// assert_eq!(a, b);
    /// assert_eq!(a, c);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();

        let (bulls, cows) = match parts.as_slice() {
            [pair] if pair.len() == 2 => {
                let mut chars = pair.chars();
                let bulls = chars.next()?.to_digit(10)?;
                let cows = chars.next()?.to_digit(10)?;
                (bulls as u8, cows as u8)
            }
            [bulls, cows] => (bulls.parse().ok()?, cows.parse().ok()?),
            _ => return None,
        };

        Self::new(bulls, cows).ok()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback: {s}"))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B {}C", self.bulls, self.cows)
    }
}
