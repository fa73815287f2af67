//! Inclusive range of valid guesses.

use crate::error::GameError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive bounds on valid guesses. `low <= high` always holds.
///
/// # Example
///
/// ```rust
/// use hilo::core::GuessRange;
///
/// let range = GuessRange::new(1, 100).unwrap();
/// assert!(range.contains(1));
/// assert!(range.contains(100));
/// assert!(!range.contains(101));
///
/// assert!(GuessRange::new(10, 1).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct GuessRange {
    low: i64,
    high: i64,
}

#[derive(Deserialize)]
struct RawRange {
    low: i64,
    high: i64,
}

impl TryFrom<RawRange> for GuessRange {
    type Error = GameError;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.low, raw.high)
    }
}

impl GuessRange {
    /// The range every round uses unless configured otherwise.
    pub const DEFAULT: GuessRange = GuessRange { low: 1, high: 100 };

    pub fn new(low: i64, high: i64) -> Result<Self, GameError> {
        if low > high {
            return Err(GameError::InvalidRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> i64 {
        self.low
    }

    pub fn high(&self) -> i64 {
        self.high
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.low..=self.high).contains(&value)
    }

    /// Draw a uniformly distributed answer from the range.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> i64 {
        rng.random_range(self.low..=self.high)
    }
}

impl Default for GuessRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for GuessRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "between {} and {}", self.low, self.high)
    }
}
