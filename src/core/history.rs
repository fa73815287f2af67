//! Guess history for a single round.
//!
//! Provides immutable tracking of every guess made in a round, in order,
//! together with the feedback it produced.

use super::feedback::Feedback;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single guess.
///
/// # Example
///
/// ```rust
/// use hilo::core::{Feedback, GuessRecord};
/// use chrono::Utc;
///
/// let record = GuessRecord {
///     guess: 50,
///     feedback: Feedback::TooHigh,
///     timestamp: Utc::now(),
///     attempt: 1,
/// };
/// assert!(!record.feedback.is_terminal());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// The guess as returned by the guess source
    pub guess: i64,
    /// How the guess compared to the answer
    pub feedback: Feedback,
    /// When the guess was evaluated
    pub timestamp: DateTime<Utc>,
    /// 1-based position of this guess within the round
    pub attempt: usize,
}

/// Ordered history of guesses in one round.
///
/// History is immutable - `record` returns a new history with the guess
/// appended.
///
/// # Example
///
/// ```rust
/// use hilo::core::{Feedback, GuessRecord, RoundHistory};
/// use chrono::Utc;
///
/// let history = RoundHistory::new();
/// let history = history.record(GuessRecord {
///     guess: 1,
///     feedback: Feedback::TooLow,
///     timestamp: Utc::now(),
///     attempt: 1,
/// });
/// let history = history.record(GuessRecord {
///     guess: 2,
///     feedback: Feedback::Correct,
///     timestamp: Utc::now(),
///     attempt: 2,
/// });
///
/// assert_eq!(history.attempts(), 2);
/// assert_eq!(history.transcript(), "-=");
/// assert!(history.is_won());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundHistory {
    guesses: Vec<GuessRecord>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self {
            guesses: Vec::new(),
        }
    }

    /// Record a guess, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, record: GuessRecord) -> Self {
        let mut guesses = self.guesses.clone();
        guesses.push(record);
        Self { guesses }
    }

    /// Number of guesses made so far.
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }

    /// Whether the last recorded guess was correct.
    pub fn is_won(&self) -> bool {
        self.guesses
            .last()
            .is_some_and(|record| record.feedback.is_terminal())
    }

    /// One character per guess, e.g. `"-+="`.
    pub fn transcript(&self) -> String {
        self.guesses
            .iter()
            .map(|record| record.feedback.symbol())
            .collect()
    }

    /// Time from the first to the last guess.
    ///
    /// Returns `None` if no guess has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.guesses.first(), self.guesses.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }
}
