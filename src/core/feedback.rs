//! Feedback symbols produced by comparing a guess to the answer.

use super::state::RoundState;
use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Result of comparing one guess to the round's answer.
///
/// `Correct` is terminal: a round yields it exactly once, as its last
/// symbol.
///
/// # Example
///
/// ```rust
/// use hilo::core::Feedback;
///
/// assert_eq!(Feedback::evaluate(70, 42), Feedback::TooHigh);
/// assert_eq!(Feedback::evaluate(10, 42), Feedback::TooLow);
/// assert_eq!(Feedback::evaluate(42, 42), Feedback::Correct);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Feedback {
    TooHigh,
    TooLow,
    Correct,
}

impl Feedback {
    /// Compare `guess` against `answer` (pure).
    pub fn evaluate(guess: i64, answer: i64) -> Self {
        match guess.cmp(&answer) {
            Ordering::Greater => Self::TooHigh,
            Ordering::Less => Self::TooLow,
            Ordering::Equal => Self::Correct,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Correct)
    }

    /// The round state this symbol leads to.
    pub fn next_state(self) -> RoundState {
        if self.is_terminal() {
            RoundState::Won
        } else {
            RoundState::AwaitingGuess
        }
    }

    /// One-character form used in round transcripts.
    pub fn symbol(self) -> char {
        match self {
            Self::TooHigh => '+',
            Self::TooLow => '-',
            Self::Correct => '=',
        }
    }
}

impl TryFrom<char> for Feedback {
    type Error = GameError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::TooHigh),
            '-' => Ok(Self::TooLow),
            '=' => Ok(Self::Correct),
            other => Err(GameError::UnknownFeedback(other)),
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Decode a transcript such as `"-+="` back into feedback symbols.
pub fn parse_transcript(transcript: &str) -> Result<Vec<Feedback>, GameError> {
    transcript.chars().map(Feedback::try_from).collect()
}
