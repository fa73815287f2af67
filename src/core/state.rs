//! Round state machine.
//!
//! A round is a two-state machine: it waits for guesses until one matches
//! the answer, then it is won and accepts nothing further.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are plain values describing where a round
/// currently is.
///
/// # Example
///
/// ```rust
/// use hilo::core::{RoundState, State};
///
/// assert_eq!(RoundState::AwaitingGuess.name(), "AwaitingGuess");
/// assert!(!RoundState::AwaitingGuess.is_final());
/// assert!(RoundState::Won.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Position of a single round.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum RoundState {
    /// Initial state; every wrong guess loops back here.
    #[default]
    AwaitingGuess,
    /// Terminal state, entered on the correct guess.
    Won,
}

impl State for RoundState {
    fn name(&self) -> &str {
        match self {
            Self::AwaitingGuess => "AwaitingGuess",
            Self::Won => "Won",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Won)
    }
}
