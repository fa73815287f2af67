//! Game error types.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors that can end a game.
///
/// Malformed guesses are not in here: the console prompt recovers from
/// them by asking again.
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading from or writing to the console failed
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before a guess could be read
    #[error("input closed before a guess was entered")]
    InputClosed,

    #[error("invalid guess range: low ({low}) is greater than high ({high})")]
    InvalidRange { low: i64, high: i64 },

    /// A transcript character that is not a feedback symbol
    #[error("'{0}' is not a feedback symbol (expected '+', '-' or '=')")]
    UnknownFeedback(char),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
