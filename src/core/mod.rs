//! Core game types.
//!
//! This module contains the pure part of the game:
//! - Guess ranges and answer drawing
//! - Feedback symbols and their comparison rule
//! - The per-round state machine via the `State` trait
//! - Immutable guess history
//!
//! Nothing here touches the console.

mod feedback;
mod history;
mod range;
mod state;

pub use feedback::{parse_transcript, Feedback};
pub use history::{GuessRecord, RoundHistory};
pub use range::GuessRange;
pub use state::{RoundState, State};
