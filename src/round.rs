//! Round evaluation.
//!
//! [`Attempts`] turns a guess source into a lazy sequence of feedback
//! symbols for one answer. The sequence ends right after the first
//! [`Feedback::Correct`], so it holds exactly one terminal symbol and holds
//! it last.

use crate::config::BoundsPolicy;
use crate::core::{Feedback, GuessRange, GuessRecord, RoundHistory, RoundState, State};
use crate::error::GameError;
use crate::source::GuessSource;
use chrono::Utc;
use tracing::trace;

/// Lazy, non-restartable feedback sequence for one round.
///
/// Each call to `next` asks the source for one guess under the round's
/// [`BoundsPolicy`]. Once the round is won, or the source has failed, the
/// iterator only yields `None`.
///
/// # Example
///
/// ```rust
/// use hilo::core::{Feedback, GuessRange};
/// use hilo::round::attempts;
/// use hilo::source::Scripted;
///
/// let range = GuessRange::new(1, 3).unwrap();
/// let mut guesses = Scripted::new([1, 3, 2]);
///
/// let feedback: Result<Vec<_>, _> = attempts(range, 2, &mut guesses).collect();
/// assert_eq!(
///     feedback.unwrap(),
///     vec![Feedback::TooLow, Feedback::TooHigh, Feedback::Correct]
/// );
/// ```
pub struct Attempts<G> {
    range: GuessRange,
    answer: i64,
    source: G,
    bounds: BoundsPolicy,
    state: RoundState,
    failed: bool,
    history: RoundHistory,
}

/// Start evaluating guesses from `source` against `answer`.
pub fn attempts<G: GuessSource>(range: GuessRange, answer: i64, source: G) -> Attempts<G> {
    Attempts::new(range, answer, source)
}

impl<G: GuessSource> Attempts<G> {
    pub fn new(range: GuessRange, answer: i64, source: G) -> Self {
        Self {
            range,
            answer,
            source,
            bounds: BoundsPolicy::default(),
            state: RoundState::AwaitingGuess,
            failed: false,
            history: RoundHistory::new(),
        }
    }

    /// Set how the source treats guesses outside the range.
    pub fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_final()
    }

    pub fn history(&self) -> &RoundHistory {
        &self.history
    }

    pub fn into_history(self) -> RoundHistory {
        self.history
    }
}

impl<G: GuessSource> Iterator for Attempts<G> {
    type Item = Result<Feedback, GameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.is_final() || self.failed {
            return None;
        }

        let guess = match self.source.next_guess(&self.range, self.bounds) {
            Ok(guess) => guess,
            Err(err) => {
                self.failed = true;
                return Some(Err(err));
            }
        };

        let feedback = Feedback::evaluate(guess, self.answer);
        let attempt = self.history.attempts() + 1;
        trace!(guess, attempt, feedback = %feedback, "guess evaluated");

        self.history = self.history.record(GuessRecord {
            guess,
            feedback,
            timestamp: Utc::now(),
            attempt,
        });
        self.state = feedback.next_state();

        Some(Ok(feedback))
    }
}

impl<G: GuessSource> std::iter::FusedIterator for Attempts<G> {}
