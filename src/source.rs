//! Guess sources.
//!
//! A [`GuessSource`] hands the round evaluator one candidate integer per
//! call. The console implementation prompts the player and keeps asking
//! until it gets a line that parses as an integer.

use crate::config::BoundsPolicy;
use crate::core::GuessRange;
use crate::error::GameError;
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::debug;

/// Message written after a line that is not an integer.
pub const NOT_AN_INTEGER: &str = "Your guess must be an integer. Example: 42";

/// Supplies guesses to a round.
pub trait GuessSource {
    /// Obtain the next guess for `range`.
    ///
    /// Under [`BoundsPolicy::Strict`] a source must not return a guess
    /// outside `range`. Fails only when no further guess can be produced,
    /// never because a single attempt was malformed.
    fn next_guess(&mut self, range: &GuessRange, bounds: BoundsPolicy)
        -> Result<i64, GameError>;
}

impl<G: GuessSource + ?Sized> GuessSource for &mut G {
    fn next_guess(
        &mut self,
        range: &GuessRange,
        bounds: BoundsPolicy,
    ) -> Result<i64, GameError> {
        (**self).next_guess(range, bounds)
    }
}

/// Interactive guess source reading lines from `R` and prompting on `W`.
///
/// # Example
///
/// ```rust
/// use hilo::config::BoundsPolicy;
/// use hilo::core::GuessRange;
/// use hilo::source::{ConsolePrompt, GuessSource};
/// use std::io::Cursor;
///
/// let mut prompt = ConsolePrompt::new(Cursor::new("nope\n4\n"), Vec::new());
/// let range = GuessRange::new(1, 5).unwrap();
///
/// assert_eq!(prompt.next_guess(&range, BoundsPolicy::Lenient).unwrap(), 4);
/// ```
pub struct ConsolePrompt<R, W> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl ConsolePrompt<StdinLock<'static>, Stdout> {
    /// Prompt on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsolePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // Raw bytes: a line that is not UTF-8 is a malformed guess, not an I/O failure.
    fn read_line(&mut self) -> Result<&[u8], GameError> {
        self.line.clear();
        if self.input.read_until(b'\n', &mut self.line)? == 0 {
            return Err(GameError::InputClosed);
        }
        Ok(&self.line)
    }
}

impl<R: BufRead, W: Write> GuessSource for ConsolePrompt<R, W> {
    fn next_guess(
        &mut self,
        range: &GuessRange,
        bounds: BoundsPolicy,
    ) -> Result<i64, GameError> {
        loop {
            write!(self.output, "Guess a number {range}: ")?;
            self.output.flush()?;

            let parsed = std::str::from_utf8(self.read_line()?)
                .map_err(|err| err.to_string())
                .and_then(|text| text.trim().parse::<i64>().map_err(|err| err.to_string()));
            let guess = match parsed {
                Ok(guess) => guess,
                Err(reason) => {
                    let input = String::from_utf8_lossy(&self.line);
                    debug!(input = %input.trim(), error = %reason, "rejected guess");
                    writeln!(self.output, "{NOT_AN_INTEGER}")?;
                    continue;
                }
            };

            if bounds == BoundsPolicy::Strict && !range.contains(guess) {
                debug!(guess, %range, "rejected out-of-range guess");
                writeln!(self.output, "Your guess must be {range}.")?;
                continue;
            }

            return Ok(guess);
        }
    }
}

/// Guess source replaying a fixed sequence.
///
/// Under [`BoundsPolicy::Strict`] out-of-range entries are skipped, the way
/// the console prompt asks again. Running out of guesses is reported as
/// [`GameError::InputClosed`].
///
/// # Example
///
/// ```rust
/// use hilo::config::BoundsPolicy;
/// use hilo::core::GuessRange;
/// use hilo::source::{GuessSource, Scripted};
///
/// let mut guesses = Scripted::new([1, 3, 2]);
/// let range = GuessRange::new(1, 3).unwrap();
/// let lenient = BoundsPolicy::Lenient;
///
/// assert_eq!(guesses.next_guess(&range, lenient).unwrap(), 1);
/// assert_eq!(guesses.next_guess(&range, lenient).unwrap(), 3);
/// assert_eq!(guesses.next_guess(&range, lenient).unwrap(), 2);
/// assert!(guesses.next_guess(&range, lenient).is_err());
/// ```
pub struct Scripted<I> {
    guesses: I,
}

impl<I: Iterator<Item = i64>> Scripted<I> {
    pub fn new<T>(guesses: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            guesses: guesses.into_iter(),
        }
    }
}

impl<I: Iterator<Item = i64>> GuessSource for Scripted<I> {
    fn next_guess(
        &mut self,
        range: &GuessRange,
        bounds: BoundsPolicy,
    ) -> Result<i64, GameError> {
        match bounds {
            BoundsPolicy::Lenient => self.guesses.next(),
            BoundsPolicy::Strict => self.guesses.find(|guess| range.contains(*guess)),
        }
        .ok_or(GameError::InputClosed)
    }
}
