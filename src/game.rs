//! Game loop.
//!
//! A [`Game`] plays a fixed number of independent rounds. Each round draws
//! a fresh answer, drives the round evaluator to completion and prints a
//! line per feedback symbol. After the last round it prints a closing
//! message and returns a [`GameReport`].

use crate::config::GameConfig;
use crate::core::{Feedback, GuessRange, RoundHistory};
use crate::error::GameError;
use crate::round::Attempts;
use crate::source::{ConsolePrompt, GuessSource};
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::io::{self, Stdout, Write};
use tracing::{info, info_span};
use uuid::Uuid;

/// Closing message printed once every round is over.
pub const FAREWELL: &str = "Thanks for playing!";

/// Text shown to the player for one feedback symbol.
pub fn describe(feedback: Feedback, answer: i64) -> String {
    match feedback {
        Feedback::TooHigh => "Too high. Guess again.".to_string(),
        Feedback::TooLow => "Too low. Guess again.".to_string(),
        Feedback::Correct => format!("You win! {answer} is correct!"),
    }
}

/// Outcome of one finished round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub id: Uuid,
    /// 1-based round number within the game
    pub round: usize,
    pub range: GuessRange,
    pub answer: i64,
    pub attempts: usize,
    /// Feedback symbols in order, e.g. `"-+="`
    pub transcript: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RoundSummary {
    fn from_history(
        id: Uuid,
        round: usize,
        range: GuessRange,
        answer: i64,
        history: &RoundHistory,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            round,
            range,
            answer,
            attempts: history.attempts(),
            transcript: history.transcript(),
            started_at,
            finished_at: Utc::now(),
        }
    }
}

/// Every round of a finished game, in play order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameReport {
    pub rounds: Vec<RoundSummary>,
}

impl GameReport {
    pub fn total_attempts(&self) -> usize {
        self.rounds.iter().map(|round| round.attempts).sum()
    }
}

/// Drives rounds against a guess source, writing feedback to `W`.
pub struct Game<G, W> {
    config: GameConfig,
    source: G,
    output: W,
    rng: StdRng,
    played: usize,
}

impl Game<ConsolePrompt<io::StdinLock<'static>, Stdout>, Stdout> {
    /// A game on the process console.
    pub fn console(config: GameConfig) -> Self {
        Self::new(config, ConsolePrompt::stdio(), io::stdout())
    }
}

impl<G: GuessSource, W: Write> Game<G, W> {
    pub fn new(config: GameConfig, source: G, output: W) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            config,
            source,
            output,
            rng,
            played: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_parts(self) -> (G, W) {
        (self.source, self.output)
    }

    /// Play every configured round, then print the closing message.
    pub fn play(&mut self) -> Result<GameReport, GameError> {
        let mut report = GameReport::default();

        for _ in 0..self.config.rounds {
            let answer = self.config.range.draw(&mut self.rng);
            report.rounds.push(self.play_round(answer)?);
        }

        writeln!(self.output, "{FAREWELL}")?;
        self.output.flush()?;

        info!(
            rounds = report.rounds.len(),
            total_attempts = report.total_attempts(),
            "game finished"
        );
        Ok(report)
    }

    /// Play a single round against a known answer.
    ///
    /// Only a won round takes up a round number.
    pub fn play_round(&mut self, answer: i64) -> Result<RoundSummary, GameError> {
        let id = Uuid::new_v4();
        let round = self.played + 1;
        let range = self.config.range;

        let span = info_span!("round", %id, round);
        let _guard = span.enter();
        info!(%range, "round started");

        let started_at = Utc::now();
        let mut attempts =
            Attempts::new(range, answer, &mut self.source).with_bounds(self.config.bounds);

        for feedback in attempts.by_ref() {
            let feedback = feedback?;
            writeln!(self.output, "{}", describe(feedback, answer))?;
            if feedback.is_terminal() {
                break;
            }
        }

        let history = attempts.into_history();
        self.played = round;
        let summary =
            RoundSummary::from_history(id, round, range, answer, &history, started_at);
        info!(
            answer,
            attempts = summary.attempts,
            transcript = %summary.transcript,
            "round won"
        );

        Ok(summary)
    }
}

/// Play the default three-round game on the console.
pub fn start_game() -> Result<GameReport, GameError> {
    Game::console(GameConfig::default()).play()
}
