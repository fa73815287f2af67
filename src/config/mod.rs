//! Game configuration.
//!
//! A game is configured in code only; nothing is read from files, flags or
//! the environment. Validation uses Stillwater's `Validation` type so that
//! a bad configuration reports every problem in one pass.
//!
//! # Example
//!
//! ```rust
//! use hilo::config::{BoundsPolicy, GameConfig};
//!
//! let config = GameConfig::builder()
//!     .rounds(1)
//!     .range(1, 10)
//!     .bounds(BoundsPolicy::Strict)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.rounds, 1);
//! assert!(GameConfig::builder().rounds(0).build().is_err());
//! ```

pub mod builder;
pub mod error;

pub use builder::GameConfigBuilder;
pub use error::{ConfigError, ConfigViolation};

use crate::core::GuessRange;
use serde::{Deserialize, Serialize};

/// How the console prompt treats a well-formed guess outside the range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundsPolicy {
    /// Hand the guess to the evaluator as is; it is hinted like any other
    #[default]
    Lenient,

    /// Reject the guess and prompt again
    Strict,
}

/// Settings for one game.
///
/// Deserializing runs the same validation as [`GameConfigBuilder::build`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct GameConfig {
    /// Number of independent rounds
    pub rounds: usize,

    /// Range every round draws its answer from
    pub range: GuessRange,

    pub bounds: BoundsPolicy,

    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
}

#[derive(Deserialize)]
struct RawConfig {
    rounds: usize,
    range: RawRange,
    #[serde(default)]
    bounds: BoundsPolicy,
    #[serde(default)]
    seed: Option<u64>,
}

#[derive(Deserialize)]
struct RawRange {
    low: i64,
    high: i64,
}

impl TryFrom<RawConfig> for GameConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let builder = GameConfigBuilder::new()
            .rounds(raw.rounds)
            .range(raw.range.low, raw.range.high)
            .bounds(raw.bounds);
        match raw.seed {
            Some(seed) => builder.seed(seed),
            None => builder,
        }
        .build()
    }
}

impl GameConfig {
    pub const DEFAULT_ROUNDS: usize = 3;

    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::new()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: Self::DEFAULT_ROUNDS,
            range: GuessRange::DEFAULT,
            bounds: BoundsPolicy::Lenient,
            seed: None,
        }
    }
}
