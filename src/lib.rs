//! Hilo: a console number-guessing game
//!
//! The game picks a random integer in a range and tells the player whether
//! each guess is too high, too low, or correct, over several rounds.
//!
//! The pieces compose top-down:
//!
//! - **Game loop** ([`game`]): draws an answer per round and prints feedback
//! - **Round evaluator** ([`round`]): a lazy iterator of feedback symbols
//!   that ends on the first correct guess
//! - **Guess source** ([`source`]): the console prompt, or any other
//!   implementation of [`GuessSource`]
//!
//! # Example
//!
//! ```rust
//! use hilo::config::GameConfig;
//! use hilo::game::Game;
//! use hilo::source::Scripted;
//!
//! let config = GameConfig::builder().rounds(1).range(1, 3).build().unwrap();
//! let mut game = Game::new(config, Scripted::new([1, 3, 2]), Vec::new());
//!
//! let summary = game.play_round(2).unwrap();
//! assert_eq!(summary.transcript, "-+=");
//!
//! let printed = String::from_utf8(game.output().clone()).unwrap();
//! assert!(printed.ends_with("You win! 2 is correct!\n"));
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod game;
pub mod round;
pub mod source;

// Re-export commonly used types
pub use config::{BoundsPolicy, GameConfig};
pub use self::core::{Feedback, GuessRange, RoundState, State};
pub use error::GameError;
pub use game::{start_game, Game, GameReport, RoundSummary};
pub use round::{attempts, Attempts};
pub use source::{ConsolePrompt, GuessSource, Scripted};
