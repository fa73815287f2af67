//! Configuration errors.

use thiserror::Error;

/// A single problem found while validating a game configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("A game needs at least one round")]
    ZeroRounds,

    #[error("Range low ({low}) is greater than high ({high})")]
    InvalidRange { low: i64, high: i64 },
}

/// Every violation found in a configuration, in check order.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("invalid game configuration: {}", render(.violations))]
pub struct ConfigError {
    pub violations: Vec<ConfigViolation>,
}

fn render(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
