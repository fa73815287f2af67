//! Builder API for game configuration.

use crate::config::error::{ConfigError, ConfigViolation};
use crate::config::{BoundsPolicy, GameConfig};
use crate::core::GuessRange;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for [`GameConfig`].
///
/// Starts from the defaults (three rounds, 1 to 100, lenient bounds, no
/// seed). `build` validates everything at once, so a config with several
/// problems reports all of them.
#[derive(Debug, Clone)]
pub struct GameConfigBuilder {
    rounds: usize,
    low: i64,
    high: i64,
    bounds: BoundsPolicy,
    seed: Option<u64>,
}

impl GameConfigBuilder {
    pub fn new() -> Self {
        Self {
            rounds: GameConfig::DEFAULT_ROUNDS,
            low: GuessRange::DEFAULT.low(),
            high: GuessRange::DEFAULT.high(),
            bounds: BoundsPolicy::default(),
            seed: None,
        }
    }

    /// Set the number of rounds played
    pub fn rounds(mut self, n: usize) -> Self {
        self.rounds = n;
        self
    }

    /// Set the inclusive guess range
    pub fn range(mut self, low: i64, high: i64) -> Self {
        self.low = low;
        self.high = high;
        self
    }

    /// Set how out-of-range console guesses are treated
    pub fn bounds(mut self, policy: BoundsPolicy) -> Self {
        self.bounds = policy;
        self
    }

    /// Seed the answer generator for reproducible games
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every setting, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let rounds: Validation<(), NonEmptyVec<ConfigViolation>> = if self.rounds == 0 {
            Validation::fail(ConfigViolation::ZeroRounds)
        } else {
            Validation::success(())
        };

        let range: Validation<(), NonEmptyVec<ConfigViolation>> = if self.low > self.high {
            Validation::fail(ConfigViolation::InvalidRange {
                low: self.low,
                high: self.high,
            })
        } else {
            Validation::success(())
        };

        Validation::all_vec(vec![rounds, range]).map(|_| ())
    }

    /// Build the configuration
    pub fn build(self) -> Result<GameConfig, ConfigError> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(ConfigError {
                violations: errors.iter().cloned().collect(),
            });
        }

        let range = GuessRange::new(self.low, self.high).map_err(|_| ConfigError {
            violations: vec![ConfigViolation::InvalidRange {
                low: self.low,
                high: self.high,
            }],
        })?;

        Ok(GameConfig {
            rounds: self.rounds,
            range,
            bounds: self.bounds,
            seed: self.seed,
        })
    }
}

impl Default for GameConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_successfully() {
        let config = GameConfigBuilder::new().build().unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let builder = GameConfigBuilder::new().rounds(0).range(10, 1);

        match builder.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::ZeroRounds)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigViolation::InvalidRange { low: 10, high: 1 })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn build_reports_every_violation() {
        let err = GameConfigBuilder::new()
            .rounds(0)
            .range(10, 1)
            .build()
            .unwrap_err();

        assert_eq!(err.violations.len(), 2);
        assert!(err.violations.contains(&ConfigViolation::ZeroRounds));
        assert!(err
            .violations
            .contains(&ConfigViolation::InvalidRange { low: 10, high: 1 }));
        assert!(err.to_string().contains("at least one round"));
    }

    #[test]
    fn single_violation_is_reported() {
        let err = GameConfigBuilder::new().rounds(0).build().unwrap_err();
        assert_eq!(err.violations, vec![ConfigViolation::ZeroRounds]);
    }

    #[test]
    fn settings_are_applied() {
        let config = GameConfigBuilder::new()
            .rounds(5)
            .range(-10, 10)
            .bounds(BoundsPolicy::Strict)
            .seed(99)
            .build()
            .unwrap();

        assert_eq!(config.rounds, 5);
        assert_eq!(config.range, GuessRange::new(-10, 10).unwrap());
        assert_eq!(config.bounds, BoundsPolicy::Strict);
        assert_eq!(config.seed, Some(99));
    }
}
