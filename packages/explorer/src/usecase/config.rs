//! Synthetic activity settings.

use std::time::Duration;

use super::ConfigError;

/// How often the activity timer ticks
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(8);

/// Chance that a tick produces a simulated message
pub const DEFAULT_CHATTER_PROBABILITY: f64 = 0.3;

/// Tunables of a chat session's simulated peers
///
/// Only built through [`ActivityConfig::new`] or `Default`, so a value always
/// has a non-zero period and a probability in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityConfig {
    tick_period: Duration,
    probability: f64,
}

impl ActivityConfig {
    pub fn new(tick_period: Duration, probability: f64) -> Result<Self, ConfigError> {
        let config = Self {
            tick_period,
            probability,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_period.is_zero() {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if !(0.0..=1.0).contains(&self.probability) {
            return Err(ConfigError::ProbabilityOutOfRange(self.probability));
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    /// Chance that one tick produces a message
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
            probability: DEFAULT_CHATTER_PROBABILITY,
        }
    }
}
