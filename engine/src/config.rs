use std::time::Duration;

use crate::GameError;

pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_millis(100);
pub const MAX_TICK_PERIOD: Duration = Duration::from_secs(1);

/// Game session settings. The field geometry and winning score are fixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    /// Time between two ball moves
    pub tick_period: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }
}

impl GameConfig {
    pub fn with_tick_millis(millis: u64) -> Result<Self, GameError> {
        let config = Self {
            tick_period: Duration::from_millis(millis),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.tick_period.is_zero() {
            return Err(GameError::InvalidConfig(
                "tick period must be greater than zero".to_string(),
            ));
        }
        if self.tick_period > MAX_TICK_PERIOD {
            return Err(GameError::InvalidConfig(format!(
                "tick period must be at most {}ms",
                MAX_TICK_PERIOD.as_millis()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::{config::GameConfig, GameError};

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.tick_period, Duration::from_millis(100));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn tick_period_bounds() {
        assert!(GameConfig::with_tick_millis(1).is_ok());
        assert!(GameConfig::with_tick_millis(1000).is_ok());
        assert!(matches!(
            GameConfig::with_tick_millis(0),
            Err(GameError::InvalidConfig(_))
        ));
        let err = GameConfig::with_tick_millis(1001).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid configuration: tick period must be at most 1000ms"
        );
    }
}
