//! Controller configuration, validation, and error types.
//!
//! [`EngineConfig`] is the builder-input for a [`Controller`](crate::Controller).
//! [`validate()`](EngineConfig::validate) checks structural invariants at
//! construction; nothing is re-validated afterwards.

use std::error::Error;
use std::fmt;
use std::time::Duration;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `element_count` is zero.
    EmptyDataset,
    /// `min_value` is greater than `max_value`.
    InvalidValueRange {
        /// Configured lower bound.
        min: i32,
        /// Configured upper bound.
        max: i32,
    },
    /// `min_interval` is greater than `max_interval`.
    InvalidIntervalBounds {
        /// Configured lower bound.
        min: Duration,
        /// Configured upper bound.
        max: Duration,
    },
    /// `initial_interval` lies outside `[min_interval, max_interval]`.
    InitialIntervalOutOfRange {
        /// The configured starting interval.
        initial: Duration,
        /// Configured lower bound.
        min: Duration,
        /// Configured upper bound.
        max: Duration,
    },
    /// `speed_step` is zero, so speed commands would do nothing.
    ZeroSpeedStep,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDataset => write!(f, "element_count must be at least 1"),
            Self::InvalidValueRange { min, max } => {
                write!(f, "min_value {min} exceeds max_value {max}")
            }
            Self::InvalidIntervalBounds { min, max } => {
                write!(f, "min_interval {min:?} exceeds max_interval {max:?}")
            }
            Self::InitialIntervalOutOfRange { initial, min, max } => {
                write!(
                    f,
                    "initial_interval {initial:?} outside [{min:?}, {max:?}]"
                )
            }
            Self::ZeroSpeedStep => write!(f, "speed_step must be non-zero"),
        }
    }
}

impl Error for ConfigError {}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete configuration for constructing a controller.
///
/// The defaults reproduce the classic visualizer: 100 bars with heights
/// in `[50, 600]`, stepping every 50 ms, adjustable in 10 ms increments
/// between 10 ms and 500 ms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Number of elements generated on construction and on every reset.
    pub element_count: usize,
    /// Smallest generated value (inclusive).
    pub min_value: i32,
    /// Largest generated value (inclusive).
    pub max_value: i32,
    /// Tick interval at construction.
    pub initial_interval: Duration,
    /// Fastest allowed interval.
    pub min_interval: Duration,
    /// Slowest allowed interval.
    pub max_interval: Duration,
    /// Interval change per speed command.
    pub speed_step: Duration,
    /// RNG seed for dataset generation. `None` picks one at random.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            element_count: 100,
            min_value: 50,
            max_value: 600,
            initial_interval: Duration::from_millis(50),
            min_interval: Duration::from_millis(10),
            max_interval: Duration::from_millis(500),
            speed_step: Duration::from_millis(10),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.element_count == 0 {
            return Err(ConfigError::EmptyDataset);
        }
        if self.min_value > self.max_value {
            return Err(ConfigError::InvalidValueRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        if self.min_interval > self.max_interval {
            return Err(ConfigError::InvalidIntervalBounds {
                min: self.min_interval,
                max: self.max_interval,
            });
        }
        if self.initial_interval < self.min_interval || self.initial_interval > self.max_interval
        {
            return Err(ConfigError::InitialIntervalOutOfRange {
                initial: self.initial_interval,
                min: self.min_interval,
                max: self.max_interval,
            });
        }
        if self.speed_step.is_zero() {
            return Err(ConfigError::ZeroSpeedStep);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_zero_elements_fails() {
        let cfg = EngineConfig {
            element_count: 0,
            ..EngineConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::EmptyDataset));
    }

    #[test]
    fn validate_inverted_value_range_fails() {
        let cfg = EngineConfig {
            min_value: 10,
            max_value: 5,
            ..EngineConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidValueRange { min: 10, max: 5 })
        );
    }

    #[test]
    fn validate_single_value_range_succeeds() {
        let cfg = EngineConfig {
            min_value: 7,
            max_value: 7,
            ..EngineConfig::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_inverted_interval_bounds_fails() {
        let cfg = EngineConfig {
            min_interval: Duration::from_millis(600),
            ..EngineConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::InvalidIntervalBounds { .. }) => {}
            other => panic!("expected InvalidIntervalBounds, got {other:?}"),
        }
    }

    #[test]
    fn validate_initial_interval_out_of_range_fails() {
        let cfg = EngineConfig {
            initial_interval: Duration::from_millis(5),
            ..EngineConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::InitialIntervalOutOfRange { initial, .. }) => {
                assert_eq!(initial, Duration::from_millis(5));
            }
            other => panic!("expected InitialIntervalOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn validate_zero_speed_step_fails() {
        let cfg = EngineConfig {
            speed_step: Duration::ZERO,
            ..EngineConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroSpeedStep));
    }

    #[test]
    fn error_display_names_the_field() {
        let msg = ConfigError::InvalidValueRange { min: 3, max: 1 }.to_string();
        assert!(msg.contains("min_value"));
        assert!(msg.contains("max_value"));
    }
}
