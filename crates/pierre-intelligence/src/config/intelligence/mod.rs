// ABOUTME: Recommendation engine configuration loading, env overrides, and validation
// ABOUTME: Exposes a process-wide singleton that falls back to defaults on load failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence configuration
//!
//! `RecommendationEngineConfig::load()` starts from defaults, applies
//! `STRENGTH_*` environment overrides, and validates the result:
//!
//! | variable                          | field                            |
//! |-----------------------------------|----------------------------------|
//! | `STRENGTH_REGRESSION_ITERATIONS`  | `regression.iterations`          |
//! | `STRENGTH_REGRESSION_LEARNING_RATE` | `regression.learning_rate`     |
//! | `STRENGTH_REGRESSION_MIN_PAIRS`   | `regression.min_training_pairs`  |
//! | `STRENGTH_REGRESSION_MIN_R_SQUARED` | `regression.min_r_squared`     |

mod error;
mod recommendation;

pub use error::ConfigError;
pub use recommendation::{
    CalibrationSettings, ConfidenceScoring, DeterministicSettings, RecommendationEngineConfig,
    RegressionSettings,
};

use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Environment variable overriding the gradient descent iteration count
pub const ENV_REGRESSION_ITERATIONS: &str = "STRENGTH_REGRESSION_ITERATIONS";
/// Environment variable overriding the gradient descent learning rate
pub const ENV_REGRESSION_LEARNING_RATE: &str = "STRENGTH_REGRESSION_LEARNING_RATE";
/// Environment variable overriding the minimum training pair count
pub const ENV_REGRESSION_MIN_PAIRS: &str = "STRENGTH_REGRESSION_MIN_PAIRS";
/// Environment variable overriding the R² acceptance threshold
pub const ENV_REGRESSION_MIN_R_SQUARED: &str = "STRENGTH_REGRESSION_MIN_R_SQUARED";

static ENGINE_CONFIG: OnceLock<RecommendationEngineConfig> = OnceLock::new();

impl RecommendationEngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load recommendation engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let regression = &self.regression;
        if regression.iterations == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "regression.iterations must be positive",
            ));
        }
        if !(regression.learning_rate > 0.0 && regression.learning_rate < 1.0) {
            return Err(ConfigError::ValueOutOfRange(
                "regression.learning_rate must be in (0, 1)",
            ));
        }
        if !(0.0..1.0).contains(&regression.min_r_squared) {
            return Err(ConfigError::ValueOutOfRange(
                "regression.min_r_squared must be in [0, 1)",
            ));
        }
        if regression.moving_e1rm_window == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "regression.moving_e1rm_window must be positive",
            ));
        }

        let scoring = &self.confidence;
        if scoring.floor > scoring.ceiling {
            return Err(ConfigError::InvalidRange(
                "confidence.floor must be <= confidence.ceiling",
            ));
        }
        if scoring.pair_divisor <= 0.0 || scoring.r_squared_divisor <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "confidence divisors must be positive",
            ));
        }

        let unit = 0.0..=1.0;
        if ![
            self.calibration.confidence,
            self.deterministic.confidence,
            scoring.floor,
            scoring.ceiling,
        ]
        .iter()
        .all(|value| unit.contains(value))
        {
            return Err(ConfigError::ValueOutOfRange(
                "confidence scores must be in [0, 1]",
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(ENV_REGRESSION_ITERATIONS, &mut self.regression.iterations)?;
        Self::apply_env_var(
            ENV_REGRESSION_LEARNING_RATE,
            &mut self.regression.learning_rate,
        )?;
        Self::apply_env_var(
            ENV_REGRESSION_MIN_PAIRS,
            &mut self.regression.min_training_pairs,
        )?;
        Self::apply_env_var(
            ENV_REGRESSION_MIN_R_SQUARED,
            &mut self.regression.min_r_squared,
        )?;
        Ok(self)
    }
}
