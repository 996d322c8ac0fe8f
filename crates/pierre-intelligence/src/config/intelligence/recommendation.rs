// ABOUTME: Recommendation engine configuration for next-session weight suggestions
// ABOUTME: Configures tier confidences, regression fit budget, acceptance thresholds, and scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation Engine Configuration
//!
//! Defaults reproduce the constants in `pierre_core::constants` exactly.

use pierre_core::constants::{confidence, regression, style_factors};
use serde::{Deserialize, Serialize};

use crate::regression::GradientDescentParams;

/// Recommendation Engine Configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationEngineConfig {
    /// Calibration-mode settings
    pub calibration: CalibrationSettings,
    /// Deterministic-model settings
    pub deterministic: DeterministicSettings,
    /// Regression fit and acceptance settings
    pub regression: RegressionSettings,
    /// Regression confidence scoring
    pub confidence: ConfidenceScoring,
}

/// Settings for the calibration tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalibrationSettings {
    /// Confidence reported while calibrating
    pub confidence: f64,
}

/// Settings for the deterministic tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeterministicSettings {
    /// Confidence reported by the deterministic model
    pub confidence: f64,
}

/// Settings for the regression tier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionSettings {
    /// Gradient descent iterations per fit
    pub iterations: usize,
    /// Gradient descent learning rate
    pub learning_rate: f64,
    /// Valid training pairs needed before fitting
    pub min_training_pairs: usize,
    /// Fits with R² at or below this are rejected
    pub min_r_squared: f64,
    /// Trailing sessions averaged into the moving e1RM
    pub moving_e1rm_window: usize,
    /// Style multiplier base (`base + slope * style_factor`)
    pub style_multiplier_base: f64,
    /// Style multiplier slope (`base + slope * style_factor`)
    pub style_multiplier_slope: f64,
}

/// Regression confidence: `clamp(base + pairs / pair_divisor + r2 / r_squared_divisor, floor, ceiling)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceScoring {
    /// Starting confidence
    pub base: f64,
    /// Training pairs worth one full point
    pub pair_divisor: f64,
    /// Divisor applied to R²
    pub r_squared_divisor: f64,
    /// Lowest reported regression confidence
    pub floor: f64,
    /// Highest reported regression confidence
    pub ceiling: f64,
}

impl Default for CalibrationSettings {
    fn default() -> Self {
        Self {
            confidence: confidence::CALIBRATION,
        }
    }
}

impl Default for DeterministicSettings {
    fn default() -> Self {
        Self {
            confidence: confidence::DETERMINISTIC,
        }
    }
}

impl Default for RegressionSettings {
    fn default() -> Self {
        Self {
            iterations: regression::ITERATIONS,
            learning_rate: regression::LEARNING_RATE,
            min_training_pairs: regression::MIN_TRAINING_PAIRS,
            min_r_squared: regression::MIN_R_SQUARED,
            moving_e1rm_window: regression::MOVING_E1RM_WINDOW,
            style_multiplier_base: style_factors::MULTIPLIER_BASE,
            style_multiplier_slope: style_factors::MULTIPLIER_SLOPE,
        }
    }
}

impl Default for ConfidenceScoring {
    fn default() -> Self {
        Self {
            base: confidence::REGRESSION_BASE,
            pair_divisor: confidence::REGRESSION_PAIR_DIVISOR,
            r_squared_divisor: confidence::REGRESSION_R_SQUARED_DIVISOR,
            floor: confidence::REGRESSION_FLOOR,
            ceiling: confidence::REGRESSION_CEILING,
        }
    }
}

impl RegressionSettings {
    /// Gradient descent budget for one fit
    #[must_use]
    pub const fn gradient_descent(&self) -> GradientDescentParams {
        GradientDescentParams {
            iterations: self.iterations,
            learning_rate: self.learning_rate,
        }
    }

    /// Multiplier applied to a raw prediction for a style factor
    #[must_use]
    pub fn style_multiplier(&self, style_factor: f64) -> f64 {
        self.style_multiplier_slope
            .mul_add(style_factor, self.style_multiplier_base)
    }
}

impl ConfidenceScoring {
    /// Confidence for an accepted fit over `training_pairs` pairs
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Safe: pair counts are small
    pub fn score(&self, training_pairs: usize, r_squared: f64) -> f64 {
        let raw = self.base
            + training_pairs as f64 / self.pair_divisor
            + r_squared / self.r_squared_divisor;
        raw.clamp(self.floor, self.ceiling)
    }
}
