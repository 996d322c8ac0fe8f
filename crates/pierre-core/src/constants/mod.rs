// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Rep ranges, safety caps, rounding increments, and recommendation model thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! These values were tuned empirically for per-exercise histories of tens of
//! sessions. They are reproduced exactly by the default engine configuration and
//! should only change through a product decision.

/// Target rep ranges per training goal, as `(low, high)`
pub mod rep_ranges {
    /// Strength: heavy, low-rep work
    pub const STRENGTH: (u32, u32) = (3, 6);
    /// Hypertrophy: moderate load, moderate reps
    pub const HYPERTROPHY: (u32, u32) = (8, 12);
    /// Endurance: light load, high reps
    pub const ENDURANCE: (u32, u32) = (12, 20);
    /// General fitness: broad middle range
    pub const GENERAL_FITNESS: (u32, u32) = (6, 12);
}

/// Absolute per-session weight change caps
///
/// `LOWER` caps are numerically larger and apply to compound movements; `UPPER`
/// caps apply to isolation movements.
pub mod weight_caps {
    /// Isolation cap in pounds
    pub const LB_UPPER: f64 = 10.0;
    /// Compound cap in pounds
    pub const LB_LOWER: f64 = 20.0;
    /// Isolation cap in kilograms
    pub const KG_UPPER: f64 = 5.0;
    /// Compound cap in kilograms
    pub const KG_LOWER: f64 = 10.0;
}

/// Smallest practical plate increments
pub mod rounding {
    /// Pound increment
    pub const LB_INCREMENT: f64 = 2.5;
    /// Kilogram increment
    pub const KG_INCREMENT: f64 = 1.25;
}

/// Percentage load changes used by the deterministic model
pub mod progression {
    /// Increase for conservative lifters, and balanced isolation work
    pub const SMALL_INCREASE_PERCENT: f64 = 2.5;
    /// Increase for balanced compound work, and aggressive isolation work
    pub const MEDIUM_INCREASE_PERCENT: f64 = 5.0;
    /// Increase for aggressive compound work
    pub const LARGE_INCREASE_PERCENT: f64 = 7.5;
    /// Decrease applied whenever the bottom of the rep range was missed
    pub const DECREASE_PERCENT: f64 = -2.5;
}

/// Coaching-style multipliers applied to regression predictions
pub mod style_factors {
    /// Conservative style factor
    pub const CONSERVATIVE: f64 = 0.75;
    /// Balanced style factor
    pub const BALANCED: f64 = 1.0;
    /// Aggressive style factor
    pub const AGGRESSIVE: f64 = 1.3;
    /// Multiplier base: `base + slope * factor`
    pub const MULTIPLIER_BASE: f64 = 0.95;
    /// Multiplier slope: `base + slope * factor`
    pub const MULTIPLIER_SLOPE: f64 = 0.05;
}

/// Confidence scores reported per model tier
pub mod confidence {
    /// Calibration-mode confidence
    pub const CALIBRATION: f64 = 0.30;
    /// Deterministic-model confidence
    pub const DETERMINISTIC: f64 = 0.55;
    /// Regression confidence before history and fit bonuses
    pub const REGRESSION_BASE: f64 = 0.55;
    /// Training pairs needed to add a full point of confidence
    pub const REGRESSION_PAIR_DIVISOR: f64 = 30.0;
    /// R² is divided by this before being added
    pub const REGRESSION_R_SQUARED_DIVISOR: f64 = 2.0;
    /// Lowest regression confidence
    pub const REGRESSION_FLOOR: f64 = 0.50;
    /// Highest regression confidence
    pub const REGRESSION_CEILING: f64 = 0.95;
}

/// Linear regression fitting parameters
pub mod regression {
    /// Full-batch gradient descent iterations
    pub const ITERATIONS: usize = 1200;
    /// Gradient descent learning rate
    pub const LEARNING_RATE: f64 = 0.000_001;
    /// Minimum valid training pairs before a fit is attempted
    pub const MIN_TRAINING_PAIRS: usize = 6;
    /// A fit is accepted only when R² is strictly above this
    pub const MIN_R_SQUARED: f64 = 0.08;
    /// Trailing sessions averaged for the moving e1RM feature
    pub const MOVING_E1RM_WINDOW: usize = 3;
    /// Length of the feature vector
    pub const FEATURE_COUNT: usize = 12;
}

/// Estimated one-rep-max formula constants
pub mod one_rep_max {
    /// Epley denominator: `w * (1 + reps / 30)`
    pub const EPLEY_DIVISOR: f64 = 30.0;
}

/// Model version tags attached to every recommendation
pub mod model_versions {
    /// Calibration tier
    pub const CALIBRATION: &str = "calibration-v1";
    /// Deterministic tier
    pub const DETERMINISTIC: &str = "deterministic-v1";
    /// Regression tier
    pub const LINEAR_REGRESSION: &str = "ml-linear-v1";
}

/// Time conversion helpers
pub mod time {
    /// Milliseconds in one day
    pub const MILLIS_PER_DAY: f64 = 86_400_000.0;
}

/// Caller-side history limits
pub mod history {
    /// Sessions of history fed to the engine per exercise
    pub const DEFAULT_SESSION_LIMIT: usize = 12;
}

/// Personal-record dashboard
pub mod personal_records {
    /// Lifts always listed on the dashboard, in display order
    pub const MAJOR_LIFTS: [&str; 5] = [
        "Barbell Bench Press",
        "Back Squat",
        "Deadlift",
        "Overhead Press",
        "Barbell Row",
    ];
}

/// Service identification for structured logging
pub mod service_names {
    /// Service name reported in logs
    pub const PIERRE_STRENGTH: &str = "pierre-strength";
}
