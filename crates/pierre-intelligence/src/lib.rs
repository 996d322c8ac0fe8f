// ABOUTME: Strength progression intelligence: next-session weight recommendations per exercise
// ABOUTME: Calibration gate, deterministic progression, and per-call linear regression
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Intelligence
//!
//! Given one lifter's completed session history for one exercise, the engine
//! produces a suggested working weight, rep range, set count, and confidence
//! score. Three tiers are tried in order:
//!
//! 1. **Calibration** while the lifter has not finished calibration
//! 2. **Linear regression** refit from scratch on every call when enough
//!    history exists and the fit is good enough
//! 3. **Deterministic** rule-based progression otherwise
//!
//! The engine is a pure, synchronous function of its inputs. It performs no
//! I/O and holds no state between calls, so it can be invoked concurrently for
//! different lifters or exercises without coordination.

/// Estimated 1RM and weight rounding
pub mod algorithms;

/// Engine configuration (thresholds, fit parameters, confidence scoring)
pub mod config;

/// Rule-based progression model
pub mod deterministic;

/// Regression feature construction and training pairs
pub mod features;

/// Personal-record summaries and dashboard aggregation
pub mod personal_records;

/// Tier selection and recommendation packaging
pub mod recommendation_engine;

/// Batch gradient-descent linear regression
pub mod regression;

/// Per-session best weight, reps, and e1RM
pub mod session_metrics;

pub use algorithms::{estimated_1rm, round_weight};
pub use config::intelligence::{ConfigError, RecommendationEngineConfig};
pub use deterministic::{compute_deterministic_recommendation, DeterministicInput, DeterministicModel};
pub use personal_records::{
    summarize_exercise_prs, ExercisePrSummary, ExercisePrTrend, MajorLift, PrDashboard,
    PrSetRecord, TrendPoint,
};
pub use recommendation_engine::{build_recommendation, RecommendationEngine, RecommendationRequest};
pub use regression::{fit_linear_regression, GradientDescentParams, LinearModel};
pub use session_metrics::SessionSummary;
