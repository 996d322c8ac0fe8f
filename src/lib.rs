// ABOUTME: Main library entry point for Pierre strength progression
// ABOUTME: Wires training logs, history preparation, session planning, and logging around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Strength
//!
//! Next-session weight recommendations for strength training. Given a lifter's
//! logged workouts, the engine suggests a working weight, rep range, and set
//! count for each exercise of the day's routine, together with a confidence
//! score and a short rationale.
//!
//! ## Architecture
//!
//! - **`pierre-core`**: domain models, error types, contractual constants
//! - **`pierre-intelligence`**: the pure recommendation engine (calibration,
//!   deterministic progression, per-call linear regression) and PR analysis
//! - **this crate**: caller-side concerns the engine deliberately leaves out:
//!   loading a training log, filtering history down to one exercise,
//!   planning a whole routine day, and logging setup for the CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use pierre_strength::errors::AppResult;
//! use pierre_strength::planner::SessionPlanner;
//! use pierre_strength::training_log::TrainingLog;
//!
//! fn main() -> AppResult<()> {
//!     let log = TrainingLog::from_path("training-log.json")?;
//!     let plan = SessionPlanner::new().plan(&log, Utc::now());
//!     for exercise in &plan.exercises {
//!         println!("{}: {}", exercise.name, exercise.recommendation.recommended_weight);
//!     }
//!     Ok(())
//! }
//! ```

/// Per-exercise history preparation for the engine
pub mod history;

/// Structured logging configuration
pub mod logging;

/// Routine-day planning across exercises
pub mod planner;

/// JSON training log loading
pub mod training_log;

/// Contractual constants (rep ranges, caps, thresholds)
pub use pierre_core::constants;

/// Unified error handling
pub use pierre_core::errors;

/// Domain models
pub use pierre_core::models;

/// Recommendation engine and strength analytics
pub use pierre_intelligence as intelligence;
