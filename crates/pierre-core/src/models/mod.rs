// ABOUTME: Core data models for Pierre strength progression
// ABOUTME: Re-exports sessions, set entries, training enums, and recommendation results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! This module contains the core data structures shared by the recommendation
//! engine and its callers.
//!
//! ## Core Models
//!
//! - `WorkoutSession` / `SetEntry`: logged training history
//! - `Goal`, `CoachingStyle`, `MovementType`, `Units`: closed configuration enums
//! - `RecommendationResult` / `ModelVersion`: engine output
//! - `CalibrationState`, `LifterProfile`, `RoutineExercise`: caller-side settings

mod calibration;
mod recommendation;
mod routine;
mod session;
mod training;

pub use calibration::CalibrationState;
pub use recommendation::{ModelVersion, RecommendationResult};
pub use routine::{LifterProfile, RoutineExercise};
pub use session::{SetEntry, WorkoutSession};
pub use training::{CoachingStyle, Goal, MovementType, RepRange, Units, WeightCaps};
