// ABOUTME: Routine exercises and the lifter profile that configure a workout plan
// ABOUTME: Carries goal, coaching style, units, and calibration state per lifter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::{CalibrationState, CoachingStyle, Goal, MovementType, Units};

/// One exercise slot in a routine day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutineExercise {
    /// Catalog identifier of the exercise
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// Compound or isolation
    pub movement_type: MovementType,
    /// Default working sets for this slot
    pub target_sets: u32,
}

/// Lifter-level settings that shape every recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifterProfile {
    /// Training goal
    pub goal: Goal,
    /// Progression aggressiveness
    #[serde(default)]
    pub coaching_style: CoachingStyle,
    /// Unit system for logged and recommended weights
    pub units: Units,
    /// Calibration progress
    pub calibration: CalibrationState,
}
