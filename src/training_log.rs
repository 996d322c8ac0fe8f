// ABOUTME: JSON training log holding a lifter profile, a routine day, and logged workout sessions
// ABOUTME: Loaded from disk by the CLI and consumed by the planner and PR dashboard
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::intelligence::{PrDashboard, PrSetRecord};
use crate::models::{LifterProfile, RoutineExercise, WorkoutSession};

/// Everything logged for one lifter
///
/// ```json
/// {
///   "profile": { "goal": "HYPERTROPHY", "coaching_style": "BALANCED", "units": "LB",
///                "calibration": { "complete": true, "length": 3, "workouts_completed": 5 } },
///   "routine": [ { "exercise_id": "bench", "name": "Barbell Bench Press",
///                  "movement_type": "COMPOUND", "target_sets": 3 } ],
///   "sessions": [ { "id": "s1", "started_at": "2025-03-01T17:00:00Z",
///                   "ended_at": "2025-03-01T18:00:00Z", "sets": [] } ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingLog {
    /// Lifter settings
    pub profile: LifterProfile,
    /// Exercises of the routine day, in order
    #[serde(default)]
    pub routine: Vec<RoutineExercise>,
    /// Logged sessions, completed or in progress
    #[serde(default)]
    pub sessions: Vec<WorkoutSession>,
}

impl TrainingLog {
    /// Parse a training log from JSON text
    ///
    /// # Errors
    ///
    /// Returns a serialization error with line and column details on malformed input
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a training log file
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, or a serialization
    /// error if its contents are not a valid training log
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let contents = fs::read_to_string(path)
            .map_err(|e| AppError::from(e).with_resource_id(display.clone()))?;
        Self::from_json(&contents).map_err(|e| e.with_resource_id(display))
    }

    /// Routine slot for an exercise
    #[must_use]
    pub fn routine_exercise(&self, exercise_id: &str) -> Option<&RoutineExercise> {
        self.routine
            .iter()
            .find(|exercise| exercise.exercise_id == exercise_id)
    }

    /// Display name for an exercise, falling back to its id when not in the routine
    #[must_use]
    pub fn exercise_name<'a>(&'a self, exercise_id: &'a str) -> &'a str {
        self.routine_exercise(exercise_id)
            .map_or(exercise_id, |exercise| exercise.name.as_str())
    }

    /// The session still in progress, if any (the latest-started one)
    #[must_use]
    pub fn in_progress_session(&self) -> Option<&WorkoutSession> {
        self.sessions
            .iter()
            .filter(|session| !session.is_completed())
            .max_by_key(|session| session.started_at)
    }

    /// Personal-record dashboard across every logged set, in timestamp order
    #[must_use]
    pub fn pr_dashboard(&self) -> PrDashboard {
        let mut records: Vec<PrSetRecord<'_>> = self
            .sessions
            .iter()
            .flat_map(|session| {
                session.sets.iter().map(move |set| PrSetRecord {
                    exercise_id: &set.exercise_id,
                    exercise_name: self.exercise_name(&set.exercise_id),
                    session_started_at: session.started_at,
                    set,
                })
            })
            .collect();
        records.sort_by_key(|record| record.set.timestamp);
        PrDashboard::build(records)
    }
}
