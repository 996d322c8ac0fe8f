// ABOUTME: Workout session and set entry models consumed read-only by the recommendation engine
// ABOUTME: Sessions own their logged sets; only ended sessions count as training history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single logged set
///
/// Within one session, set indices for an exercise start at 1 and increase
/// contiguously in logging order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Exercise this set belongs to
    pub exercise_id: String,
    /// 1-based ordinal within the session for this exercise
    pub set_index: u32,
    /// Weight lifted (non-negative)
    pub weight: f64,
    /// Repetitions completed
    pub reps: u32,
    /// Marked by the lifter as a missed or grinding rep
    #[serde(default)]
    pub is_failed: bool,
    /// When the set was logged
    pub timestamp: DateTime<Utc>,
}

impl SetEntry {
    /// Create a successful set logged at `timestamp`
    pub fn new(
        exercise_id: impl Into<String>,
        set_index: u32,
        weight: f64,
        reps: u32,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            set_index,
            weight,
            reps,
            is_failed: false,
            timestamp,
        }
    }

    /// Mark this set as failed
    #[must_use]
    pub fn failed(mut self) -> Self {
        self.is_failed = true;
        self
    }

    /// Weight times reps for this set
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// One workout, from start to (optional) end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    /// Session identifier
    pub id: String,
    /// Routine day the session was started from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine_day_id: Option<String>,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// When the session ended; `None` while in progress
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
    /// Sets logged during the session
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

impl WorkoutSession {
    /// Start a new, empty, in-progress session
    pub fn new(id: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            routine_day_id: None,
            started_at,
            ended_at: None,
            sets: Vec::new(),
        }
    }

    /// Attach the routine day this session was started from
    #[must_use]
    pub fn with_routine_day(mut self, routine_day_id: impl Into<String>) -> Self {
        self.routine_day_id = Some(routine_day_id.into());
        self
    }

    /// Mark the session as ended at `ended_at`
    #[must_use]
    pub fn ended(mut self, ended_at: DateTime<Utc>) -> Self {
        self.ended_at = Some(ended_at);
        self
    }

    /// Append a set
    #[must_use]
    pub fn with_set(mut self, set: SetEntry) -> Self {
        self.sets.push(set);
        self
    }

    /// Log a set for `exercise_id`, assigning the next contiguous set index
    pub fn log_set(&mut self, exercise_id: &str, weight: f64, reps: u32, timestamp: DateTime<Utc>) {
        let next_index = self
            .sets
            .iter()
            .filter(|set| set.exercise_id == exercise_id)
            .map(|set| set.set_index)
            .max()
            .unwrap_or(0)
            + 1;
        self.sets
            .push(SetEntry::new(exercise_id, next_index, weight, reps, timestamp));
    }

    /// Whether the session has ended
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.ended_at.is_some()
    }

    /// Sets logged for one exercise, in logging order
    pub fn sets_for<'a>(&'a self, exercise_id: &'a str) -> impl Iterator<Item = &'a SetEntry> + 'a {
        self.sets
            .iter()
            .filter(move |set| set.exercise_id == exercise_id)
    }
}
