// ABOUTME: Per-session summaries of the best weight, reps at that weight, and best e1RM
// ABOUTME: Computed once per session and shared by feature construction and tier selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use pierre_core::models::{SetEntry, WorkoutSession};
use serde::{Deserialize, Serialize};

use crate::algorithms::estimated_1rm;

/// Best performance within one session for one exercise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session start time
    pub started_at: DateTime<Utc>,
    /// Heaviest weight logged (0 when no sets)
    pub best_weight: f64,
    /// Most reps among sets at `best_weight` (0 when no sets)
    pub best_reps: u32,
    /// Highest estimated 1RM across all sets (0 when no sets)
    pub best_e1rm: f64,
}

impl SessionSummary {
    /// Summarize every set of a session
    ///
    /// The caller is expected to pass sessions whose sets are already filtered
    /// to a single exercise.
    #[must_use]
    pub fn of(session: &WorkoutSession) -> Self {
        Self::from_sets(session.started_at, &session.sets)
    }

    /// Summarize an arbitrary set list
    #[must_use]
    pub fn from_sets(started_at: DateTime<Utc>, sets: &[SetEntry]) -> Self {
        let best_weight = sets.iter().fold(0.0_f64, |best, set| best.max(set.weight));
        #[allow(clippy::float_cmp)] // exact match against a weight taken from the same sets
        let best_reps = sets
            .iter()
            .filter(|set| set.weight == best_weight)
            .map(|set| set.reps)
            .max()
            .unwrap_or(0);
        let best_e1rm = sets.iter().fold(0.0_f64, |best, set| {
            best.max(estimated_1rm(set.weight, set.reps))
        });

        Self {
            started_at,
            best_weight,
            best_reps,
            best_e1rm,
        }
    }

    /// Whether any set in the session carried positive weight
    #[must_use]
    pub fn has_working_weight(&self) -> bool {
        self.best_weight > 0.0
    }
}

/// Summaries for `sessions`, ordered by start time ascending
///
/// The sort is stable, so sessions sharing a start time keep their input order.
#[must_use]
pub fn summarize_chronologically(sessions: &[WorkoutSession]) -> Vec<SessionSummary> {
    let mut summaries: Vec<SessionSummary> = sessions.iter().map(SessionSummary::of).collect();
    summaries.sort_by_key(|summary| summary.started_at);
    summaries
}
