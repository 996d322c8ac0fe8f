// ABOUTME: Prepares one exercise's completed-session history in the shape the engine expects
// ABOUTME: Filters ended sessions, keeps only that exercise's sets, and bounds the history window
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Exercise history preparation
//!
//! The engine trusts its caller to pass only completed sessions for a single
//! exercise. `ExerciseHistory::collect` is that caller-side contract made
//! concrete.

use std::env;

use crate::constants::history::DEFAULT_SESSION_LIMIT;
use crate::errors::{AppError, AppResult};
use crate::models::WorkoutSession;

/// Environment variable overriding the per-exercise history window
pub const ENV_HISTORY_LIMIT: &str = "STRENGTH_HISTORY_LIMIT";

/// History window configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryConfig {
    /// Most recent completed sessions kept per exercise
    pub session_limit: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            session_limit: DEFAULT_SESSION_LIMIT,
        }
    }
}

impl HistoryConfig {
    /// Load from `STRENGTH_HISTORY_LIMIT`, falling back to the default window
    ///
    /// # Errors
    ///
    /// Returns a config error if the variable is set but is not a positive integer
    pub fn from_env() -> AppResult<Self> {
        let Ok(raw) = env::var(ENV_HISTORY_LIMIT) else {
            return Ok(Self::default());
        };

        match raw.trim().parse::<usize>() {
            Ok(limit) if limit > 0 => Ok(Self {
                session_limit: limit,
            }),
            _ => Err(AppError::config(format!(
                "{ENV_HISTORY_LIMIT} must be a positive integer, got '{raw}'"
            ))),
        }
    }
}

/// Completed sessions for one exercise, oldest first
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseHistory {
    /// Exercise the history was collected for
    pub exercise_id: String,
    /// Ended sessions holding only this exercise's sets, ordered by set index
    pub sessions: Vec<WorkoutSession>,
}

impl ExerciseHistory {
    /// Collect the most recent `limit` completed sessions that logged `exercise_id`
    ///
    /// In-progress sessions and sessions without a set for the exercise are
    /// dropped. Sessions are ordered by start time ascending; ties keep input
    /// order.
    #[must_use]
    pub fn collect(sessions: &[WorkoutSession], exercise_id: &str, limit: usize) -> Self {
        let mut relevant: Vec<WorkoutSession> = sessions
            .iter()
            .filter(|session| session.is_completed())
            .filter_map(|session| {
                let mut sets: Vec<_> = session.sets_for(exercise_id).cloned().collect();
                if sets.is_empty() {
                    return None;
                }
                sets.sort_by_key(|set| set.set_index);
                Some(WorkoutSession {
                    sets,
                    ..session.clone()
                })
            })
            .collect();

        relevant.sort_by_key(|session| session.started_at);
        let excess = relevant.len().saturating_sub(limit);
        relevant.drain(..excess);

        Self {
            exercise_id: exercise_id.to_owned(),
            sessions: relevant,
        }
    }

    /// Number of sessions kept
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no completed session logged this exercise
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Sessions as a slice for the engine
    #[must_use]
    pub fn as_slice(&self) -> &[WorkoutSession] {
        &self.sessions
    }
}
