// ABOUTME: Plans a routine day by recommending every exercise from the lifter's prepared history
// ABOUTME: Exercises are independent and evaluated in parallel with rayon
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Session planning
//!
//! For each routine exercise the planner collects that exercise's completed
//! history, attaches any sets already logged in the in-progress session, and
//! asks the engine for a recommendation using the lifter's profile.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::{AppError, AppResult};
use crate::history::{ExerciseHistory, HistoryConfig};
use crate::intelligence::{RecommendationEngine, RecommendationRequest};
use crate::models::{MovementType, RecommendationResult, RoutineExercise, SetEntry};
use crate::training_log::TrainingLog;

/// Recommendation and context for one routine exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePlan {
    /// Catalog identifier
    pub exercise_id: String,
    /// Display name
    pub name: String,
    /// Compound or isolation
    pub movement_type: MovementType,
    /// Completed sessions fed to the engine
    pub history_sessions: usize,
    /// Sets already logged for this exercise in the in-progress session
    pub logged_sets: Vec<SetEntry>,
    /// Engine output
    pub recommendation: RecommendationResult,
}

/// Plan for a whole routine day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionPlan {
    /// Reference time used for every recommendation
    pub planned_at: DateTime<Utc>,
    /// In-progress session the plan was made for, if any
    pub session_id: Option<String>,
    /// One entry per routine exercise, in routine order
    pub exercises: Vec<ExercisePlan>,
}

/// Routine-day planner
#[derive(Debug, Clone, Default)]
pub struct SessionPlanner {
    engine: RecommendationEngine,
    history: HistoryConfig,
}

impl SessionPlanner {
    /// Planner using the global engine configuration and the environment history window
    #[must_use]
    pub fn new() -> Self {
        let history = HistoryConfig::from_env().unwrap_or_else(|e| {
            warn!("Invalid history configuration: {e}, using defaults");
            HistoryConfig::default()
        });
        Self {
            engine: RecommendationEngine::new(),
            history,
        }
    }

    /// Replace the engine
    #[must_use]
    pub fn with_engine(mut self, engine: RecommendationEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Replace the history window
    #[must_use]
    pub const fn with_history_config(mut self, history: HistoryConfig) -> Self {
        self.history = history;
        self
    }

    /// Recommend every routine exercise
    #[must_use]
    pub fn plan(&self, log: &TrainingLog, now: DateTime<Utc>) -> SessionPlan {
        let exercises = log
            .routine
            .par_iter()
            .map(|exercise| self.plan_routine_exercise(log, exercise, now))
            .collect();

        SessionPlan {
            planned_at: now,
            session_id: log.in_progress_session().map(|session| session.id.clone()),
            exercises,
        }
    }

    /// Recommend a single routine exercise
    ///
    /// # Errors
    ///
    /// Returns a not-found error if `exercise_id` is not part of the routine
    pub fn plan_exercise(
        &self,
        log: &TrainingLog,
        exercise_id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<ExercisePlan> {
        let exercise = log.routine_exercise(exercise_id).ok_or_else(|| {
            AppError::not_found(format!("Routine exercise {exercise_id}"))
                .with_resource_id(exercise_id)
        })?;
        Ok(self.plan_routine_exercise(log, exercise, now))
    }

    fn plan_routine_exercise(
        &self,
        log: &TrainingLog,
        exercise: &RoutineExercise,
        now: DateTime<Utc>,
    ) -> ExercisePlan {
        let history = ExerciseHistory::collect(
            &log.sessions,
            &exercise.exercise_id,
            self.history.session_limit,
        );

        let request = RecommendationRequest::for_profile(
            &log.profile,
            history.as_slice(),
            exercise.movement_type,
            exercise.target_sets,
            now,
        );
        let recommendation = self.engine.recommend(&request);

        debug!(
            exercise.id = %exercise.exercise_id,
            history.sessions = history.len(),
            model = %recommendation.model_version,
            "Planned exercise"
        );

        let logged_sets: Vec<SetEntry> = log.in_progress_session().map_or_else(Vec::new, |session| {
            session.sets_for(&exercise.exercise_id).cloned().collect()
        });

        ExercisePlan {
            exercise_id: exercise.exercise_id.clone(),
            name: exercise.name.clone(),
            movement_type: exercise.movement_type,
            history_sessions: history.len(),
            logged_sets,
            recommendation,
        }
    }
}
