// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Recommendation commands for pierre-strength
// ABOUTME: Recommends one routine exercise or plans the whole routine day

use std::path::Path;

use chrono::Utc;
use pierre_strength::{
    errors::AppResult, logging::AppLogger, planner::SessionPlanner, training_log::TrainingLog,
};
use tracing::info;

use crate::helpers::display::print_json;

/// Recommend a single exercise from the routine
pub fn recommend(log_path: &Path, exercise_id: &str) -> AppResult<()> {
    let log = load(log_path)?;
    let plan = SessionPlanner::new().plan_exercise(&log, exercise_id, Utc::now())?;
    AppLogger::log_recommendation(&plan.exercise_id, &plan.recommendation);
    print_json(&plan)
}

/// Plan every exercise of the routine
pub fn plan(log_path: &Path) -> AppResult<()> {
    let log = load(log_path)?;
    let plan = SessionPlanner::new().plan(&log, Utc::now());
    for exercise in &plan.exercises {
        AppLogger::log_recommendation(&exercise.exercise_id, &exercise.recommendation);
    }
    info!(exercises = plan.exercises.len(), "Session planned");
    print_json(&plan)
}

pub(crate) fn load(log_path: &Path) -> AppResult<TrainingLog> {
    let log = TrainingLog::from_path(log_path)?;
    AppLogger::log_training_log_loaded(
        &log_path.display().to_string(),
        log.sessions.len(),
        log.routine.len(),
    );
    Ok(log)
}
