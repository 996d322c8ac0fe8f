// ABOUTME: Integration tests for loading JSON training logs from text and from disk
// ABOUTME: Covers defaults, error codes for missing or malformed files, and the PR dashboard
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::fs;

use pierre_strength::errors::ErrorCode;
use pierre_strength::models::{CoachingStyle, Goal, MovementType, Units};
use pierre_strength::training_log::TrainingLog;
use tempfile::TempDir;

const LOG_JSON: &str = r#"{
  "profile": {
    "goal": "STRENGTH",
    "units": "KG",
    "calibration": { "complete": true, "length": 3, "workouts_completed": 4 }
  },
  "routine": [
    { "exercise_id": "bench", "name": "Barbell Bench Press", "movement_type": "COMPOUND", "target_sets": 5 },
    { "exercise_id": "fly", "name": "Cable Fly", "movement_type": "ISOLATION", "target_sets": 3 }
  ],
  "sessions": [
    {
      "id": "s1",
      "started_at": "2025-03-01T17:00:00Z",
      "ended_at": "2025-03-01T18:00:00Z",
      "sets": [
        { "exercise_id": "bench", "set_index": 1, "weight": 80.0, "reps": 5, "timestamp": "2025-03-01T17:10:00Z" },
        { "exercise_id": "squat", "set_index": 1, "weight": 120.0, "reps": 3, "timestamp": "2025-03-01T17:30:00Z" }
      ]
    },
    {
      "id": "s2",
      "started_at": "2025-03-04T17:00:00Z",
      "sets": [
        { "exercise_id": "bench", "set_index": 1, "weight": 82.5, "reps": 6, "is_failed": true, "timestamp": "2025-03-04T17:10:00Z" }
      ]
    }
  ]
}"#;

#[test]
fn test_parse_with_profile_defaults() {
    let log = TrainingLog::from_json(LOG_JSON).unwrap();

    assert_eq!(log.profile.goal, Goal::Strength);
    assert_eq!(log.profile.coaching_style, CoachingStyle::Balanced);
    assert_eq!(log.profile.units, Units::Kg);
    assert_eq!(log.routine.len(), 2);
    assert_eq!(log.routine[1].movement_type, MovementType::Isolation);
    assert!(log.sessions[1].sets[0].is_failed);
    assert!(!log.sessions[0].sets[0].is_failed);
}

#[test]
fn test_in_progress_session_and_names() {
    let log = TrainingLog::from_json(LOG_JSON).unwrap();

    assert_eq!(log.in_progress_session().unwrap().id, "s2");
    assert_eq!(log.exercise_name("bench"), "Barbell Bench Press");
    assert_eq!(log.exercise_name("squat"), "squat");
    assert!(log.routine_exercise("squat").is_none());
}

#[test]
fn test_routine_and_sessions_default_to_empty() {
    let log = TrainingLog::from_json(
        r#"{ "profile": { "goal": "ENDURANCE", "coaching_style": "CONSERVATIVE", "units": "LB",
             "calibration": { "complete": false, "length": 7, "workouts_completed": 0 } } }"#,
    )
    .unwrap();

    assert!(log.routine.is_empty());
    assert!(log.sessions.is_empty());
    assert!(log.in_progress_session().is_none());
}

#[test]
fn test_load_from_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.json");
    fs::write(&path, LOG_JSON).unwrap();

    let log = TrainingLog::from_path(&path).unwrap();

    assert_eq!(log.sessions.len(), 2);
}

#[test]
fn test_missing_file_is_storage_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let error = TrainingLog::from_path(&path).unwrap_err();

    assert_eq!(error.code, ErrorCode::StorageError);
    assert_eq!(error.code.exit_code(), 5);
    assert_eq!(
        error.context.resource_id.as_deref(),
        Some(path.display().to_string().as_str())
    );
}

#[test]
fn test_malformed_file_is_serialization_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"profile\": ").unwrap();

    let error = TrainingLog::from_path(&path).unwrap_err();

    assert_eq!(error.code, ErrorCode::SerializationError);
    assert!(error.context.resource_id.is_some());
    assert_eq!(error.context.details["line"], 1);
}

#[test]
fn test_unknown_enum_value_is_rejected() {
    let error = TrainingLog::from_json(
        r#"{ "profile": { "goal": "POWERLIFTING", "units": "LB",
             "calibration": { "complete": true, "length": 1, "workouts_completed": 1 } } }"#,
    )
    .unwrap_err();

    assert_eq!(error.code, ErrorCode::SerializationError);
}

#[test]
fn test_pr_dashboard_uses_routine_names() {
    let log = TrainingLog::from_json(LOG_JSON).unwrap();
    let dashboard = log.pr_dashboard();

    let names: Vec<&str> = dashboard
        .exercise_prs
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, ["Barbell Bench Press", "squat"]);

    let bench = dashboard.exercise("Barbell Bench Press").unwrap();
    assert!((bench.summary.best_weight - 82.5).abs() < f64::EPSILON);
    assert_eq!(bench.trend.len(), 2);

    // 82.5 x 6 -> 99.0
    let headline = &dashboard.major_lifts[0];
    assert_eq!(headline.name, "Barbell Bench Press");
    assert!((headline.estimated_1rm - 99.0).abs() < 1e-9);
}
