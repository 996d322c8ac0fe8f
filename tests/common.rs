// ABOUTME: Shared test fixtures for strength recommendation integration tests
// ABOUTME: Builds dated sessions, set lists, calibration states, and requests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `pierre_strength`

use chrono::{DateTime, Duration, TimeZone, Utc};
use pierre_strength::intelligence::RecommendationRequest;
use pierre_strength::models::{
    CalibrationState, CoachingStyle, Goal, MovementType, SetEntry, Units, WorkoutSession,
};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed reference time so every fixture is reproducible
pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 18, 0, 0).unwrap()
}

/// `epoch()` shifted by whole days
pub fn day(offset: i64) -> DateTime<Utc> {
    epoch() + Duration::days(offset)
}

/// An ended one-hour session on `day(offset)` with `(weight, reps)` sets for one exercise
pub fn ended_session(
    id: &str,
    exercise_id: &str,
    offset: i64,
    sets: &[(f64, u32)],
) -> WorkoutSession {
    let start = day(offset);
    let mut session = WorkoutSession::new(id, start);
    for (minute, &(weight, reps)) in (0_i64..).zip(sets) {
        session.log_set(exercise_id, weight, reps, start + Duration::minutes(minute * 3));
    }
    session.ended(start + Duration::hours(1))
}

/// Calibration that the engine treats as satisfied
pub const fn calibrated() -> CalibrationState {
    CalibrationState {
        complete: true,
        length: 7,
        workouts_completed: 10,
    }
}

/// Hypertrophy, balanced, compound, pounds, 3 sets, `now` two days after the last session
pub fn hypertrophy_request(sessions: &[WorkoutSession]) -> RecommendationRequest<'_> {
    let now = sessions
        .iter()
        .map(|session| session.started_at)
        .max()
        .unwrap_or_else(epoch)
        + Duration::days(2);

    RecommendationRequest {
        sessions,
        calibration: calibrated(),
        goal: Goal::Hypertrophy,
        coaching_style: CoachingStyle::Balanced,
        movement_type: MovementType::Compound,
        units: Units::Lb,
        default_sets: 3,
        now,
    }
}

/// Ten sessions two days apart, +2.5 lb per session, 8 then 7 reps
pub fn steady_progression() -> Vec<WorkoutSession> {
    (0..10)
        .map(|i| {
            let weight = 2.5_f64.mul_add(f64::from(i), 100.0);
            ended_session(
                &format!("steady-{i}"),
                "bench",
                i64::from(i) * 2,
                &[(weight, 8), (weight, 7)],
            )
        })
        .collect()
}

/// Ten sessions two days apart, all 100 lb x 8
pub fn flat_history() -> Vec<WorkoutSession> {
    (0..10)
        .map(|i| ended_session(&format!("flat-{i}"), "bench", i64::from(i) * 2, &[(100.0, 8)]))
        .collect()
}

/// Eight sessions three days apart, +5 lb per session at 10 reps
pub fn fast_progression() -> Vec<WorkoutSession> {
    (0..8)
        .map(|i| {
            let weight = 5.0_f64.mul_add(f64::from(i), 60.0);
            ended_session(&format!("fast-{i}"), "curl", i64::from(i) * 3, &[(weight, 10)])
        })
        .collect()
}

/// Ten leg-press sessions three days apart, +10 lb per session from 700 lb at 8 reps
pub fn heavy_progression() -> Vec<WorkoutSession> {
    (0..10)
        .map(|i| {
            let weight = 10.0_f64.mul_add(f64::from(i), 700.0);
            ended_session(
                &format!("heavy-{i}"),
                "leg_press",
                i64::from(i) * 3,
                &[(weight, 8), (weight, 8)],
            )
        })
        .collect()
}

/// A single set logged at `epoch()`
pub fn set(exercise_id: &str, index: u32, weight: f64, reps: u32) -> SetEntry {
    SetEntry::new(exercise_id, index, weight, reps, epoch())
}
