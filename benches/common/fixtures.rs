// ABOUTME: Benchmark fixtures generating realistic strength-training histories
// ABOUTME: Deterministic data so recommendation timings are reproducible
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark test fixtures for generating strength-training sessions.

use chrono::{DateTime, Duration, TimeZone, Utc};
use pierre_strength::models::{
    CalibrationState, CoachingStyle, Goal, MovementType, Units, WorkoutSession,
};
use pierre_strength::intelligence::RecommendationRequest;

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// Just past the regression threshold
    Short,
    /// The default history window
    Window,
    /// A year of three sessions per week
    Year,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Short => 8,
            Self::Window => 12,
            Self::Year => 156,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Short => "8_sessions",
            Self::Window => "12_sessions",
            Self::Year => "156_sessions",
        }
    }
}

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 17, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Slowly progressing bench history with a deload every sixth session
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_possible_wrap
)]
#[must_use]
pub fn generate_sessions(count: usize) -> Vec<WorkoutSession> {
    (0..count)
        .map(|index| {
            let start = base_date() + Duration::days(index as i64 * 2 + (index as i64 % 3));
            let deload = if index % 6 == 5 { 0.9 } else { 1.0 };
            let weight = 1.25_f64.mul_add(index as f64, 135.0) * deload;
            let mut session = WorkoutSession::new(format!("bench_session_{index}"), start);
            for set in 0..3_u32 {
                let reps = 8 - (set + index as u32 % 2).min(3);
                session.log_set("bench", weight, reps, start + Duration::minutes(i64::from(set) * 4));
            }
            session.ended(start + Duration::hours(1))
        })
        .collect()
}

/// Calibrated hypertrophy request over `sessions`
#[must_use]
pub fn request_for(sessions: &[WorkoutSession]) -> RecommendationRequest<'_> {
    let now = sessions
        .last()
        .map_or_else(base_date, |session| session.started_at)
        + Duration::days(2);
    RecommendationRequest {
        sessions,
        calibration: CalibrationState {
            complete: true,
            length: 3,
            workouts_completed: 10,
        },
        goal: Goal::Hypertrophy,
        coaching_style: CoachingStyle::Balanced,
        movement_type: MovementType::Compound,
        units: Units::Lb,
        default_sets: 3,
        now,
    }
}
