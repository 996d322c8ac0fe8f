// ABOUTME: Integration tests for the recommendation engine's tier selection and outputs
// ABOUTME: Covers calibration precedence, insufficient history, regression acceptance, and batching
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{
    calibrated, ended_session, fast_progression, flat_history, heavy_progression,
    hypertrophy_request, init_test_logging, steady_progression,
};
use pierre_strength::intelligence::{
    build_recommendation, RecommendationEngine, RecommendationEngineConfig,
};
use pierre_strength::models::{
    CalibrationState, CoachingStyle, ModelVersion, MovementType, WorkoutSession,
};

// === Calibration gate ===

#[test]
fn test_empty_history_during_calibration() {
    init_test_logging();
    let mut request = hypertrophy_request(&[]);
    request.calibration = CalibrationState {
        complete: false,
        length: 7,
        workouts_completed: 2,
    };

    let result = build_recommendation(&request);

    assert_eq!(result.model_version, ModelVersion::Calibration);
    assert!(result.confidence_score < 0.5);
    assert!(result.recommended_weight.abs() < f64::EPSILON);
    assert_eq!(
        result.reason_text,
        "Calibration mode: enter the weights you perform today."
    );
}

#[test]
fn test_empty_history_is_calibration_even_when_calibrated() {
    let result = build_recommendation(&hypertrophy_request(&[]));
    assert_eq!(result.model_version, ModelVersion::Calibration);
    assert!((result.confidence_score - 0.30).abs() < f64::EPSILON);
}

#[test]
fn test_calibration_flag_gates_regression() {
    let sessions = steady_progression();
    let mut request = hypertrophy_request(&sessions);
    request.calibration.complete = false;

    let result = build_recommendation(&request);

    assert_eq!(result.model_version, ModelVersion::Calibration);
    // raw latest best weight, no rounding or progression
    assert!((result.recommended_weight - 122.5).abs() < f64::EPSILON);
    assert_eq!((result.recommended_rep_low, result.recommended_rep_high), (8, 12));
    assert_eq!(result.recommended_sets, 3);
    assert_eq!(
        result.reason_text,
        "Calibration mode: start near your last logged working weight and adjust as needed."
    );
}

#[test]
fn test_too_few_completed_workouts_gates_regression() {
    let sessions = steady_progression();
    let mut request = hypertrophy_request(&sessions);
    request.calibration = CalibrationState {
        complete: true,
        length: 12,
        workouts_completed: 11,
    };

    assert_eq!(
        build_recommendation(&request).model_version,
        ModelVersion::Calibration
    );
}

// === Insufficient history ===

#[test]
fn test_single_session_above_range_progresses() {
    let sessions = [ended_session("only", "bench", 0, &[(100.0, 13)])];
    let result = build_recommendation(&hypertrophy_request(&sessions));

    assert_eq!(result.model_version, ModelVersion::Deterministic);
    assert!(result.recommended_weight >= 100.0);
    // +5% for balanced compound work
    assert!((result.recommended_weight - 105.0).abs() < f64::EPSILON);
}

#[test]
fn test_one_session_never_uses_regression() {
    for sets in [[(100.0, 8)], [(60.0, 2)], [(0.0, 0)]] {
        let sessions = [ended_session("only", "bench", 0, &sets)];
        let result = build_recommendation(&hypertrophy_request(&sessions));
        assert_ne!(result.model_version, ModelVersion::LinearRegression);
    }
}

#[test]
fn test_latest_session_without_weight_falls_back() {
    let mut sessions = flat_history();
    sessions.push(ended_session("bodyweight", "bench", 30, &[(0.0, 10)]));

    let result = build_recommendation(&hypertrophy_request(&sessions));

    assert_eq!(result.model_version, ModelVersion::Deterministic);
    // zero weight is held, then floored to one increment
    assert!((result.recommended_weight - 2.5).abs() < f64::EPSILON);
}

// === Regression tier ===

#[test]
fn test_steady_progression_accepts_regression() {
    let sessions = steady_progression();
    let result = build_recommendation(&hypertrophy_request(&sessions));

    assert_eq!(result.model_version, ModelVersion::LinearRegression);
    assert!((result.confidence_score - 0.95).abs() < f64::EPSILON);
    assert_eq!(
        result.reason_text,
        "ML model used 9 prior sessions and recent trend to set your next working weight."
    );
    assert!((120.0..=125.0).contains(&result.recommended_weight));
    assert_eq!((result.recommended_rep_low, result.recommended_rep_high), (8, 12));
    assert_eq!(result.recommended_sets, 3);
}

#[test]
fn test_regression_respects_isolation_cap() {
    let sessions = fast_progression();
    let mut request = hypertrophy_request(&sessions);
    request.movement_type = MovementType::Isolation;
    request.coaching_style = CoachingStyle::Aggressive;

    let result = build_recommendation(&request);

    assert_eq!(result.model_version, ModelVersion::LinearRegression);
    // latest best weight is 95 lb; isolation cap is 10 lb
    assert!((85.0..=105.0).contains(&result.recommended_weight));
    assert!((result.recommended_weight - 100.0).abs() < f64::EPSILON);
}

#[test]
fn test_flat_history_rejects_regression() {
    let sessions = flat_history();
    let result = build_recommendation(&hypertrophy_request(&sessions));

    // zero target variance gives R² = 0
    assert_eq!(result.model_version, ModelVersion::Deterministic);
    assert!((result.recommended_weight - 100.0).abs() < f64::EPSILON);
    assert!((result.confidence_score - 0.55).abs() < f64::EPSILON);
}

#[test]
fn test_heavy_loads_fall_back_when_fit_diverges() {
    let sessions = heavy_progression();
    let result = build_recommendation(&hypertrophy_request(&sessions));

    // unscaled 700+ lb features overflow the fixed-rate descent
    assert_eq!(result.model_version, ModelVersion::Deterministic);
    assert!(result.confidence_score.is_finite());
    assert!((result.confidence_score - 0.55).abs() < f64::EPSILON);
    // 8 reps is inside the hypertrophy range, so the latest 790 is held
    assert!((result.recommended_weight - 790.0).abs() < f64::EPSILON);
}

#[test]
fn test_fewer_than_six_pairs_skips_regression() {
    let sessions: Vec<WorkoutSession> = steady_progression().into_iter().take(6).collect();
    let result = build_recommendation(&hypertrophy_request(&sessions));

    // 6 sessions give only 5 pairs
    assert_eq!(result.model_version, ModelVersion::Deterministic);
    // 8 reps is inside the hypertrophy range, so the latest 112.5 is held
    assert!((result.recommended_weight - 112.5).abs() < f64::EPSILON);
}

#[test]
fn test_session_order_does_not_matter() {
    let sessions = steady_progression();
    let mut reversed = sessions.clone();
    reversed.reverse();

    let forward = build_recommendation(&hypertrophy_request(&sessions));
    let backward = build_recommendation(&hypertrophy_request(&reversed));

    assert_eq!(forward, backward);
}

#[test]
fn test_regression_confidence_stays_in_band() {
    for style in [
        CoachingStyle::Conservative,
        CoachingStyle::Balanced,
        CoachingStyle::Aggressive,
    ] {
        for sessions in [steady_progression(), fast_progression()] {
            let mut request = hypertrophy_request(&sessions);
            request.coaching_style = style;
            let result = build_recommendation(&request);
            if result.model_version == ModelVersion::LinearRegression {
                assert!((0.50..=0.95).contains(&result.confidence_score));
            } else {
                assert!((result.confidence_score - 0.55).abs() < f64::EPSILON);
            }
        }
    }
}

// === Configuration and batching ===

#[test]
fn test_stricter_pair_requirement_disables_regression() {
    let mut config = RecommendationEngineConfig::default();
    config.regression.min_training_pairs = 20;
    let engine = RecommendationEngine::with_config(config);

    let sessions = steady_progression();
    let result = engine.recommend(&hypertrophy_request(&sessions));

    assert_eq!(result.model_version, ModelVersion::Deterministic);
}

#[test]
fn test_batch_preserves_request_order() {
    let steady = steady_progression();
    let flat = flat_history();
    let mut uncalibrated = hypertrophy_request(&[]);
    uncalibrated.calibration = CalibrationState::new(7);

    let requests = [
        hypertrophy_request(&steady),
        hypertrophy_request(&flat),
        uncalibrated,
    ];
    let engine = RecommendationEngine::with_config(RecommendationEngineConfig::default());
    let results = engine.recommend_batch(&requests);

    let versions: Vec<_> = results.iter().map(|r| r.model_version).collect();
    assert_eq!(
        versions,
        [
            ModelVersion::LinearRegression,
            ModelVersion::Deterministic,
            ModelVersion::Calibration
        ]
    );
    for (request, result) in requests.iter().zip(&results) {
        assert_eq!(&engine.recommend(request), result);
    }
}

#[test]
fn test_calibrated_helper_is_satisfied() {
    assert!(calibrated().is_satisfied());
}
