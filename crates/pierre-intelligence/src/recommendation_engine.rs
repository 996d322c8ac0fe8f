// ABOUTME: Next-session weight recommendation orchestrator for a single exercise
// ABOUTME: Chooses calibration, linear regression, or deterministic progression from session history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recommendation engine
//!
//! Decision sequence, evaluated fresh on every call:
//!
//! 1. **Calibration gate**: no history, too few completed workouts, or
//!    calibration not flagged complete. Echo the last working weight back.
//! 2. **Insufficient history**: fewer than two sessions or no working weight in
//!    the latest one. Deterministic model.
//! 3. **Regression**: enough valid session pairs and an accepted fit. Predict,
//!    apply the style multiplier, clamp to the movement cap around the latest
//!    weight, round.
//! 4. **Deterministic fallback** otherwise.

use chrono::{DateTime, Utc};
use pierre_core::models::{
    CalibrationState, CoachingStyle, Goal, LifterProfile, ModelVersion, MovementType,
    RecommendationResult, Units, WorkoutSession,
};
use rayon::prelude::*;
use tracing::debug;

use crate::algorithms::{estimated_1rm, round_weight};
use crate::config::intelligence::RecommendationEngineConfig;
use crate::deterministic::{DeterministicInput, DeterministicModel};
use crate::features::{
    build_feature_vector, days_between, mean_best_e1rm, FeatureInputs, TrainingSet,
};
use crate::regression::fit_linear_regression;
use crate::session_metrics::{summarize_chronologically, SessionSummary};

/// Everything the engine needs to recommend one exercise for one lifter
#[derive(Debug, Clone, Copy)]
pub struct RecommendationRequest<'a> {
    /// Completed sessions for this exercise only, in any order
    pub sessions: &'a [WorkoutSession],
    /// Calibration progress
    pub calibration: CalibrationState,
    /// Training goal (selects the rep range)
    pub goal: Goal,
    /// Progression aggressiveness
    pub coaching_style: CoachingStyle,
    /// Compound or isolation (selects the safety cap)
    pub movement_type: MovementType,
    /// Unit system (selects caps and rounding)
    pub units: Units,
    /// Working sets to recommend
    pub default_sets: u32,
    /// Reference time for days-since-last-session
    pub now: DateTime<Utc>,
}

impl<'a> RecommendationRequest<'a> {
    /// Request for one exercise using a lifter's profile settings
    #[must_use]
    pub const fn for_profile(
        profile: &LifterProfile,
        sessions: &'a [WorkoutSession],
        movement_type: MovementType,
        default_sets: u32,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            sessions,
            calibration: profile.calibration,
            goal: profile.goal,
            coaching_style: profile.coaching_style,
            movement_type,
            units: profile.units,
            default_sets,
            now,
        }
    }
}

/// Stateless recommendation engine carrying only its configuration
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    config: RecommendationEngineConfig,
}

impl RecommendationEngine {
    /// Engine using the process-wide configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RecommendationEngineConfig::global().clone())
    }

    /// Engine using an explicit configuration
    #[must_use]
    pub const fn with_config(config: RecommendationEngineConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &RecommendationEngineConfig {
        &self.config
    }

    /// Recommend the next working weight, rep range, and set count
    #[must_use]
    pub fn recommend(&self, request: &RecommendationRequest<'_>) -> RecommendationResult {
        let summaries = summarize_chronologically(request.sessions);

        let Some(latest) = summaries.last().copied() else {
            debug!("No session history; calibration mode");
            return self.calibration(request, 0.0);
        };

        if !request.calibration.is_satisfied() {
            debug!(
                workouts_completed = request.calibration.workouts_completed,
                calibration_length = request.calibration.length,
                "Calibration not satisfied; calibration mode"
            );
            return self.calibration(request, latest.best_weight);
        }

        let rep_range = request.goal.rep_range();

        if summaries.len() < 2 || !latest.has_working_weight() {
            debug!(
                sessions = summaries.len(),
                "Insufficient history; deterministic model"
            );
            let reps = if latest.best_reps == 0 {
                rep_range.low
            } else {
                latest.best_reps
            };
            return self.deterministic(request, latest.best_weight, reps);
        }

        if let Some(result) = self.regression(request, &summaries, &latest) {
            return result;
        }

        self.deterministic(request, latest.best_weight, latest.best_reps)
    }

    /// Recommend for independent requests in parallel, preserving request order
    #[must_use]
    pub fn recommend_batch(
        &self,
        requests: &[RecommendationRequest<'_>],
    ) -> Vec<RecommendationResult> {
        requests
            .par_iter()
            .map(|request| self.recommend(request))
            .collect()
    }

    fn calibration(
        &self,
        request: &RecommendationRequest<'_>,
        latest_best_weight: f64,
    ) -> RecommendationResult {
        let rep_range = request.goal.rep_range();
        let reason_text = if latest_best_weight > 0.0 {
            "Calibration mode: start near your last logged working weight and adjust as needed."
        } else {
            "Calibration mode: enter the weights you perform today."
        };

        RecommendationResult {
            recommended_weight: latest_best_weight,
            recommended_rep_low: rep_range.low,
            recommended_rep_high: rep_range.high,
            recommended_sets: request.default_sets,
            confidence_score: self.config.calibration.confidence,
            model_version: ModelVersion::Calibration,
            reason_text: reason_text.into(),
        }
    }

    fn deterministic(
        &self,
        request: &RecommendationRequest<'_>,
        last_weight: f64,
        last_best_reps: u32,
    ) -> RecommendationResult {
        DeterministicModel::new(self.config.deterministic.confidence).recommend(
            &DeterministicInput {
                last_weight,
                last_best_reps,
                rep_range: request.goal.rep_range(),
                movement_type: request.movement_type,
                coaching_style: request.coaching_style,
                units: request.units,
                target_sets: request.default_sets,
            },
        )
    }

    fn regression(
        &self,
        request: &RecommendationRequest<'_>,
        summaries: &[SessionSummary],
        latest: &SessionSummary,
    ) -> Option<RecommendationResult> {
        let settings = &self.config.regression;
        let training = TrainingSet::from_summaries(
            summaries,
            request.coaching_style,
            request.goal,
            settings.moving_e1rm_window,
        );

        if training.len() < settings.min_training_pairs {
            debug!(
                training_pairs = training.len(),
                required = settings.min_training_pairs,
                "Not enough training pairs; skipping regression"
            );
            return None;
        }

        let model = fit_linear_regression(
            &training.features,
            &training.targets,
            &settings.gradient_descent(),
        )?;

        if !model.r_squared.is_finite() || model.r_squared <= settings.min_r_squared {
            debug!(
                training_pairs = training.len(),
                r_squared = model.r_squared,
                "Regression fit rejected; deterministic fallback"
            );
            return None;
        }

        let rep_range = request.goal.rep_range();
        let achieved_reps = if latest.best_reps == 0 {
            rep_range.low
        } else {
            latest.best_reps
        };
        let window_start = summaries.len().saturating_sub(settings.moving_e1rm_window);
        let mut moving_e1rm = mean_best_e1rm(&summaries[window_start..]);
        if moving_e1rm == 0.0 {
            moving_e1rm = estimated_1rm(latest.best_weight, achieved_reps);
        }

        let features = build_feature_vector(&FeatureInputs {
            previous_weight: latest.best_weight,
            achieved_reps,
            moving_e1rm,
            days_since_last: days_between(latest.started_at, request.now),
            coaching_style: request.coaching_style,
            goal: request.goal,
        });

        let raw_prediction = model.predict(&features);
        let adjusted =
            raw_prediction * settings.style_multiplier(request.coaching_style.style_factor());
        let cap = request.units.cap_for(request.movement_type);
        let bounded = adjusted.clamp(latest.best_weight - cap, latest.best_weight + cap);

        debug!(
            training_pairs = training.len(),
            r_squared = model.r_squared,
            raw_prediction,
            bounded,
            "Regression fit accepted"
        );

        Some(RecommendationResult {
            recommended_weight: round_weight(bounded.max(0.0), request.units),
            recommended_rep_low: rep_range.low,
            recommended_rep_high: rep_range.high,
            recommended_sets: request.default_sets,
            confidence_score: self.config.confidence.score(training.len(), model.r_squared),
            model_version: ModelVersion::LinearRegression,
            reason_text: format!(
                "ML model used {} prior sessions and recent trend to set your next working weight.",
                training.len()
            ),
        })
    }
}

/// Recommend with the default configuration
///
/// Equivalent to `RecommendationEngine::default().recommend(request)`; ignores
/// environment overrides.
#[must_use]
pub fn build_recommendation(request: &RecommendationRequest<'_>) -> RecommendationResult {
    RecommendationEngine::default().recommend(request)
}
