// ABOUTME: Rule-based next-session load adjustment bounded by per-movement safety caps
// ABOUTME: Used after calibration when history is too short or the regression fit is rejected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic progression model
//!
//! Adjusts the last working weight by a fixed percentage chosen from the rep
//! outcome, coaching style, and movement type:
//!
//! | outcome                    | conservative | balanced        | aggressive      |
//! |----------------------------|--------------|-----------------|-----------------|
//! | reps > top of range        | +2.5%        | +5% / +2.5%     | +7.5% / +5%     |
//! | reps < bottom of range     | -2.5%        | -2.5%           | -2.5%           |
//! | within range               | 0            | 0               | 0               |
//!
//! (compound / isolation where they differ). The absolute change is clamped to
//! the unit's movement cap, the result is floored at zero and snapped to the
//! plate increment.

use pierre_core::constants::{confidence, progression};
use pierre_core::models::{
    CoachingStyle, ModelVersion, MovementType, RecommendationResult, RepRange, Units,
};
use serde::{Deserialize, Serialize};

use crate::algorithms::round_weight;

/// Inputs to the deterministic model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeterministicInput {
    /// Best weight from the most recent session
    pub last_weight: f64,
    /// Most reps achieved at `last_weight`
    pub last_best_reps: u32,
    /// Target rep range, passed through to the result
    pub rep_range: RepRange,
    /// Selects the safety cap and the increase step
    pub movement_type: MovementType,
    /// Selects the increase step
    pub coaching_style: CoachingStyle,
    /// Selects the safety cap and rounding increment
    pub units: Units,
    /// Working sets, passed through to the result
    pub target_sets: u32,
}

/// Load change in percent for a rep outcome
///
/// Positive when the lifter beat the top of the range, negative when they
/// missed the bottom, zero otherwise.
#[must_use]
pub const fn progression_percent(
    best_reps: u32,
    rep_range: RepRange,
    coaching_style: CoachingStyle,
    movement_type: MovementType,
) -> f64 {
    if best_reps > rep_range.high {
        match (coaching_style, movement_type) {
            (CoachingStyle::Conservative, _) | (CoachingStyle::Balanced, MovementType::Isolation) => {
                progression::SMALL_INCREASE_PERCENT
            }
            (CoachingStyle::Balanced, MovementType::Compound)
            | (CoachingStyle::Aggressive, MovementType::Isolation) => {
                progression::MEDIUM_INCREASE_PERCENT
            }
            (CoachingStyle::Aggressive, MovementType::Compound) => {
                progression::LARGE_INCREASE_PERCENT
            }
        }
    } else if best_reps < rep_range.low {
        progression::DECREASE_PERCENT
    } else {
        0.0
    }
}

fn rationale(percent: f64) -> String {
    if percent > 0.0 {
        format!(
            "You exceeded the rep target last session; increasing load {}%.",
            percent.abs().round()
        )
    } else if percent < 0.0 {
        "Last set performance dipped under target; easing load slightly for quality reps.".into()
    } else {
        "Holding load steady to build consistency at this rep range.".into()
    }
}

/// Deterministic progression model with a configurable reported confidence
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeterministicModel {
    confidence: f64,
}

impl Default for DeterministicModel {
    fn default() -> Self {
        Self::new(confidence::DETERMINISTIC)
    }
}

impl DeterministicModel {
    /// Model reporting `confidence` on every result
    #[must_use]
    pub const fn new(confidence: f64) -> Self {
        Self { confidence }
    }

    /// Confidence attached to every result
    #[must_use]
    pub const fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Produce a safety-bounded recommendation
    #[must_use]
    pub fn recommend(&self, input: &DeterministicInput) -> RecommendationResult {
        let percent = progression_percent(
            input.last_best_reps,
            input.rep_range,
            input.coaching_style,
            input.movement_type,
        );
        let cap = input.units.cap_for(input.movement_type);

        let delta = (input.last_weight * percent / 100.0).clamp(-cap, cap);
        let next = (input.last_weight + delta).max(0.0);

        RecommendationResult {
            recommended_weight: round_weight(next, input.units),
            recommended_rep_low: input.rep_range.low,
            recommended_rep_high: input.rep_range.high,
            recommended_sets: input.target_sets,
            confidence_score: self.confidence,
            model_version: ModelVersion::Deterministic,
            reason_text: rationale(percent),
        }
    }
}

/// Deterministic recommendation with the default confidence
#[must_use]
pub fn compute_deterministic_recommendation(input: &DeterministicInput) -> RecommendationResult {
    DeterministicModel::default().recommend(input)
}
