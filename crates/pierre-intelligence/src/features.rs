// ABOUTME: Feature vectors and training pairs for the per-call progression regression
// ABOUTME: Pairs consecutive sessions: features from the earlier one, target from the next
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Regression feature construction
//!
//! Feature layout (order is significant and shared between training and prediction):
//!
//! | index | feature                         |
//! |-------|---------------------------------|
//! | 0     | bias (always 1)                 |
//! | 1     | previous best weight            |
//! | 2     | reps achieved at that weight    |
//! | 3     | moving e1RM                     |
//! | 4     | days until the next session     |
//! | 5-7   | coaching style one-hot          |
//! | 8-11  | training goal one-hot           |

use chrono::{DateTime, Utc};
use pierre_core::constants::{regression::FEATURE_COUNT, time::MILLIS_PER_DAY};
use pierre_core::models::{CoachingStyle, Goal};

use crate::session_metrics::SessionSummary;

/// One row of the design matrix
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Raw inputs for a single feature vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureInputs {
    /// Best weight of the session the prediction starts from
    pub previous_weight: f64,
    /// Reps achieved at that weight
    pub achieved_reps: u32,
    /// Smoothed estimated 1RM
    pub moving_e1rm: f64,
    /// Fractional days until the predicted session
    pub days_since_last: f64,
    /// Lifter's coaching style
    pub coaching_style: CoachingStyle,
    /// Lifter's training goal
    pub goal: Goal,
}

/// Build the fixed-layout feature vector
#[must_use]
pub fn build_feature_vector(inputs: &FeatureInputs) -> FeatureVector {
    let [conservative, balanced, aggressive] = inputs.coaching_style.one_hot();
    let [strength, hypertrophy, endurance, general_fitness] = inputs.goal.one_hot();
    [
        1.0,
        inputs.previous_weight,
        f64::from(inputs.achieved_reps),
        inputs.moving_e1rm,
        inputs.days_since_last,
        conservative,
        balanced,
        aggressive,
        strength,
        hypertrophy,
        endurance,
        general_fitness,
    ]
}

/// Fractional days from `from` to `to`
#[must_use]
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    (to - from).num_milliseconds() as f64 / MILLIS_PER_DAY
}

/// Mean best e1RM over `summaries` (0 when empty)
#[must_use]
pub fn mean_best_e1rm(summaries: &[SessionSummary]) -> f64 {
    if summaries.is_empty() {
        return 0.0;
    }
    summaries.iter().map(|s| s.best_e1rm).sum::<f64>() / summaries.len() as f64
}

/// Trailing window of up to `window` summaries ending at `end` (inclusive)
#[must_use]
pub fn trailing_window(summaries: &[SessionSummary], end: usize, window: usize) -> &[SessionSummary] {
    let stop = (end + 1).min(summaries.len());
    let begin = stop.saturating_sub(window.max(1));
    &summaries[begin..stop]
}

/// Design matrix and targets built from consecutive session pairs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrainingSet {
    /// One feature vector per valid pair
    pub features: Vec<FeatureVector>,
    /// Next-session best weight per valid pair
    pub targets: Vec<f64>,
}

impl TrainingSet {
    /// Number of valid training pairs
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no valid pair could be built
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Build training pairs from chronologically sorted summaries
    ///
    /// A pair is skipped when either session has no positive-weight set. The
    /// moving e1RM is the mean best e1RM of up to `window` sessions ending at
    /// the current one, floored by the current session's own best e1RM.
    #[must_use]
    pub fn from_summaries(
        summaries: &[SessionSummary],
        coaching_style: CoachingStyle,
        goal: Goal,
        window: usize,
    ) -> Self {
        let mut training = Self::default();

        for (index, pair) in summaries.windows(2).enumerate() {
            let (current, next) = (&pair[0], &pair[1]);
            if !current.has_working_weight() || !next.has_working_weight() {
                continue;
            }

            let rolling = mean_best_e1rm(trailing_window(summaries, index, window));
            let features = build_feature_vector(&FeatureInputs {
                previous_weight: current.best_weight,
                achieved_reps: current.best_reps,
                moving_e1rm: rolling.max(current.best_e1rm),
                days_since_last: days_between(current.started_at, next.started_at),
                coaching_style,
                goal,
            });

            training.features.push(features);
            training.targets.push(next.best_weight);
        }

        training
    }
}
