// ABOUTME: Recommendation output record and model-version tags
// ABOUTME: Returned once per engine call; persistence belongs to the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

use super::RepRange;
use crate::constants::model_versions;

/// Which tier of the engine produced a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelVersion {
    /// Calibration mode: anchor to the lifter's own last weight
    #[serde(rename = "calibration-v1")]
    Calibration,
    /// Rule-based adjustment of the last working weight
    #[serde(rename = "deterministic-v1")]
    Deterministic,
    /// Per-call linear regression over session history
    #[serde(rename = "ml-linear-v1")]
    LinearRegression,
}

impl ModelVersion {
    /// Version tag as stored alongside persisted recommendations
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Calibration => model_versions::CALIBRATION,
            Self::Deterministic => model_versions::DETERMINISTIC,
            Self::LinearRegression => model_versions::LINEAR_REGRESSION,
        }
    }
}

impl fmt::Display for ModelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Next-session recommendation for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    /// Suggested working weight, in the lifter's units
    pub recommended_weight: f64,
    /// Bottom of the suggested rep range
    pub recommended_rep_low: u32,
    /// Top of the suggested rep range
    pub recommended_rep_high: u32,
    /// Suggested number of working sets
    pub recommended_sets: u32,
    /// Reliability of the recommendation in `[0, 1]`
    pub confidence_score: f64,
    /// Engine tier that produced this recommendation
    pub model_version: ModelVersion,
    /// Human-readable rationale
    pub reason_text: String,
}

impl RecommendationResult {
    /// Suggested rep range as a `RepRange`
    #[must_use]
    pub const fn rep_range(&self) -> RepRange {
        RepRange::new(self.recommended_rep_low, self.recommended_rep_high)
    }
}
