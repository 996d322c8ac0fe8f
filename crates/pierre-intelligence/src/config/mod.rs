// ABOUTME: Configuration module for pierre-intelligence crate
// ABOUTME: Re-exports recommendation engine configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Recommendation engine configuration (tier thresholds, fit budget, confidence scoring)
pub mod intelligence;

pub use intelligence::RecommendationEngineConfig;
