// ABOUTME: Core types and constants for Pierre strength progression intelligence
// ABOUTME: Foundation crate with error handling, training models, and contractual constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Core
//!
//! Foundation crate providing shared types and constants for the Pierre strength
//! progression engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Rep ranges, safety caps, rounding increments, and model thresholds
//! - **models**: Set entries, workout sessions, training configuration enums, and
//!   recommendation results

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`SetEntry`, `WorkoutSession`, `Goal`, `RecommendationResult`, etc.)
pub mod models;
