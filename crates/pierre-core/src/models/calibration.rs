// ABOUTME: Calibration progress tracked per lifter across completed workouts
// ABOUTME: Calibration gates the recommendation engine until enough sessions are logged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Calibration progress for one lifter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalibrationState {
    /// Whether calibration has been marked complete
    pub complete: bool,
    /// Completed workouts required before calibration ends
    pub length: u32,
    /// Completed workouts counted so far
    pub workouts_completed: u32,
}

impl CalibrationState {
    /// Fresh calibration requiring `length` completed workouts
    #[must_use]
    pub const fn new(length: u32) -> Self {
        Self {
            complete: false,
            length,
            workouts_completed: 0,
        }
    }

    /// Count one more completed workout, marking calibration complete once `length` is reached
    pub fn record_completed_workout(&mut self) {
        self.workouts_completed = self.workouts_completed.saturating_add(1);
        self.complete = self.workouts_completed >= self.length;
    }

    /// Whether the engine may leave calibration mode
    #[must_use]
    pub const fn is_satisfied(&self) -> bool {
        self.complete && self.workouts_completed >= self.length
    }
}
