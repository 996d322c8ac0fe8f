// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Strength analysis commands for pierre-strength
// ABOUTME: Personal-record dashboard and one-off estimated 1RM

use std::path::Path;

use pierre_strength::{errors::AppResult, intelligence::estimated_1rm};
use serde_json::json;

use super::recommend::load;
use crate::helpers::display::print_json;

/// Print the personal-record dashboard for a training log
pub fn prs(log_path: &Path) -> AppResult<()> {
    let log = load(log_path)?;
    print_json(&log.pr_dashboard())
}

/// Print the Epley estimate for one set
pub fn e1rm(weight: f64, reps: u32) -> AppResult<()> {
    print_json(&json!({
        "weight": weight,
        "reps": reps,
        "estimated_1rm": estimated_1rm(weight, reps),
    }))
}
