// ABOUTME: Personal-record summaries per exercise and a dashboard aggregate across exercises
// ABOUTME: Tracks best weight, reps at best weight, best e1RM, max set volume, and e1RM trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use pierre_core::constants::personal_records::MAJOR_LIFTS;
use pierre_core::models::SetEntry;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::algorithms::estimated_1rm;

/// Best marks across a set list
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExercisePrSummary {
    /// Heaviest weight lifted
    pub best_weight: f64,
    /// Most reps at `best_weight`
    pub best_reps_at_best_weight: u32,
    /// Highest Epley estimate
    pub best_estimated_1rm: f64,
    /// Largest single-set weight x reps
    pub max_volume_set: f64,
}

impl ExercisePrSummary {
    /// Fold one set into the summary
    ///
    /// A set takes over the best weight when it is strictly heavier, or equally
    /// heavy with strictly more reps.
    pub fn record(&mut self, set: &SetEntry) {
        #[allow(clippy::float_cmp)] // exact tie on logged weights
        let ties_best_weight = set.weight == self.best_weight;
        if set.weight > self.best_weight
            || (ties_best_weight && set.reps > self.best_reps_at_best_weight)
        {
            self.best_weight = set.weight;
            self.best_reps_at_best_weight = set.reps;
        }
        self.best_estimated_1rm = self
            .best_estimated_1rm
            .max(estimated_1rm(set.weight, set.reps));
        self.max_volume_set = self.max_volume_set.max(set.volume());
    }
}

/// Summarize personal records over `sets` (all zeros when empty)
#[must_use]
pub fn summarize_exercise_prs(sets: &[SetEntry]) -> ExercisePrSummary {
    sets.iter().fold(ExercisePrSummary::default(), |mut summary, set| {
        summary.record(set);
        summary
    })
}

/// A logged set with the exercise and session context the dashboard needs
#[derive(Debug, Clone, Copy)]
pub struct PrSetRecord<'a> {
    /// Exercise grouping key
    pub exercise_id: &'a str,
    /// Exercise display name
    pub exercise_name: &'a str,
    /// Start of the session the set belongs to
    pub session_started_at: DateTime<Utc>,
    /// The set itself
    pub set: &'a SetEntry,
}

/// One point of an exercise's e1RM history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    /// Session date
    pub date: NaiveDate,
    /// Estimated 1RM of the set
    pub e1rm: f64,
}

/// Personal records and e1RM trend for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePrTrend {
    /// Exercise display name
    pub name: String,
    /// Best marks
    #[serde(flatten)]
    pub summary: ExercisePrSummary,
    /// Per-set e1RM in input order
    pub trend: Vec<TrendPoint>,
}

/// Headline e1RM for one of the major lifts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MajorLift {
    /// Lift name
    pub name: String,
    /// Best e1RM rounded to one decimal (0 when never logged)
    pub estimated_1rm: f64,
}

/// Personal-record dashboard across all exercises
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrDashboard {
    /// Fixed major lifts, in display order
    pub major_lifts: Vec<MajorLift>,
    /// Every logged exercise, sorted by name
    pub exercise_prs: Vec<ExercisePrTrend>,
}

impl PrDashboard {
    /// Aggregate records, expected in logging order
    #[must_use]
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = PrSetRecord<'a>>,
    {
        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut exercise_prs: Vec<ExercisePrTrend> = Vec::new();

        for record in records {
            let index = *positions.entry(record.exercise_id).or_insert_with(|| {
                exercise_prs.push(ExercisePrTrend {
                    name: record.exercise_name.to_owned(),
                    summary: ExercisePrSummary::default(),
                    trend: Vec::new(),
                });
                exercise_prs.len() - 1
            });

            let entry = &mut exercise_prs[index];
            entry.summary.record(record.set);
            entry.trend.push(TrendPoint {
                date: record.session_started_at.date_naive(),
                e1rm: estimated_1rm(record.set.weight, record.set.reps),
            });
        }

        exercise_prs.sort_by(|a, b| a.name.cmp(&b.name));

        let major_lifts = MAJOR_LIFTS
            .iter()
            .map(|&name| {
                let best = exercise_prs
                    .iter()
                    .filter(|entry| entry.name == name)
                    .map(|entry| entry.summary.best_estimated_1rm)
                    .fold(0.0_f64, f64::max);
                MajorLift {
                    name: name.to_owned(),
                    estimated_1rm: round_to_tenth(best),
                }
            })
            .collect();

        Self {
            major_lifts,
            exercise_prs,
        }
    }

    /// Trend for an exercise by display name
    #[must_use]
    pub fn exercise(&self, name: &str) -> Option<&ExercisePrTrend> {
        self.exercise_prs.iter().find(|entry| entry.name == name)
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
