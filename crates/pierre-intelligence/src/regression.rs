// ABOUTME: Minimal batch gradient-descent linear regression with R-squared scoring
// ABOUTME: Refit from zero on every call; fixed iteration budget, no convergence check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Linear regression fitter
//!
//! Ordinary least squares solved by full-batch gradient descent on the mean
//! squared error. The iteration count and learning rate are a fixed compute
//! budget tuned for small per-exercise histories with unscaled features in the
//! tens-to-hundreds range; there is no early stopping and no persisted state.

#![allow(clippy::cast_precision_loss)] // Safe: sample counts are small

use pierre_core::constants::regression::{ITERATIONS, LEARNING_RATE};
use serde::{Deserialize, Serialize};

/// Gradient descent budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientDescentParams {
    /// Number of full-batch updates
    pub iterations: usize,
    /// Step size applied to each gradient
    pub learning_rate: f64,
}

impl Default for GradientDescentParams {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS,
            learning_rate: LEARNING_RATE,
        }
    }
}

/// Fitted coefficients and goodness of fit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// One coefficient per feature
    pub weights: Vec<f64>,
    /// Coefficient of determination on the training data (0 when targets have no variance)
    pub r_squared: f64,
}

impl LinearModel {
    /// Predict a target for one feature row
    #[must_use]
    pub fn predict(&self, features: &[f64]) -> f64 {
        dot(features, &self.weights)
    }
}

/// Dot product over the shorter of the two slices
#[must_use]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Fit a linear model by batch gradient descent
///
/// Returns `None` for degenerate input (no rows, zero-length rows, or a target
/// count that does not match the row count) and when the descent diverges to
/// non-finite weights.
#[must_use]
pub fn fit_linear_regression<F: AsRef<[f64]>>(
    features: &[F],
    targets: &[f64],
    params: &GradientDescentParams,
) -> Option<LinearModel> {
    let feature_count = features.first().map_or(0, |row| row.as_ref().len());
    if feature_count == 0 || features.len() != targets.len() {
        return None;
    }

    let sample_count = features.len() as f64;
    let mut weights = vec![0.0_f64; feature_count];
    let mut gradients = vec![0.0_f64; feature_count];

    for _ in 0..params.iterations {
        gradients.fill(0.0);

        for (row, target) in features.iter().zip(targets) {
            let row = row.as_ref();
            let error = dot(row, &weights) - target;
            for (gradient, value) in gradients.iter_mut().zip(row) {
                *gradient += (2.0 / sample_count) * error * value;
            }
        }

        for (weight, gradient) in weights.iter_mut().zip(&gradients) {
            *weight -= params.learning_rate * gradient;
        }
    }

    // unscaled heavy inputs can make a fixed learning rate diverge
    if !weights.iter().all(|weight| weight.is_finite()) {
        return None;
    }

    let r_squared = r_squared(features, targets, &weights);
    Some(LinearModel { weights, r_squared })
}

fn r_squared<F: AsRef<[f64]>>(features: &[F], targets: &[f64], weights: &[f64]) -> f64 {
    let mean = targets.iter().sum::<f64>() / targets.len() as f64;
    let (ss_res, ss_tot) = features
        .iter()
        .zip(targets)
        .fold((0.0_f64, 0.0_f64), |(res, tot), (row, target)| {
            let predicted = dot(row.as_ref(), weights);
            (
                (target - predicted).mul_add(target - predicted, res),
                (target - mean).mul_add(target - mean, tot),
            )
        });

    if ss_tot == 0.0 {
        0.0
    } else {
        1.0 - ss_res / ss_tot
    }
}
