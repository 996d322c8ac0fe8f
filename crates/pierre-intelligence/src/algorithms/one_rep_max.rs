// ABOUTME: Estimated one-rep-max calculation using the Epley formula
// ABOUTME: Single-rep efforts are returned unchanged without extrapolation

use pierre_core::constants::one_rep_max::EPLEY_DIVISOR;

/// Estimate a one-rep max from a weight lifted for `reps` repetitions
///
/// Epley formula: `weight * (1 + reps / 30)`. For `reps <= 1` the weight is
/// returned unchanged. Weight is not validated; negative input yields a
/// negative estimate.
///
/// # Scientific References
///
/// - Epley, B. (1985). "Poundage chart." *Boyd Epley Workout*. Lincoln, NE.
///
/// # Example
///
/// ```rust
/// use pierre_intelligence::algorithms::estimated_1rm;
///
/// assert!((estimated_1rm(100.0, 10) - 133.33).abs() < 0.1);
/// assert_eq!(estimated_1rm(140.0, 1), 140.0);
/// ```
#[must_use]
pub fn estimated_1rm(weight: f64, reps: u32) -> f64 {
    if reps <= 1 {
        return weight;
    }
    weight * (1.0 + f64::from(reps) / EPLEY_DIVISOR)
}
