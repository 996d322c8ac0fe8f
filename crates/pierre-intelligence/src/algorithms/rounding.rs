// ABOUTME: Snaps continuous weights to the nearest practical plate increment
// ABOUTME: Never returns less than one increment so a working weight is always loadable

use pierre_core::models::Units;

/// Round `weight` to the nearest multiple of the unit's increment
///
/// Pounds round to 2.5, kilograms to 1.25. The result is floored at one
/// increment, so zero or negative input never produces a non-positive
/// recommendation.
///
/// ```rust
/// use pierre_core::models::Units;
/// use pierre_intelligence::algorithms::round_weight;
///
/// assert_eq!(round_weight(101.2, Units::Lb), 100.0);
/// assert_eq!(round_weight(0.0, Units::Lb), 2.5);
/// assert_eq!(round_weight(-5.0, Units::Kg), 1.25);
/// ```
#[must_use]
pub fn round_weight(weight: f64, units: Units) -> f64 {
    let step = units.rounding_increment();
    let snapped = (weight / step).round() * step;
    snapped.max(step)
}
