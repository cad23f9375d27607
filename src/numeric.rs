//! Guarded numeric helpers shared by the slider and drag math.

use num_traits::Float;

/// Clamp `value` into `[min, max]` (inclusive).
///
/// Unlike [`f64::clamp`] this never panics, and a NaN `value` lands on `min`
/// so that a transient layout glitch can't leak NaN into a percentage.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Round to two decimal places.
///
/// `f64::EPSILON` is added first so values such as `1.005` that sit just
/// below the half-way point after binary conversion round up.
pub fn round_with_two_decimals(value: f64) -> f64 {
    Float::round((value + f64::EPSILON) * 100.0) / 100.0
}

/// `(part / whole) * 100`, or `0` when `whole` is zero, negative or NaN.
///
/// Container sizes of zero are observable for a frame while layout runs.
pub fn to_percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole) * 100.0
    } else {
        0.0
    }
}
