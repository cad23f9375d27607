//! Logarithmic mapping between aspect ratios and slider positions.
//!
//! Aspect ratios are multiplicative: 1:2 → 1:1 is the same visual step as
//! 1:1 → 2:1. On a log scale equal ratio multiples get equal track length and
//! the geometric mean of the domain sits at the midpoint.
//!
//! ```text
//!     9:16         1:1              16:9             4:1
//!     |-------------|----------------|----------------|
//!     0.0         0.29             0.59             1.0
//! ```
//!
//! Neither direction clamps: a ratio outside `[min, max]` maps to a position
//! outside `[0, 1]` so the inverse stays exact.

use num_traits::Float;

use crate::numeric::clamp;

/// Slider position of `ratio` on a log scale spanning `min..=max`.
///
/// Returns exactly `0.0` for `min` and exactly `1.0` for `max`.
/// `min == max` is not a valid domain.
pub fn to_log_position(ratio: f64, min: f64, max: f64) -> f64 {
    let log_min = Float::ln(min);
    (Float::ln(ratio) - log_min) / (Float::ln(max) - log_min)
}

/// Aspect ratio at slider `position` on a log scale spanning `min..=max`.
///
/// Inverse of [`to_log_position`].
pub fn to_aspect_ratio(position: f64, min: f64, max: f64) -> f64 {
    let log_min = Float::ln(min);
    Float::exp(log_min + position * (Float::ln(max) - log_min))
}

/// Direction of a single keyboard step on the slider.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SliderKey {
    /// Towards portrait (smaller ratio).
    ArrowLeft,
    /// Towards landscape (larger ratio).
    ArrowRight,
}

impl SliderKey {
    /// Sign applied to the step size.
    fn sign(self) -> f64 {
        match self {
            Self::ArrowLeft => -1.0,
            Self::ArrowRight => 1.0,
        }
    }
}

/// A log-scale slider domain.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LogScale {
    /// Ratio at position `0.0`.
    pub min: f64,
    /// Ratio at position `1.0`.
    pub max: f64,
}

impl LogScale {
    /// Create a domain. Returns `None` unless `0 < min < max` and both are finite.
    pub fn new(min: f64, max: f64) -> Option<Self> {
        let valid = min.is_finite() && max.is_finite() && min > 0.0 && min < max;
        valid.then_some(Self { min, max })
    }

    /// Domain spanned by a sorted tick list: first value to last value.
    #[cfg(feature = "alloc")]
    pub fn from_entries(entries: &[crate::ticks::AspectRatioEntry]) -> Option<Self> {
        let first = entries.first()?;
        let last = entries.last()?;
        Self::new(first.value, last.value)
    }

    /// See [`to_log_position`].
    pub fn position(&self, ratio: f64) -> f64 {
        to_log_position(ratio, self.min, self.max)
    }

    /// See [`to_aspect_ratio`].
    pub fn ratio(&self, position: f64) -> f64 {
        to_aspect_ratio(position, self.min, self.max)
    }

    /// Move `ratio` by `delta` slider units, keeping the result on the track.
    ///
    /// A ratio that starts outside the domain is pulled onto the nearest end
    /// once stepped.
    pub fn step(&self, ratio: f64, delta: f64) -> f64 {
        let position = clamp(self.position(ratio) + delta, 0.0, 1.0);
        self.ratio(position)
    }

    /// One keyboard step of size `step` in the direction of `key`.
    pub fn step_key(&self, ratio: f64, key: SliderKey, step: f64) -> f64 {
        self.step(ratio, key.sign() * step)
    }
}
