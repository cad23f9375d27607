//! CSS `object-position` values and their unit-interval focal point view.
//!
//! # Example
//!
//! ```
//! use focalcrop::ObjectPosition;
//!
//! let p: ObjectPosition = "25% 75%".parse().unwrap();
//! assert_eq!(p.x(), 25.0);
//! assert_eq!(p.to_string(), "25% 75%");
//!
//! // Out-of-range input is clamped and rounded on construction.
//! let q = ObjectPosition::new(120.0, 33.3333);
//! assert_eq!(q.to_string(), "100% 33.33%");
//! ```

use core::fmt;
use core::str::FromStr;

use crate::numeric::{clamp, round_with_two_decimals};

/// Normalize one axis: clamp to `[0, 100]`, round to two decimals.
pub(crate) fn normalize_percentage(value: f64) -> f64 {
    // `+ 0.0` folds -0.0 into 0.0 so it never prints as "-0".
    round_with_two_decimals(clamp(value, 0.0, 100.0)) + 0.0
}

/// Where the focal point sits inside a `cover`-fitted image, as two percentages.
///
/// Both axes are always within `[0, 100]` and rounded to two decimals.
/// `Display` produces the exact CSS text, e.g. `"50% 50%"`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ObjectPosition {
    x: f64,
    y: f64,
}

impl ObjectPosition {
    /// `50% 50%`, the CSS default.
    pub const CENTER: Self = Self { x: 50.0, y: 50.0 };

    /// Create from percentages, clamping to `[0, 100]` and rounding to two decimals.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: normalize_percentage(x),
            y: normalize_percentage(y),
        }
    }

    /// Assemble from axes that are already normalized.
    pub(crate) const fn from_normalized(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal percentage.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical percentage.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Unit-interval view used by drag math.
    pub fn focal_point(&self) -> FocalPoint {
        FocalPoint {
            x: self.x / 100.0,
            y: self.y / 100.0,
        }
    }

    /// Create from a unit-interval focal point.
    pub fn from_focal_point(point: FocalPoint) -> Self {
        Self::new(point.x * 100.0, point.y * 100.0)
    }
}

impl Default for ObjectPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

impl fmt::Display for ObjectPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}% {}%", self.x, self.y)
    }
}

/// Error parsing an `object-position` string.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseObjectPositionError {
    /// Fewer than two whitespace-separated components.
    MissingComponent,
    /// A component did not end with `%`.
    MissingPercentSign,
    /// A component was not a finite number.
    InvalidNumber,
    /// A component was outside `[0, 100]`.
    OutOfRange,
    /// More than two components.
    TrailingInput,
}

impl fmt::Display for ParseObjectPositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MissingComponent => "expected two percentages",
            Self::MissingPercentSign => "percentage is missing its % sign",
            Self::InvalidNumber => "percentage is not a finite number",
            Self::OutOfRange => "percentage is outside 0%..100%",
            Self::TrailingInput => "unexpected input after two percentages",
        })
    }
}

impl core::error::Error for ParseObjectPositionError {}

fn parse_percentage(component: &str) -> Result<f64, ParseObjectPositionError> {
    let number = component
        .strip_suffix('%')
        .ok_or(ParseObjectPositionError::MissingPercentSign)?;
    let value: f64 = number
        .parse()
        .map_err(|_| ParseObjectPositionError::InvalidNumber)?;
    if !value.is_finite() {
        return Err(ParseObjectPositionError::InvalidNumber);
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(ParseObjectPositionError::OutOfRange);
    }
    Ok(value)
}

impl FromStr for ObjectPosition {
    type Err = ParseObjectPositionError;

    /// Parse `"<x>% <y>%"`, the form produced by `Display` and persisted by the editor.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let x = parts
            .next()
            .ok_or(ParseObjectPositionError::MissingComponent)?;
        let y = parts
            .next()
            .ok_or(ParseObjectPositionError::MissingComponent)?;
        if parts.next().is_some() {
            return Err(ParseObjectPositionError::TrailingInput);
        }
        Ok(Self::new(parse_percentage(x)?, parse_percentage(y)?))
    }
}

/// Focal point in the unit square: `(0, 0)` top-left, `(1, 1)` bottom-right.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FocalPoint {
    pub x: f64,
    pub y: f64,
}

#[cfg(feature = "serde")]
mod serde_impl {
    use core::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::ObjectPosition;

    impl Serialize for ObjectPosition {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    struct ObjectPositionVisitor;

    impl Visitor<'_> for ObjectPositionVisitor {
        type Value = ObjectPosition;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object-position string such as \"50% 50%\"")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            v.parse().map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for ObjectPosition {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_str(ObjectPositionVisitor)
        }
    }
}
