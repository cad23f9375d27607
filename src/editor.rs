//! Editor geometry state and its reducer.
//!
//! The state is plain data; every change goes through [`reduce`] (or the
//! equivalent methods on [`EditorGeometryState`]) and yields a new value.
//!
//! ```
//! use focalcrop::{EditorAction, EditorGeometryState, ObjectPosition, reduce};
//!
//! let state = EditorGeometryState::new(1.5);
//! assert_eq!(state.aspect_ratio, 1.5);
//! assert_eq!(state.object_position, ObjectPosition::CENTER);
//!
//! let state = reduce(state, EditorAction::SetAspectRatio(1.0));
//! let state = reduce(state, EditorAction::ToggleShowFocalPoint);
//! assert!(state.show_focal_point);
//! assert_eq!(state.object_position, ObjectPosition::CENTER);
//! ```

use core::fmt;

use crate::drag::{DEFAULT_DRAG_THRESHOLD_PX, DragMode};
use crate::position::ObjectPosition;

/// Slider units moved by one arrow-key press.
pub const DEFAULT_SLIDER_STEP: f64 = 0.01;

/// Whether `value` is usable as an aspect ratio: finite and positive.
pub fn is_valid_aspect_ratio(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Error from editor input validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// Aspect ratio was zero, negative, NaN or infinite.
    InvalidAspectRatio,
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAspectRatio => f.write_str("aspect ratio must be finite and positive"),
        }
    }
}

impl core::error::Error for GeometryError {}

/// Geometry of the image being edited.
///
/// With the `serde` feature, deserializing rejects a non-finite or
/// non-positive `aspectRatio` or `naturalAspectRatio`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "camelCase")
)]
pub struct EditorGeometryState {
    /// Crop aspect ratio currently selected on the slider.
    pub aspect_ratio: f64,
    /// The loaded image's own width ÷ height.
    pub natural_aspect_ratio: f64,
    pub object_position: ObjectPosition,
    /// Focal-point cross is shown and draggable.
    pub show_focal_point: bool,
    /// The unclipped overflow ghost is shown.
    pub show_overflow: bool,
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    use super::{EditorGeometryState, GeometryError, is_valid_aspect_ratio};
    use crate::position::ObjectPosition;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Stored {
        aspect_ratio: f64,
        natural_aspect_ratio: f64,
        object_position: ObjectPosition,
        show_focal_point: bool,
        show_overflow: bool,
    }

    impl<'de> Deserialize<'de> for EditorGeometryState {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let stored = Stored::deserialize(deserializer)?;
            if !is_valid_aspect_ratio(stored.aspect_ratio)
                || !is_valid_aspect_ratio(stored.natural_aspect_ratio)
            {
                return Err(Error::custom(GeometryError::InvalidAspectRatio));
            }
            Ok(Self {
                aspect_ratio: stored.aspect_ratio,
                natural_aspect_ratio: stored.natural_aspect_ratio,
                object_position: stored.object_position,
                show_focal_point: stored.show_focal_point,
                show_overflow: stored.show_overflow,
            })
        }
    }
}

/// A change to [`EditorGeometryState`].
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EditorAction {
    /// A (new) image finished decoding with this natural aspect ratio.
    ImageLoaded(f64),
    SetAspectRatio(f64),
    SetObjectPosition(ObjectPosition),
    ToggleShowFocalPoint,
    ToggleShowOverflow,
}

/// Which element received pointer-down.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerTarget {
    /// The cropped image or its overflow ghost.
    Image,
    /// The focal-point cross.
    FocalMarker,
    /// Anything else (toolbar, slider, page background).
    Other,
}

impl EditorGeometryState {
    /// State for a freshly loaded image: crop at its natural ratio, centered.
    ///
    /// `natural_aspect_ratio` should be finite and positive; the decoder side
    /// is responsible for rejecting corrupt images.
    pub fn new(natural_aspect_ratio: f64) -> Self {
        Self {
            aspect_ratio: natural_aspect_ratio,
            natural_aspect_ratio,
            object_position: ObjectPosition::CENTER,
            show_focal_point: false,
            show_overflow: false,
        }
    }

    /// Reseed for a new image. View toggles are kept.
    pub fn on_image_loaded(self, natural_aspect_ratio: f64) -> Self {
        if !is_valid_aspect_ratio(natural_aspect_ratio) {
            return self;
        }
        Self {
            aspect_ratio: natural_aspect_ratio,
            natural_aspect_ratio,
            object_position: ObjectPosition::CENTER,
            ..self
        }
    }

    /// Any finite positive ratio is accepted, not only tick values.
    pub fn set_aspect_ratio(self, aspect_ratio: f64) -> Self {
        if !is_valid_aspect_ratio(aspect_ratio) {
            return self;
        }
        Self {
            aspect_ratio,
            ..self
        }
    }

    pub fn set_object_position(self, object_position: ObjectPosition) -> Self {
        Self {
            object_position,
            ..self
        }
    }

    pub fn toggle_show_focal_point(self) -> Self {
        Self {
            show_focal_point: !self.show_focal_point,
            ..self
        }
    }

    pub fn toggle_show_overflow(self) -> Self {
        Self {
            show_overflow: !self.show_overflow,
            ..self
        }
    }

    /// Drag interpretation for a pointer-down on `target`.
    ///
    /// The marker can only be grabbed while it is shown. Returns `None` for
    /// targets that don't start a drag.
    pub fn drag_mode(&self, target: PointerTarget) -> Option<DragMode> {
        match target {
            PointerTarget::Image => Some(DragMode::Image),
            PointerTarget::FocalMarker if self.show_focal_point => Some(DragMode::FocalMarker),
            PointerTarget::FocalMarker | PointerTarget::Other => None,
        }
    }
}

/// Apply `action` to `state`.
///
/// Invalid aspect ratios leave the state untouched.
pub fn reduce(state: EditorGeometryState, action: EditorAction) -> EditorGeometryState {
    match action {
        EditorAction::ImageLoaded(ratio) => state.on_image_loaded(ratio),
        EditorAction::SetAspectRatio(ratio) => state.set_aspect_ratio(ratio),
        EditorAction::SetObjectPosition(position) => state.set_object_position(position),
        EditorAction::ToggleShowFocalPoint => state.toggle_show_focal_point(),
        EditorAction::ToggleShowOverflow => state.toggle_show_overflow(),
    }
}

/// Modifier keys held during a key press.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Single-key editor shortcut for `key`.
///
/// `a` toggles the focal point and `s` toggles overflow. Shift is allowed;
/// Ctrl, Alt or Meta leave the key to the browser (copy, paste, ...).
pub fn shortcut_action(key: char, modifiers: Modifiers) -> Option<EditorAction> {
    if modifiers.ctrl || modifiers.alt || modifiers.meta {
        return None;
    }
    match key.to_ascii_lowercase() {
        'a' => Some(EditorAction::ToggleShowFocalPoint),
        's' => Some(EditorAction::ToggleShowOverflow),
        _ => None,
    }
}

/// Tunables for the editor binding layer.
///
/// ```
/// use focalcrop::EditorConfig;
///
/// let config = EditorConfig::default().slider_step(0.05).drag_threshold_px(2.0);
/// assert_eq!(config.slider_step, 0.05);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct EditorConfig {
    /// Slider units per arrow-key press.
    pub slider_step: f64,
    /// Pointer dead zone at the start of a drag, in CSS pixels.
    pub drag_threshold_px: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            slider_step: DEFAULT_SLIDER_STEP,
            drag_threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
        }
    }
}

impl EditorConfig {
    /// Set the keyboard step.
    pub fn slider_step(mut self, step: f64) -> Self {
        self.slider_step = step;
        self
    }

    /// Set the drag dead zone.
    pub fn drag_threshold_px(mut self, px: f64) -> Self {
        self.drag_threshold_px = px;
        self
    }
}
