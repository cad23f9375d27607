//! Focal-point and aspect-ratio geometry for `object-position` crop editors.
//!
//! Pure math over plain numbers. Hosts measure the DOM (or any other
//! surface), feed rectangles and pointer coordinates in, and get CSS-ready
//! `object-position` percentages and slider positions out.
//!
//! # Modules
//!
//! - [`numeric`]: clamping, two-decimal rounding, percentages
//! - [`scale`]: logarithmic mapping between aspect ratios and slider positions
//! - [`ticks`]: named aspect-ratio presets plus the image's original ratio (`alloc`)
//! - [`geometry`]: points, sizes, rects and the `object-fit: cover` size
//! - [`position`]: [`ObjectPosition`] and its CSS text form
//! - [`drag`]: pointer deltas to object positions
//! - [`editor`]: editor state, reducer, shortcuts and configuration
//! - [`controller`]: the [`Editor`] binding layer that owns drag sessions (`alloc`)
//! - [`snippet`]: `<img>` markup generation (`snippet` feature)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod drag;
pub mod editor;
pub mod geometry;
pub mod numeric;
pub mod position;
pub mod scale;

#[cfg(feature = "alloc")]
pub mod controller;
#[cfg(feature = "alloc")]
pub mod ticks;

#[cfg(feature = "snippet")]
pub mod snippet;

pub use drag::{DragMode, DragSession, update_object_position};
pub use editor::{
    EditorAction, EditorConfig, EditorGeometryState, GeometryError, Modifiers, PointerTarget,
    reduce, shortcut_action,
};
pub use geometry::{Point, Rect, Size, cover_size};
pub use numeric::{clamp, round_with_two_decimals, to_percentage};
pub use position::{FocalPoint, ObjectPosition, ParseObjectPositionError};
pub use scale::{LogScale, SliderKey, to_aspect_ratio, to_log_position};

#[cfg(feature = "alloc")]
pub use controller::{DragGeometry, Editor, PointerEvent, PointerEventKind};
#[cfg(feature = "alloc")]
pub use ticks::{AspectRatioEntry, AspectRatioListCache, build_aspect_ratio_list};
