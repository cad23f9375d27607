//! Pointer drags to `object-position` conversion.
//!
//! Two interactions write the same [`ObjectPosition`]:
//!
//! - [`DragMode::Image`] pans the image under a fixed crop window. The pointer
//!   delta is measured against the *slack*, the distance by which the painted
//!   image exceeds the container on each axis. Dragging right shows more of
//!   the left side, so X goes *down*.
//! - [`DragMode::FocalMarker`] moves the cross-hair. The marker's place inside
//!   the container is the position, with no inversion and no anchoring.
//!
//! ```text
//!     container           painted image (cover)
//!     ┌─────────┐    ┌────────────────────────────┐
//!     │         │    │          ┌─────────┐       │
//!     │    +    │ ←─ │          │    +    │       │  slack.x = image.w - container.w
//!     │         │    │          └─────────┘       │
//!     └─────────┘    └────────────────────────────┘
//! ```
//!
//! Overflow mode only changes which image size is measured: the cropped view
//! paints a `cover` fit inside the container box, while the overflow ghost is
//! laid out unclipped and measured as-is.
//!
//! # Example
//!
//! ```
//! use focalcrop::{DragMode, DragSession, ObjectPosition, Point, Rect, Size};
//!
//! // 200×200 container showing a 2:1 image → 200 px of horizontal slack.
//! let session = DragSession::new(
//!     DragMode::Image,
//!     Point::new(100.0, 100.0),
//!     ObjectPosition::CENTER,
//!     Rect::new(0.0, 0.0, 200.0, 200.0),
//!     Size::new(800.0, 400.0),
//!     false,
//! );
//!
//! // Drag 20 px (10% of the slack) to the right.
//! let moved = session.update(Point::new(120.0, 100.0));
//! assert_eq!(moved, Some(ObjectPosition::new(40.0, 50.0)));
//! ```

use num_traits::Float;

use crate::geometry::{Point, Rect, Size, cover_size};
use crate::numeric::to_percentage;
use crate::position::{ObjectPosition, normalize_percentage};

/// Pointer movement (per axis, in CSS pixels) below which a drag is a no-op.
pub const DEFAULT_DRAG_THRESHOLD_PX: f64 = 0.5;

/// Which element the pointer grabbed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DragMode {
    /// The image itself: pan the crop window.
    Image,
    /// The focal-point cross: place the focal point directly.
    FocalMarker,
}

/// One pointer-down → pointer-up gesture.
///
/// Created on pointer-down and dropped on pointer-up or cancel. Never persisted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession {
    pub mode: DragMode,
    /// Pointer location at pointer-down.
    pub start_pointer: Point,
    /// Object position at pointer-down.
    pub start_position: ObjectPosition,
    /// The crop window, in client coordinates.
    pub container: Rect,
    /// Measured image size. In cropped view only its ratio matters.
    pub image: Size,
    /// Whether the unclipped overflow ghost is shown.
    pub overflow: bool,
    /// Dead zone around `start_pointer`, per axis.
    pub threshold_px: f64,
}

impl DragSession {
    /// Start a drag at `start_pointer` with the default dead zone.
    pub fn new(
        mode: DragMode,
        start_pointer: Point,
        start_position: ObjectPosition,
        container: Rect,
        image: Size,
        overflow: bool,
    ) -> Self {
        Self {
            mode,
            start_pointer,
            start_position,
            container,
            image,
            overflow,
            threshold_px: DEFAULT_DRAG_THRESHOLD_PX,
        }
    }

    /// Set the dead zone around the start pointer.
    pub fn threshold(mut self, threshold_px: f64) -> Self {
        self.threshold_px = threshold_px;
        self
    }

    /// Replace container and image geometry, e.g. after a resize mid-drag.
    ///
    /// The start anchor is kept.
    pub fn set_geometry(&mut self, container: Rect, image: Size) {
        self.container = container;
        self.image = image;
    }

    /// Size of the image as painted, which determines the panning slack.
    pub fn rendered_image_size(&self) -> Size {
        if self.overflow {
            self.image
        } else {
            cover_size(self.container.size(), self.image.aspect_ratio())
        }
    }

    /// Object position for the pointer at `pointer`. See [`update_object_position`].
    pub fn update(&self, pointer: Point) -> Option<ObjectPosition> {
        update_object_position(self, pointer)
    }

    fn within_threshold(&self, pointer: Point) -> bool {
        let dx = pointer.x - self.start_pointer.x;
        let dy = pointer.y - self.start_pointer.y;
        Float::abs(dx) <= self.threshold_px && Float::abs(dy) <= self.threshold_px
    }
}

/// Compute the object position for `pointer` during `session`.
///
/// Results are clamped to `[0, 100]` and rounded to two decimals. The start
/// position comes back unchanged when the pointer hasn't left the dead zone.
///
/// Returns `None` when the update must be skipped: a non-finite pointer, or a
/// container or painted image that can't be measured (zero, negative or
/// non-finite size, as seen for a frame while layout runs). Callers keep
/// whatever position they last applied.
pub fn update_object_position(session: &DragSession, pointer: Point) -> Option<ObjectPosition> {
    let start = session.start_position;
    if !pointer.is_finite() || !session.container.is_measurable() {
        return None;
    }
    if session.within_threshold(pointer) {
        return Some(start);
    }

    match session.mode {
        DragMode::Image => {
            let rendered = session.rendered_image_size();
            if !rendered.is_measurable() {
                return None;
            }
            let container = session.container;
            Some(ObjectPosition::from_normalized(
                pan_axis(
                    start.x(),
                    pointer.x - session.start_pointer.x,
                    rendered.width - container.width,
                ),
                pan_axis(
                    start.y(),
                    pointer.y - session.start_pointer.y,
                    rendered.height - container.height,
                ),
            ))
        }
        DragMode::FocalMarker => {
            let container = session.container;
            Some(ObjectPosition::new(
                to_percentage(pointer.x - container.x, container.width),
                to_percentage(pointer.y - container.y, container.height),
            ))
        }
    }
}

/// Pan one axis by `delta` pixels against `slack` pixels of overflow.
fn pan_axis(start: f64, delta: f64, slack: f64) -> f64 {
    // No overflow on this axis: nothing to pan.
    if !slack.is_finite() || slack <= 0.0 {
        return start;
    }
    normalize_percentage(start - to_percentage(delta, slack))
}
