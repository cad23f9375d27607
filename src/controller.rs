//! Binding layer between host events and the pure geometry.
//!
//! [`Editor`] owns the one mutable, short-lived thing in the system: the
//! optional [`DragSession`]. Everything else is derived from
//! [`EditorGeometryState`] through [`reduce`].
//!
//! # Example
//!
//! ```
//! use focalcrop::{
//!     DragGeometry, Editor, ObjectPosition, Point, PointerEvent, PointerTarget, Rect, Size,
//! };
//!
//! let mut editor = Editor::default();
//! editor.image_loaded(2.0).unwrap();
//!
//! let geometry = DragGeometry {
//!     container: Rect::new(0.0, 0.0, 200.0, 200.0),
//!     image: Size::new(400.0, 200.0),
//! };
//! let down = PointerEvent::down(Point::new(100.0, 100.0), PointerTarget::Image);
//! editor.handle_pointer(down, geometry);
//! editor.handle_pointer(PointerEvent::moved(Point::new(120.0, 100.0)), geometry);
//! editor.handle_pointer(PointerEvent::up(Point::new(120.0, 100.0)), geometry);
//!
//! assert_eq!(editor.object_position(), Some(ObjectPosition::new(40.0, 50.0)));
//! assert!(!editor.is_dragging());
//! ```

use alloc::sync::Arc;

use tracing::{debug, trace, warn};

use crate::drag::DragSession;
use crate::editor::{
    EditorAction, EditorConfig, EditorGeometryState, GeometryError, Modifiers, PointerTarget,
    is_valid_aspect_ratio, reduce, shortcut_action,
};
use crate::geometry::{Point, Rect, Size};
use crate::position::ObjectPosition;
use crate::scale::{LogScale, SliderKey};
use crate::ticks::{AspectRatioEntry, AspectRatioListCache};

/// Pointer event phase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer event from the host.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Client coordinates.
    pub position: Point,
    /// Element under the pointer. Only consulted on [`PointerEventKind::Down`].
    pub target: PointerTarget,
}

impl PointerEvent {
    /// Pointer-down on `target`.
    pub fn down(position: Point, target: PointerTarget) -> Self {
        Self {
            kind: PointerEventKind::Down,
            position,
            target,
        }
    }

    /// Pointer-move.
    pub fn moved(position: Point) -> Self {
        Self {
            kind: PointerEventKind::Move,
            position,
            target: PointerTarget::Other,
        }
    }

    /// Pointer-up.
    pub fn up(position: Point) -> Self {
        Self {
            kind: PointerEventKind::Up,
            position,
            target: PointerTarget::Other,
        }
    }

    /// Pointer-cancel.
    pub fn cancel(position: Point) -> Self {
        Self {
            kind: PointerEventKind::Cancel,
            position,
            target: PointerTarget::Other,
        }
    }
}

/// Layout measured by the host: the crop window and the image element.
///
/// In the cropped view `image` may be the natural pixel size (only its ratio
/// is used); in overflow view it must be the ghost's rendered box.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragGeometry {
    pub container: Rect,
    pub image: Size,
}

/// One editor instance: the state for the loaded image plus the live drag.
#[derive(Debug, Default)]
pub struct Editor {
    config: EditorConfig,
    state: Option<EditorGeometryState>,
    drag: Option<DragSession>,
    ticks: AspectRatioListCache,
}

impl Editor {
    /// Create an editor with no image loaded.
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration.
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// State of the loaded image, if any.
    pub fn state(&self) -> Option<&EditorGeometryState> {
        self.state.as_ref()
    }

    /// Current object position, if an image is loaded.
    pub fn object_position(&self) -> Option<ObjectPosition> {
        self.state.map(|s| s.object_position)
    }

    /// Current crop aspect ratio, if an image is loaded.
    pub fn aspect_ratio(&self) -> Option<f64> {
        self.state.map(|s| s.aspect_ratio)
    }

    /// Whether a drag session is open.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// The open drag session, if any.
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// An image finished decoding.
    ///
    /// Seeds (or reseeds) the state and drops any drag on the previous image.
    pub fn image_loaded(&mut self, natural_aspect_ratio: f64) -> Result<(), GeometryError> {
        if !is_valid_aspect_ratio(natural_aspect_ratio) {
            warn!(natural_aspect_ratio, "rejecting image with unusable aspect ratio");
            return Err(GeometryError::InvalidAspectRatio);
        }
        self.drag = None;
        self.state = Some(match self.state {
            Some(state) => reduce(state, EditorAction::ImageLoaded(natural_aspect_ratio)),
            None => EditorGeometryState::new(natural_aspect_ratio),
        });
        debug!(natural_aspect_ratio, "image loaded");
        Ok(())
    }

    /// The image was replaced or removed: discard its state.
    pub fn image_removed(&mut self) {
        self.drag = None;
        self.state = None;
        debug!("image removed");
    }

    /// Apply `action` to the loaded image. Returns `false` when no image is loaded.
    pub fn dispatch(&mut self, action: EditorAction) -> bool {
        let Some(state) = self.state else {
            return false;
        };
        self.state = Some(reduce(state, action));
        true
    }

    /// Tick list for the slider. The same `Arc` comes back until the image changes.
    pub fn aspect_ratio_list(&mut self) -> Arc<[AspectRatioEntry]> {
        self.ticks.get(self.state.map(|s| s.natural_aspect_ratio))
    }

    /// Feed one pointer event. Returns the new object position when it changed.
    ///
    /// `geometry` is read at pointer-down and refreshed on every move, so a
    /// container that resizes mid-drag is tracked.
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        geometry: DragGeometry,
    ) -> Option<ObjectPosition> {
        match event.kind {
            PointerEventKind::Down => {
                self.begin_drag(event.position, event.target, geometry);
                None
            }
            PointerEventKind::Move => self.drag_to(event.position, geometry),
            PointerEventKind::Up => {
                self.end_drag();
                None
            }
            PointerEventKind::Cancel => {
                self.cancel_drag();
                None
            }
        }
    }

    /// Open a drag session. Returns `false` if one is already open, no image
    /// is loaded, or `target` doesn't start a drag.
    pub fn begin_drag(
        &mut self,
        pointer: Point,
        target: PointerTarget,
        geometry: DragGeometry,
    ) -> bool {
        if self.drag.is_some() {
            trace!("pointer-down ignored: drag already in progress");
            return false;
        }
        let Some(state) = self.state else {
            return false;
        };
        let Some(mode) = state.drag_mode(target) else {
            return false;
        };
        self.drag = Some(
            DragSession::new(
                mode,
                pointer,
                state.object_position,
                geometry.container,
                geometry.image,
                state.show_overflow,
            )
            .threshold(self.config.drag_threshold_px),
        );
        debug!(?mode, overflow = state.show_overflow, "drag started");
        true
    }

    /// Apply the open drag for `pointer`. Returns the new position, or `None`
    /// when no drag is open or the move was skipped.
    ///
    /// A move over unmeasurable geometry (e.g. a zero-size frame mid-layout)
    /// leaves the state alone; the session stays open for the next move.
    pub fn drag_to(&mut self, pointer: Point, geometry: DragGeometry) -> Option<ObjectPosition> {
        let session = self.drag.as_mut()?;
        session.set_geometry(geometry.container, geometry.image);
        let Some(position) = session.update(pointer) else {
            trace!(?pointer, "drag move skipped: geometry not measurable");
            return None;
        };
        trace!(%position, "drag moved");
        self.dispatch(EditorAction::SetObjectPosition(position));
        Some(position)
    }

    /// Pointer released: the last applied position stands.
    pub fn end_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            debug!(mode = ?session.mode, "drag ended");
        }
    }

    /// Pointer cancelled: same as release, nothing further is applied.
    pub fn cancel_drag(&mut self) {
        if let Some(session) = self.drag.take() {
            debug!(mode = ?session.mode, "drag cancelled");
        }
    }

    /// Arrow keys on the slider: step the aspect ratio along the tick list's log scale.
    ///
    /// Returns the new ratio, or `None` when no image is loaded.
    pub fn handle_slider_key(&mut self, key: SliderKey) -> Option<f64> {
        let current = self.state?.aspect_ratio;
        let list = self.aspect_ratio_list();
        let scale = LogScale::from_entries(&list)?;
        let ratio = scale.step_key(current, key, self.config.slider_step);
        self.dispatch(EditorAction::SetAspectRatio(ratio));
        Some(ratio)
    }

    /// Single-key shortcuts. Returns the action applied, if any.
    pub fn handle_shortcut(&mut self, key: char, modifiers: Modifiers) -> Option<EditorAction> {
        let action = shortcut_action(key, modifiers)?;
        self.dispatch(action).then_some(action)
    }
}
