//! Transform state for the document preview surface.
//!
//! ARCHITECTURE
//! ============
//! `PreviewTransform` is the single writer of the pan offset and zoom factor.
//! Every mutation is synchronous; the host re-reads [`PreviewTransform::css_transform`]
//! and [`PreviewTransform::css_transition`] after each call and applies them
//! to the surface element in the same event turn.
//!
//! Drag math works in viewport coordinates. At drag start the pointer's
//! offset from the surface's current visual position is recorded as the
//! drag anchor; during the drag the new offset is
//! `pointer - anchor - surface_origin`, so the point under the cursor stays
//! under the cursor.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SCALE, MAX_SCALE, MIN_SCALE, TRANSITION, ZOOM_STEP};
use crate::input::{Modifiers, Point, WheelDelta};

/// Pan offset (CSS pixels) and zoom factor of the preview surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformState {
    pub offset_x: f64,
    pub offset_y: f64,
    pub scale: f64,
}

impl Default for TransformState {
    fn default() -> Self {
        Self { offset_x: 0.0, offset_y: 0.0, scale: DEFAULT_SCALE }
    }
}

impl TransformState {
    /// Current pan offset as a point.
    #[must_use]
    pub fn offset(&self) -> Point {
        Point::new(self.offset_x, self.offset_y)
    }
}

/// Token for an active drag, carrying the recorded drag anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragHandle {
    /// Pointer position relative to the surface's visual position at drag start.
    pub anchor: Point,
}

/// Result of feeding a wheel event to the transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// The modifier gate was not held; the host lets the page scroll.
    Ignored,
    /// The wheel changed the zoom; the host must suppress page scroll.
    Zoomed,
}

/// Pan/zoom engine for one mounted preview surface.
#[derive(Debug, Clone, Default)]
pub struct PreviewTransform {
    state: TransformState,
    drag: Option<DragHandle>,
}

impl PreviewTransform {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current transform values.
    #[must_use]
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    // --- Drag ---

    /// Start a drag at `pointer`.
    ///
    /// `surface_origin` is the top-left of the surface container in viewport
    /// space, or `None` when the surface is not mounted yet. In that case the
    /// call does nothing and returns `None`.
    pub fn begin_drag(&mut self, pointer: Point, surface_origin: Option<Point>) -> Option<DragHandle> {
        let origin = surface_origin?;
        let handle = DragHandle { anchor: pointer - (self.state.offset() + origin) };
        self.drag = Some(handle);
        Some(handle)
    }

    /// Move the surface so it tracks `pointer`. No-op without an active drag.
    pub fn update_drag(&mut self, pointer: Point, surface_origin: Option<Point>) {
        let (Some(handle), Some(origin)) = (self.drag, surface_origin) else {
            return;
        };
        let offset = pointer - handle.anchor - origin;
        self.state.offset_x = offset.x;
        self.state.offset_y = offset.y;
    }

    /// Finish the active drag, if any. Returns whether a drag was active.
    pub fn end_drag(&mut self) -> bool {
        self.drag.take().is_some()
    }

    // --- Zoom ---

    /// Add `delta` to the zoom factor, clamped to `[MIN_SCALE, MAX_SCALE]`.
    /// Non-finite deltas are ignored.
    pub fn zoom(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.state.scale = (self.state.scale + delta).clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn zoom_in(&mut self) {
        self.zoom(ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom(-ZOOM_STEP);
    }

    /// Restore the default zoom factor. The pan offset is left where it is.
    pub fn reset(&mut self) {
        self.state.scale = DEFAULT_SCALE;
    }

    /// Zoom by one step per wheel event while Ctrl is held.
    ///
    /// Scrolling down (`dy > 0`) zooms out; anything else zooms in.
    pub fn on_wheel(&mut self, delta: WheelDelta, modifiers: Modifiers) -> WheelOutcome {
        if !modifiers.ctrl {
            return WheelOutcome::Ignored;
        }
        if delta.dy > 0.0 {
            self.zoom_out();
        } else {
            self.zoom_in();
        }
        WheelOutcome::Zoomed
    }

    // --- Presentation ---

    /// CSS `transform` value for the surface.
    #[must_use]
    pub fn css_transform(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) scale({:.3})",
            self.state.offset_x, self.state.offset_y, self.state.scale
        )
    }

    /// CSS `transition` value: none while dragging so the surface tracks the
    /// pointer exactly.
    #[must_use]
    pub fn css_transition(&self) -> &'static str {
        if self.is_dragging() { "none" } else { TRANSITION }
    }

    /// CSS cursor for the surface container.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        if self.is_dragging() { "grabbing" } else { "grab" }
    }

    /// Zoom factor as a whole percentage for the toolbar readout.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn zoom_percent(&self) -> u32 {
        (self.state.scale * 100.0).round() as u32
    }
}
