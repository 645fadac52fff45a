//! Pan/zoom state and the controller that feeds it into a renderer
//!
//! Drag deltas arrive in screen space with `y` growing downward. The visible
//! region's origin moves against the pointer on both axes, so the page follows
//! the cursor while dragging.

use crate::constants::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use crate::geometry::Point2D;

/// The renderer-side controls the controller drives
pub trait RenderViewport {
    /// Set the page scale factor (1.0 = one PDF point per logical pixel)
    fn set_scale(&mut self, factor: f32);

    /// Set the top-left of the visible region, in scaled page space
    fn set_origin(&mut self, origin: Point2D);
}

/// Zoom and scroll position of the document view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub zoom: f32,
    pub offset: Point2D,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            offset: Point2D::ZERO,
        }
    }
}

/// Clamp a zoom factor into the supported range
#[inline]
pub fn clamp_zoom(zoom: f32) -> f32 {
    if zoom.is_nan() {
        return DEFAULT_ZOOM;
    }
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Translates pointer drags and zoom controls into [`ViewportState`] updates
#[derive(Debug, Clone, Default)]
pub struct PanZoomController {
    state: ViewportState,
    drag_origin: Option<Point2D>,
}

impl PanZoomController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn zoom(&self) -> f32 {
        self.state.zoom
    }

    pub fn offset(&self) -> Point2D {
        self.state.offset
    }

    /// Where the current drag gesture began, if one is in progress
    pub fn drag_origin(&self) -> Option<Point2D> {
        self.drag_origin
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    pub fn drag_start(&mut self, pointer: Point2D) {
        self.drag_origin = Some(pointer);
    }

    /// Apply one drag-continuation delta.
    ///
    /// Ignored when no gesture is in progress.
    pub fn drag_update(&mut self, delta: Point2D) {
        if self.drag_origin.is_none() {
            return;
        }
        self.state.offset.x -= delta.x;
        self.state.offset.y -= delta.y;
    }

    pub fn drag_end(&mut self) {
        self.drag_origin = None;
    }

    /// Slider input: take the value as the new zoom, clamped
    pub fn set_zoom(&mut self, value: f32) {
        self.state.zoom = clamp_zoom(value);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.state.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.state.zoom - ZOOM_STEP);
    }

    pub fn can_zoom_in(&self) -> bool {
        self.state.zoom < MAX_ZOOM
    }

    pub fn can_zoom_out(&self) -> bool {
        self.state.zoom > MIN_ZOOM
    }

    /// Back to 100% with the page at the canvas origin
    pub fn reset(&mut self) {
        self.state = ViewportState::default();
        self.drag_origin = None;
    }

    /// Push the current scale and origin into the renderer
    pub fn apply<V: RenderViewport + ?Sized>(&self, viewport: &mut V) {
        viewport.set_scale(self.state.zoom);
        viewport.set_origin(self.state.offset);
    }

    /// Re-apply geometry once a newly assigned document has finished loading.
    ///
    /// The renderer resets its own scale when it receives a document, so this
    /// must run after that reset, not alongside the assignment.
    pub fn on_document_ready<V: RenderViewport + ?Sized>(&mut self, viewport: &mut V) {
        self.drag_origin = None;
        self.apply(viewport);
    }
}
