//! Shared constants for PDF calibration
//!
//! Bounds and defaults used by the grid overlay and the pan/zoom controller.

use crate::geometry::Point2D;

// =============================================================================
// Zoom
// =============================================================================

/// Smallest zoom factor the viewport accepts
pub const MIN_ZOOM: f32 = 0.25;

/// Largest zoom factor the viewport accepts
pub const MAX_ZOOM: f32 = 5.0;

/// Zoom change applied by a single zoom-in / zoom-out press
pub const ZOOM_STEP: f32 = 0.1;

/// Zoom factor of a freshly created viewport
pub const DEFAULT_ZOOM: f32 = 1.0;

// =============================================================================
// Grid
// =============================================================================

/// Fewest rows or columns the calibration grid may have
pub const MIN_GRID_LINES: u32 = 12;

/// Most rows or columns the calibration grid may have
pub const MAX_GRID_LINES: u32 = 36;

/// Calibration grid rows on session creation
pub const DEFAULT_CALIBRATION_ROWS: u32 = 24;

/// Calibration grid columns on session creation
pub const DEFAULT_CALIBRATION_COLUMNS: u32 = 18;

/// Rows and columns of the fixed overlay shown outside calibration mode
pub const DEFAULT_OVERLAY_LINES: u32 = 6;

// =============================================================================
// Default Corners (canvas space)
// =============================================================================

pub const DEFAULT_TOP_LEFT: Point2D = Point2D::new(200.0, 200.0);
pub const DEFAULT_TOP_RIGHT: Point2D = Point2D::new(600.0, 200.0);
pub const DEFAULT_BOTTOM_LEFT: Point2D = Point2D::new(200.0, 700.0);
pub const DEFAULT_BOTTOM_RIGHT: Point2D = Point2D::new(600.0, 700.0);
