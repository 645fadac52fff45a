//! Per-window viewer state
//!
//! Ties the loaded document, page navigation, pan/zoom and the calibration
//! overlay together. All of it is mutated from the UI thread only.

use crate::constants::{DEFAULT_CALIBRATION_COLUMNS, DEFAULT_CALIBRATION_ROWS};
use crate::document::DocumentInfo;
use crate::geometry::{Corner, Point2D, Quadrilateral};
use crate::grid::{GridLines, GridSpec, grid_lines};
use crate::navigation::PageNavigator;
use crate::profile::CalibrationProfile;
use crate::types::*;
use crate::viewport::PanZoomController;

/// Calibration overlay settings
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationState {
    /// Show the draggable quad instead of the fixed default grid
    pub enabled: bool,
    pub quad: Quadrilateral,
    pub grid: GridSpec,
}

impl Default for CalibrationState {
    fn default() -> Self {
        Self {
            enabled: false,
            quad: Quadrilateral::default(),
            grid: GridSpec::calibration_clamped(
                DEFAULT_CALIBRATION_ROWS,
                DEFAULT_CALIBRATION_COLUMNS,
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewerSession {
    document: Option<DocumentInfo>,
    navigator: PageNavigator,
    pan_zoom: PanZoomController,
    /// Corner held by the current canvas drag, if it grabbed one
    dragged_corner: Option<Corner>,
    pub calibration: CalibrationState,
}

impl ViewerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> Option<&DocumentInfo> {
        self.document.as_ref()
    }

    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    pub fn navigator(&self) -> &PageNavigator {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut PageNavigator {
        &mut self.navigator
    }

    pub fn pan_zoom(&self) -> &PanZoomController {
        &self.pan_zoom
    }

    pub fn pan_zoom_mut(&mut self) -> &mut PanZoomController {
        &mut self.pan_zoom
    }

    /// Install the outcome of a load.
    ///
    /// On success the new document replaces the current one, which is
    /// returned so the caller can release it. On failure nothing changes.
    pub fn apply_load(
        &mut self,
        result: std::result::Result<DocumentInfo, LoadError>,
    ) -> std::result::Result<Option<DocumentInfo>, LoadError> {
        let info = result?;
        self.navigator = PageNavigator::new(info.page_count);
        Ok(self.document.replace(info))
    }

    pub fn close(&mut self) -> Option<DocumentInfo> {
        self.navigator = PageNavigator::default();
        self.document.take()
    }

    pub fn set_calibration_enabled(&mut self, enabled: bool) {
        self.calibration.enabled = enabled;
        if !enabled {
            self.dragged_corner = None;
        }
    }

    pub fn set_corner(&mut self, corner: Corner, point: Point2D) {
        self.calibration.quad.set_corner(corner, point);
    }

    /// Start a canvas drag at `point`.
    ///
    /// In calibration mode a press within `grab_radius` of a corner grabs the
    /// closest one; any other press pans the view.
    pub fn pointer_pressed(&mut self, point: Point2D, grab_radius: f32) {
        self.dragged_corner = if self.calibration.enabled {
            self.calibration.quad.nearest_corner(point, grab_radius)
        } else {
            None
        };
        if self.dragged_corner.is_none() {
            self.pan_zoom.drag_start(point);
        }
    }

    pub fn pointer_dragged(&mut self, delta: Point2D) {
        match self.dragged_corner {
            Some(corner) => {
                let moved = self.calibration.quad.corner(corner) + delta;
                self.set_corner(corner, moved);
            }
            None => self.pan_zoom.drag_update(delta),
        }
    }

    pub fn pointer_released(&mut self) {
        self.dragged_corner = None;
        self.pan_zoom.drag_end();
    }

    pub fn dragged_corner(&self) -> Option<Corner> {
        self.dragged_corner
    }

    pub fn reset_corners(&mut self) {
        self.calibration.quad = Quadrilateral::default();
    }

    /// Resize the calibration grid; counts are clamped into the selector bounds
    pub fn set_grid_size(&mut self, rows: u32, columns: u32) {
        self.calibration.grid = GridSpec::calibration_clamped(rows, columns);
    }

    /// Quad and grid size the overlay should draw on a canvas of `canvas_size`
    pub fn overlay_grid(&self, canvas_size: Point2D) -> (Quadrilateral, GridSpec) {
        if self.calibration.enabled {
            (self.calibration.quad, self.calibration.grid)
        } else {
            (
                Quadrilateral::from_rect(Point2D::ZERO, canvas_size),
                GridSpec::overlay_default(),
            )
        }
    }

    pub fn overlay_lines(&self, canvas_size: Point2D) -> GridLines {
        let (quad, spec) = self.overlay_grid(canvas_size);
        grid_lines(&quad, spec)
    }

    pub fn profile(&self) -> CalibrationProfile {
        CalibrationProfile {
            corners: self.calibration.quad,
            rows: self.calibration.grid.rows(),
            columns: self.calibration.grid.columns(),
            zoom: self.pan_zoom.zoom(),
        }
    }

    /// Adopt a saved calibration and switch calibration mode on
    pub fn apply_profile(&mut self, profile: &CalibrationProfile) -> Result<()> {
        let grid = profile.grid()?;
        self.calibration.quad = profile.corners;
        self.calibration.grid = grid;
        self.calibration.enabled = true;
        self.pan_zoom.set_zoom(profile.zoom);
        Ok(())
    }
}
