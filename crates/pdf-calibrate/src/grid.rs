//! Calibration grid interpolation
//!
//! A grid of `rows × columns` cells is drawn inside an arbitrary quadrilateral
//! by walking both edge pairs in lockstep:
//! - row lines join matching points on the left and right edges
//! - column lines join matching points on the top and bottom edges
//!
//! Lines are produced lazily and never cached; at the largest calibration size
//! that is 74 segments per frame.

use crate::constants::{DEFAULT_OVERLAY_LINES, MAX_GRID_LINES, MIN_GRID_LINES};
use crate::geometry::{Point2D, Quadrilateral, lerp};
use crate::types::GridError;

// =============================================================================
// Grid Size
// =============================================================================

/// Row and column counts of a grid overlay.
///
/// Both counts are at least one, so interpolation never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    rows: u32,
    columns: u32,
}

impl GridSpec {
    /// A grid of any non-zero size
    pub fn new(rows: u32, columns: u32) -> Result<Self, GridError> {
        if rows == 0 || columns == 0 {
            return Err(GridError::ZeroDimension { rows, columns });
        }
        Ok(Self { rows, columns })
    }

    /// A calibration grid, rejecting sizes outside the selector bounds
    pub fn calibration(rows: u32, columns: u32) -> Result<Self, GridError> {
        let range = MIN_GRID_LINES..=MAX_GRID_LINES;
        if !range.contains(&rows) || !range.contains(&columns) {
            return Err(GridError::OutOfRange {
                rows,
                columns,
                min: MIN_GRID_LINES,
                max: MAX_GRID_LINES,
            });
        }
        Ok(Self { rows, columns })
    }

    /// A calibration grid with both counts pulled into the selector bounds
    pub fn calibration_clamped(rows: u32, columns: u32) -> Self {
        Self {
            rows: rows.clamp(MIN_GRID_LINES, MAX_GRID_LINES),
            columns: columns.clamp(MIN_GRID_LINES, MAX_GRID_LINES),
        }
    }

    /// The fixed 6×6 grid shown outside calibration mode
    pub fn overlay_default() -> Self {
        Self {
            rows: DEFAULT_OVERLAY_LINES,
            columns: DEFAULT_OVERLAY_LINES,
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of segments [`grid_lines`] yields for this size
    pub fn segment_count(&self) -> usize {
        to_usize(self.line_total())
    }

    /// Widened so `u32::MAX` rows cannot overflow the count
    fn line_total(&self) -> u64 {
        u64::from(self.rows) + u64::from(self.columns) + 2
    }
}

// =============================================================================
// Line Segments
// =============================================================================

/// Which edge pair a grid line was interpolated between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFamily {
    /// Left edge to right edge (horizontal in an unskewed grid)
    Row,
    /// Top edge to bottom edge (vertical in an unskewed grid)
    Column,
}

/// One drawable grid line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub family: LineFamily,
    /// Position within its family, `0..=rows` or `0..=columns`
    pub index: u32,
    pub start: Point2D,
    pub end: Point2D,
}

impl GridLine {
    /// True for the four lines on the quadrilateral's edges
    pub fn is_boundary(&self, spec: &GridSpec) -> bool {
        let last = match self.family {
            LineFamily::Row => spec.rows,
            LineFamily::Column => spec.columns,
        };
        self.index == 0 || self.index == last
    }
}

/// Lazy iterator over every line of a grid: all rows first, then all columns
#[derive(Debug, Clone)]
pub struct GridLines {
    quad: Quadrilateral,
    spec: GridSpec,
    next: u64,
}

/// Interpolate the grid lines of `spec` inside `quad`.
pub fn grid_lines(quad: &Quadrilateral, spec: GridSpec) -> GridLines {
    GridLines {
        quad: *quad,
        spec,
        next: 0,
    }
}

impl GridLines {
    fn line_at(&self, position: u64) -> GridLine {
        let q = &self.quad;
        let row_lines = u64::from(self.spec.rows) + 1;

        if position < row_lines {
            // Bounded by `rows`, so it fits back into u32
            let index = position as u32;
            let t = index as f32 / self.spec.rows as f32;
            GridLine {
                family: LineFamily::Row,
                index,
                start: lerp(q.top_left, q.bottom_left, t),
                end: lerp(q.top_right, q.bottom_right, t),
            }
        } else {
            let index = (position - row_lines) as u32;
            let t = index as f32 / self.spec.columns as f32;
            GridLine {
                family: LineFamily::Column,
                index,
                start: lerp(q.top_left, q.top_right, t),
                end: lerp(q.bottom_left, q.bottom_right, t),
            }
        }
    }
}

impl Iterator for GridLines {
    type Item = GridLine;

    fn next(&mut self) -> Option<GridLine> {
        if self.next >= self.spec.line_total() {
            return None;
        }
        let line = self.line_at(self.next);
        self.next += 1;
        Some(line)
    }

    fn nth(&mut self, n: usize) -> Option<GridLine> {
        self.next = self
            .next
            .saturating_add(n as u64)
            .min(self.spec.line_total());
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = to_usize(self.spec.line_total().saturating_sub(self.next));
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridLines {}

impl std::iter::FusedIterator for GridLines {}

fn to_usize(count: u64) -> usize {
    usize::try_from(count).unwrap_or(usize::MAX)
}
