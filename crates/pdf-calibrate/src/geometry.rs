//! Canvas-space geometry for the calibration overlay
//!
//! The calibration quadrilateral is four freely draggable corners. Nothing
//! constrains their ordering or convexity: a crossed or collapsed quad is a
//! legal state and simply draws an odd-looking grid.

use std::ops::{Add, Mul, Sub};

use crate::constants::{
    DEFAULT_BOTTOM_LEFT, DEFAULT_BOTTOM_RIGHT, DEFAULT_TOP_LEFT, DEFAULT_TOP_RIGHT,
};

/// A position in canvas space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    pub const ZERO: Point2D = Point2D::new(0.0, 0.0);

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(self, other: Point2D) -> f32 {
        (other - self).length()
    }

    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point2D {
    type Output = Point2D;

    fn mul(self, rhs: f32) -> Point2D {
        Point2D::new(self.x * rhs, self.y * rhs)
    }
}

/// Linear interpolation between `a` and `b`.
///
/// Returns `a` at `t = 0` and `b` at `t = 1` exactly; `a + (b - a)` alone can
/// miss `b` by an ulp.
#[inline]
pub fn lerp(a: Point2D, b: Point2D, t: f32) -> Point2D {
    if t == 1.0 {
        return b;
    }
    a + (b - a) * t
}

/// One of the four draggable corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Corner::TopLeft => "Top left",
            Corner::TopRight => "Top right",
            Corner::BottomLeft => "Bottom left",
            Corner::BottomRight => "Bottom right",
        }
    }
}

/// Four user-placed corners mapped onto the visible canvas
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quadrilateral {
    pub top_left: Point2D,
    pub top_right: Point2D,
    pub bottom_left: Point2D,
    pub bottom_right: Point2D,
}

impl Default for Quadrilateral {
    fn default() -> Self {
        Self {
            top_left: DEFAULT_TOP_LEFT,
            top_right: DEFAULT_TOP_RIGHT,
            bottom_left: DEFAULT_BOTTOM_LEFT,
            bottom_right: DEFAULT_BOTTOM_RIGHT,
        }
    }
}

impl Quadrilateral {
    /// Axis-aligned quad spanning `min..max`
    pub fn from_rect(min: Point2D, max: Point2D) -> Self {
        Self {
            top_left: min,
            top_right: Point2D::new(max.x, min.y),
            bottom_left: Point2D::new(min.x, max.y),
            bottom_right: max,
        }
    }

    pub fn corner(&self, which: Corner) -> Point2D {
        match which {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    /// Replace one corner. No clamping, snapping or spacing rules apply.
    pub fn set_corner(&mut self, which: Corner, point: Point2D) {
        let slot = match which {
            Corner::TopLeft => &mut self.top_left,
            Corner::TopRight => &mut self.top_right,
            Corner::BottomLeft => &mut self.bottom_left,
            Corner::BottomRight => &mut self.bottom_right,
        };
        *slot = point;
    }

    /// The corner closest to `point`, if any lies within `radius`
    pub fn nearest_corner(&self, point: Point2D, radius: f32) -> Option<Corner> {
        Corner::ALL
            .into_iter()
            .map(|corner| (corner, self.corner(corner).distance_to(point)))
            .filter(|(_, distance)| *distance <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(corner, _)| corner)
    }

    pub fn is_finite(&self) -> bool {
        Corner::ALL.into_iter().all(|c| self.corner(c).is_finite())
    }
}
