//! Grid overlay and corner handles painted over the page

use eframe::egui;
use pdf_calibrate::{Corner, Point2D, ViewerSession, grid_lines};

/// Radius of a corner handle, in points
const HANDLE_RADIUS: f32 = 7.0;

const CALIBRATION_LINE: egui::Color32 = egui::Color32::from_rgba_premultiplied(150, 20, 20, 170);
const CALIBRATION_EDGE: egui::Color32 = egui::Color32::from_rgb(220, 20, 20);
const DEFAULT_LINE: egui::Color32 = egui::Color32::from_rgba_premultiplied(25, 55, 90, 90);
const HANDLE_FILL: egui::Color32 = egui::Color32::from_rgb(255, 200, 0);

pub fn to_screen(canvas: egui::Rect, point: Point2D) -> egui::Pos2 {
    canvas.min + egui::vec2(point.x, point.y)
}

pub fn to_canvas(canvas: egui::Rect, pos: egui::Pos2) -> Point2D {
    let offset = pos - canvas.min;
    Point2D::new(offset.x, offset.y)
}

pub fn paint_grid(painter: &egui::Painter, canvas: egui::Rect, session: &ViewerSession) {
    let size = Point2D::new(canvas.width(), canvas.height());
    let (quad, spec) = session.overlay_grid(size);
    let calibrating = session.calibration.enabled;

    for line in grid_lines(&quad, spec) {
        let stroke = match (calibrating, line.is_boundary(&spec)) {
            (true, true) => egui::Stroke::new(2.0, CALIBRATION_EDGE),
            (true, false) => egui::Stroke::new(1.0, CALIBRATION_LINE),
            (false, _) => egui::Stroke::new(1.0, DEFAULT_LINE),
        };
        painter.line_segment(
            [to_screen(canvas, line.start), to_screen(canvas, line.end)],
            stroke,
        );
    }
}

/// Handles grab within this distance of a corner, in points
pub const GRAB_RADIUS: f32 = HANDLE_RADIUS * 1.5;

/// The corner a press at `pos` would grab, for hover feedback
pub fn corner_under(canvas: egui::Rect, session: &ViewerSession, pos: egui::Pos2) -> Option<Corner> {
    session
        .calibration
        .quad
        .nearest_corner(to_canvas(canvas, pos), GRAB_RADIUS)
}

/// Paint the four calibration corners, enlarging `highlighted`
pub fn paint_corner_handles(
    painter: &egui::Painter,
    canvas: egui::Rect,
    session: &ViewerSession,
    highlighted: Option<Corner>,
    label_color: egui::Color32,
) {
    for corner in Corner::ALL {
        let center = to_screen(canvas, session.calibration.quad.corner(corner));
        let radius = if highlighted == Some(corner) {
            HANDLE_RADIUS + 2.0
        } else {
            HANDLE_RADIUS
        };
        painter.circle(
            center,
            radius,
            HANDLE_FILL,
            egui::Stroke::new(1.5, egui::Color32::BLACK),
        );
        painter.text(
            center + egui::vec2(HANDLE_RADIUS + 4.0, -HANDLE_RADIUS - 4.0),
            egui::Align2::LEFT_BOTTOM,
            corner.label(),
            egui::FontId::proportional(12.0),
            label_color,
        );
    }
}
