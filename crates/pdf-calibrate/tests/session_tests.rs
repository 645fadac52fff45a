use pdf_calibrate::*;
use std::path::PathBuf;

fn info(name: &str, page_count: usize) -> DocumentInfo {
    DocumentInfo {
        path: PathBuf::from(name),
        page_count,
    }
}

#[test]
fn test_new_session_has_no_document() {
    let session = ViewerSession::new();
    assert!(!session.has_document());
    assert!(!session.calibration.enabled);
    assert_eq!(session.calibration.quad, Quadrilateral::default());
    assert_eq!(session.navigator().total(), 0);
}

#[test]
fn test_failed_load_keeps_previous_document() {
    let mut session = ViewerSession::new();
    session.apply_load(Ok(info("pattern.pdf", 4))).unwrap();
    session.navigator_mut().next();

    let failure = LoadError::NotAPdf {
        path: PathBuf::from("notes.txt"),
        reason: "missing %PDF- header".to_string(),
    };
    let err = session.apply_load(Err(failure)).unwrap_err();
    assert_eq!(err.kind(), LoadFailureKind::LoadFailed);

    assert_eq!(session.document(), Some(&info("pattern.pdf", 4)));
    assert_eq!(session.navigator().current(), 1);
}

#[test]
fn test_successful_load_replaces_and_resets_navigation() {
    let mut session = ViewerSession::new();
    assert_eq!(session.apply_load(Ok(info("a.pdf", 3))).unwrap(), None);
    session.navigator_mut().next();

    let replaced = session.apply_load(Ok(info("b.pdf", 9))).unwrap();
    assert_eq!(replaced, Some(info("a.pdf", 3)));
    assert_eq!(session.navigator().current(), 0);
    assert_eq!(session.navigator().total(), 9);
}

#[test]
fn test_close() {
    let mut session = ViewerSession::new();
    session.apply_load(Ok(info("a.pdf", 3))).unwrap();
    assert_eq!(session.close(), Some(info("a.pdf", 3)));
    assert!(!session.has_document());
    assert_eq!(session.navigator().total(), 0);
}

#[test]
fn test_overlay_without_calibration_spans_canvas() {
    let session = ViewerSession::new();
    let canvas = Point2D::new(900.0, 600.0);
    let (quad, spec) = session.overlay_grid(canvas);
    assert_eq!(quad, Quadrilateral::from_rect(Point2D::ZERO, canvas));
    assert_eq!(spec, GridSpec::overlay_default());
    assert_eq!(session.overlay_lines(canvas).len(), 14);
}

#[test]
fn test_overlay_in_calibration_mode_follows_corners() {
    let mut session = ViewerSession::new();
    session.set_calibration_enabled(true);
    session.set_grid_size(12, 12);
    session.set_corner(Corner::TopLeft, Point2D::new(10.0, 10.0));

    let lines: Vec<GridLine> = session.overlay_lines(Point2D::new(900.0, 600.0)).collect();
    assert_eq!(lines.len(), 26);
    assert_eq!(lines[0].start, Point2D::new(10.0, 10.0));
    assert_eq!(lines[0].end, Point2D::new(600.0, 200.0));
}

#[test]
fn test_grid_size_is_clamped() {
    let mut session = ViewerSession::new();
    session.set_grid_size(1, 99);
    assert_eq!(session.calibration.grid.rows(), 12);
    assert_eq!(session.calibration.grid.columns(), 36);
}

#[test]
fn test_reset_corners() {
    let mut session = ViewerSession::new();
    session.set_corner(Corner::BottomLeft, Point2D::new(1.0, 2.0));
    session.reset_corners();
    assert_eq!(session.calibration.quad, Quadrilateral::default());
}

#[test]
fn test_profile_round_trip_through_session() {
    let mut session = ViewerSession::new();
    session.set_grid_size(30, 14);
    session.set_corner(Corner::TopRight, Point2D::new(640.0, 180.0));
    session.pan_zoom_mut().set_zoom(1.5);
    let profile = session.profile();

    let mut other = ViewerSession::new();
    other.apply_profile(&profile).unwrap();
    assert!(other.calibration.enabled);
    assert_eq!(other.calibration.quad, session.calibration.quad);
    assert_eq!(other.calibration.grid, session.calibration.grid);
    assert_eq!(other.pan_zoom().zoom(), 1.5);
}

#[test]
fn test_invalid_profile_leaves_session_untouched() {
    let mut session = ViewerSession::new();
    let profile = CalibrationProfile {
        rows: 0,
        ..CalibrationProfile::default()
    };
    assert!(matches!(
        session.apply_profile(&profile),
        Err(CalibrateError::Grid(GridError::OutOfRange { .. }))
    ));
    assert!(!session.calibration.enabled);
}

#[test]
fn test_drag_grabs_closest_of_overlapping_corners() {
    let mut session = ViewerSession::new();
    session.set_calibration_enabled(true);
    session.set_corner(Corner::TopLeft, Point2D::new(300.0, 300.0));
    session.set_corner(Corner::BottomRight, Point2D::new(306.0, 300.0));

    session.pointer_pressed(Point2D::new(301.0, 300.0), 10.5);
    assert_eq!(session.dragged_corner(), Some(Corner::TopLeft));

    session.pointer_dragged(Point2D::new(10.0, 5.0));
    session.pointer_dragged(Point2D::new(-2.0, 1.0));
    assert_eq!(session.calibration.quad.top_left, Point2D::new(308.0, 306.0));
    assert_eq!(
        session.calibration.quad.bottom_right,
        Point2D::new(306.0, 300.0)
    );
    assert_eq!(session.pan_zoom().offset(), Point2D::ZERO);
    assert!(!session.pan_zoom().is_dragging());

    session.pointer_released();
    assert_eq!(session.dragged_corner(), None);
}

#[test]
fn test_drag_away_from_corners_pans() {
    let mut session = ViewerSession::new();
    session.set_calibration_enabled(true);

    session.pointer_pressed(Point2D::new(400.0, 450.0), 10.5);
    assert_eq!(session.dragged_corner(), None);
    assert!(session.pan_zoom().is_dragging());

    session.pointer_dragged(Point2D::new(4.0, 6.0));
    session.pointer_released();

    assert_eq!(session.pan_zoom().offset(), Point2D::new(-4.0, -6.0));
    assert_eq!(session.calibration.quad, Quadrilateral::default());
    assert!(!session.pan_zoom().is_dragging());
}

#[test]
fn test_corners_are_not_grabbed_outside_calibration_mode() {
    let mut session = ViewerSession::new();

    session.pointer_pressed(DEFAULT_TOP_LEFT, 10.5);
    assert_eq!(session.dragged_corner(), None);

    session.pointer_dragged(Point2D::new(20.0, 0.0));
    session.pointer_released();

    assert_eq!(session.calibration.quad.top_left, DEFAULT_TOP_LEFT);
    assert_eq!(session.pan_zoom().offset(), Point2D::new(-20.0, 0.0));
}
