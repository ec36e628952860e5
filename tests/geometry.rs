use egui::{Pos2, Vec2};
use ink_notes::geometry::{self, Bounds};

#[test]
fn test_point_in_rectangle() {
    let bounds = Bounds::new(10.0, 10.0, 50.0, 30.0);
    assert!(geometry::point_in_rectangle(Pos2::new(30.0, 20.0), &bounds));
    assert!(!geometry::point_in_rectangle(Pos2::new(100.0, 100.0), &bounds));

    // Edges count as inside
    assert!(geometry::point_in_rectangle(Pos2::new(60.0, 40.0), &bounds));
}

#[test]
fn test_point_in_rectangle_negative_extent() {
    // Dragged right to left: anchor on the right edge
    let bounds = Bounds::new(60.0, 10.0, -50.0, 30.0);
    assert!(geometry::point_in_rectangle(Pos2::new(30.0, 20.0), &bounds));
    assert!(!geometry::point_in_rectangle(Pos2::new(65.0, 20.0), &bounds));

    let flipped = Bounds::new(60.0, 40.0, -50.0, -30.0);
    assert!(geometry::point_in_rectangle(Pos2::new(30.0, 20.0), &flipped));
}

#[test]
fn test_point_near_segment_is_strict() {
    let a = Pos2::new(0.0, 0.0);
    let b = Pos2::new(10.0, 0.0);

    assert!(geometry::point_near_segment(Pos2::new(5.0, 0.0), a, b, 10.0));
    assert!(geometry::point_near_segment(Pos2::new(5.0, 9.9), a, b, 10.0));
    assert!(!geometry::point_near_segment(Pos2::new(5.0, 10.0), a, b, 10.0));
    assert!(!geometry::point_near_segment(Pos2::new(5.0, 11.0), a, b, 10.0));
}

#[test]
fn test_point_in_stroke() {
    let points = [Pos2::new(0.0, 0.0), Pos2::new(10.0, 0.0), Pos2::new(10.0, 10.0)];
    assert!(geometry::point_in_stroke(Pos2::new(5.0, 0.0), &points, 10.0));
    assert!(geometry::point_in_stroke(Pos2::new(12.0, 8.0), &points, 10.0));
    assert!(!geometry::point_in_stroke(Pos2::new(5.0, 11.0), &points, 10.0));

    // A single point has no segments to hit
    assert!(!geometry::point_in_stroke(Pos2::new(0.0, 0.0), &points[..1], 10.0));
}

#[test]
fn test_point_in_ellipse() {
    let bounds = Bounds::new(0.0, 0.0, 100.0, 50.0);
    assert!(geometry::point_in_ellipse(Pos2::new(50.0, 25.0), &bounds));
    assert!(geometry::point_in_ellipse(Pos2::new(100.0, 25.0), &bounds));
    assert!(geometry::point_in_ellipse(Pos2::new(50.0, 0.0), &bounds));

    // Inside the bounding box but outside the curve
    assert!(!geometry::point_in_ellipse(Pos2::new(2.0, 2.0), &bounds));

    let negative = Bounds::new(100.0, 50.0, -100.0, -50.0);
    assert!(geometry::point_in_ellipse(Pos2::new(50.0, 25.0), &negative));

    let flat = Bounds::new(0.0, 0.0, 100.0, 0.0);
    assert!(!geometry::point_in_ellipse(Pos2::new(50.0, 0.0), &flat));
}

#[test]
fn test_handle_region() {
    let corner = Pos2::new(60.0, 40.0);
    assert!(geometry::is_point_near_handle(Pos2::new(60.0, 40.0), corner, 20.0));
    assert!(geometry::is_point_near_handle(Pos2::new(45.0, 55.0), corner, 20.0));
    assert!(!geometry::is_point_near_handle(Pos2::new(80.0, 40.0), corner, 20.0));
}

#[test]
fn test_bounds_helpers() {
    let mut bounds = Bounds::at(Pos2::new(10.0, 10.0));
    assert!(bounds.has_zero_area());

    bounds.extend_to(Pos2::new(0.0, 30.0));
    assert_eq!(bounds.width, -10.0);
    assert_eq!(bounds.height, 20.0);
    assert!(!bounds.has_zero_area());

    let rect = bounds.to_rect();
    assert_eq!(rect.min, Pos2::new(0.0, 10.0));
    assert_eq!(rect.max, Pos2::new(10.0, 30.0));

    bounds.translate(Vec2::new(5.0, -5.0));
    assert_eq!(bounds.anchor(), Pos2::new(15.0, 5.0));
    assert_eq!(bounds.corner(), Pos2::new(5.0, 25.0));
}

#[test]
fn test_distance() {
    assert_eq!(geometry::distance(Pos2::new(0.0, 0.0), Pos2::new(3.0, 4.0)), 5.0);
    assert_eq!(geometry::distance(Pos2::new(2.0, 2.0), Pos2::new(2.0, 2.0)), 0.0);
}
