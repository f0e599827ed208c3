use facilitymap_editor::{CoordinateTransform, Point};
use proptest::prelude::*;

#[test]
fn test_render_dimensions() {
    let t = CoordinateTransform::new(0.0, 1000.0, 0.0, 600.0, 2.0);
    assert_eq!(t.render_width(), 2000.0);
    assert_eq!(t.render_height(), 1200.0);
}

#[test]
fn test_y_axis_is_flipped() {
    let t = CoordinateTransform::new(0.0, 1000.0, 0.0, 600.0, 2.0);
    // North-west corner of the survey is the render origin.
    assert_eq!(t.to_render_space(Point::new(0.0, 600.0)), Point::new(0.0, 0.0));
    assert_eq!(
        t.to_render_space(Point::new(0.0, 0.0)),
        Point::new(0.0, 1200.0)
    );
    assert_eq!(
        t.to_render_space(Point::new(250.0, 100.0)),
        Point::new(500.0, 1000.0)
    );
}

#[test]
fn test_offset_bounds() {
    let t = CoordinateTransform::new(-50.0, 50.0, 10.0, 20.0, 1.0);
    assert_eq!(t.to_render_space(Point::new(-50.0, 20.0)), Point::new(0.0, 0.0));
    assert_eq!(t.from_render_space(Point::new(100.0, 10.0)), Point::new(50.0, 10.0));
}

#[test]
fn test_points_outside_bounds_are_not_clamped() {
    let t = CoordinateTransform::default();
    let r = t.to_render_space(Point::new(-10.0, 700.0));
    assert_eq!(r, Point::new(-20.0, -200.0));
}

#[test]
fn test_render_length_to_physical() {
    let t = CoordinateTransform::default();
    assert_eq!(t.render_length_to_physical(12.0), 6.0);
}

proptest! {
    #[test]
    fn transform_round_trips(
        x in -1000.0f64..2000.0,
        y in -1000.0f64..2000.0,
        scale in 0.1f64..20.0,
    ) {
        let t = CoordinateTransform::new(0.0, 1000.0, 0.0, 600.0, scale);
        let back = t.from_render_space(t.to_render_space(Point::new(x, y)));
        prop_assert!((back.x - x).abs() < 1e-6);
        prop_assert!((back.y - y).abs() < 1e-6);
    }
}
