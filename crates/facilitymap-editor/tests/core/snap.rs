use facilitymap_editor::{Point, SnapEngine};
use proptest::prelude::*;

#[test]
fn test_snap_rounds_to_nearest() {
    let snap = SnapEngine::new(10.0);
    assert_eq!(snap.snap(14.0, true), 10.0);
    assert_eq!(snap.snap(15.0, true), 20.0);
    assert_eq!(snap.snap(-14.0, true), -10.0);
    assert_eq!(snap.snap(0.0, true), 0.0);
}

#[test]
fn test_snap_disabled_is_identity() {
    let snap = SnapEngine::new(10.0);
    assert_eq!(snap.snap(14.3, false), 14.3);
    assert_eq!(
        snap.snap_point(Point::new(1.5, -7.25), false),
        Point::new(1.5, -7.25)
    );
}

#[test]
fn test_snap_point_per_axis() {
    let snap = SnapEngine::new(25.0);
    assert_eq!(
        snap.snap_point(Point::new(37.0, 63.0), true),
        Point::new(25.0, 75.0)
    );
}

proptest! {
    #[test]
    fn snap_is_idempotent(v in -1.0e6f64..1.0e6, grid in prop::sample::select(vec![1.0, 5.0, 10.0, 25.0, 50.0])) {
        let snap = SnapEngine::new(grid);
        let once = snap.snap(v, true);
        prop_assert_eq!(snap.snap(once, true), once);
    }

    #[test]
    fn snap_disabled_never_moves(v in prop::num::f64::NORMAL) {
        let snap = SnapEngine::default();
        prop_assert_eq!(snap.snap(v, false), v);
    }

    #[test]
    fn snap_stays_within_half_grid(v in -1.0e6f64..1.0e6) {
        let snap = SnapEngine::new(10.0);
        prop_assert!((snap.snap(v, true) - v).abs() <= 5.0 + 1e-9);
    }
}
