use glam::DVec2;
use super::*;

#[test]
fn test_from_center_size() {
    let rect = Rect::from_center_size(DVec2::new(10.0, 20.0), DVec2::new(4.0, 6.0));

    assert_eq!(rect.min, DVec2::new(8.0, 17.0));
    assert_eq!(rect.max, DVec2::new(12.0, 23.0));
    assert_eq!(rect.center(), DVec2::new(10.0, 20.0));
    assert_eq!(rect.size(), DVec2::new(4.0, 6.0));
}

#[test]
fn test_from_points_encloses_all() {
    let rect = Rect::from_points([
        DVec2::new(3.0, -1.0),
        DVec2::new(-2.0, 5.0),
        DVec2::new(0.0, 0.0),
    ]);

    assert_eq!(rect.min, DVec2::new(-2.0, -1.0));
    assert_eq!(rect.max, DVec2::new(3.0, 5.0));
}

#[test]
fn test_from_no_points_contains_nothing() {
    let rect = Rect::from_points(std::iter::empty());
    assert!(!rect.contains_point(DVec2::ZERO));
}

#[test]
fn test_contains_point_edges_inclusive() {
    let rect = Rect::new(DVec2::ZERO, DVec2::new(10.0, 10.0));

    assert!(rect.contains_point(DVec2::new(0.0, 10.0)));
    assert!(rect.contains_point(DVec2::new(5.0, 5.0)));
    assert!(!rect.contains_point(DVec2::new(10.1, 5.0)));
    assert!(!rect.contains_point(DVec2::new(5.0, -0.1)));
}

#[test]
fn test_contains_rect() {
    let outer = Rect::new(DVec2::ZERO, DVec2::new(10.0, 10.0));

    assert!(outer.contains_rect(&Rect::new(DVec2::new(1.0, 1.0), DVec2::new(9.0, 9.0))));
    assert!(outer.contains_rect(&outer));
    assert!(!outer.contains_rect(&Rect::new(DVec2::new(5.0, 5.0), DVec2::new(11.0, 9.0))));
}

#[test]
fn test_intersects() {
    let a = Rect::new(DVec2::ZERO, DVec2::new(10.0, 10.0));

    assert!(a.intersects(&Rect::new(DVec2::new(5.0, 5.0), DVec2::new(15.0, 15.0))));
    // Touching edges count
    assert!(a.intersects(&Rect::new(DVec2::new(10.0, 0.0), DVec2::new(20.0, 10.0))));
    assert!(!a.intersects(&Rect::new(DVec2::new(10.5, 0.0), DVec2::new(20.0, 10.0))));
}
