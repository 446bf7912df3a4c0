// Host-side tests for the rounded-rectangle coverage mask.

use glam::Vec2;
use liquid_core::mask::{coverage, rounded_rect_sdf, surface_coverage};

const RES: Vec2 = Vec2::new(200.0, 100.0);
const RADIUS: f32 = 10.0;

#[test]
fn edge_is_half_covered() {
    assert!((surface_coverage(Vec2::new(200.0, 50.0), RES, RADIUS) - 0.5).abs() < 1e-5);
    assert!((surface_coverage(Vec2::new(100.0, 0.0), RES, RADIUS) - 0.5).abs() < 1e-5);
}

#[test]
fn deep_inside_is_opaque_and_far_outside_is_clear() {
    assert_eq!(surface_coverage(Vec2::new(100.0, 50.0), RES, RADIUS), 1.0);
    assert_eq!(surface_coverage(Vec2::new(210.0, 50.0), RES, RADIUS), 0.0);
    // Square corner pixel lies outside the rounded corner.
    assert_eq!(surface_coverage(Vec2::new(0.5, 0.5), RES, RADIUS), 0.0);
}

#[test]
fn coverage_falls_monotonically_across_the_edge() {
    let mut prev = coverage(-3.0);
    let mut d = -3.0;
    while d <= 3.0 {
        let c = coverage(d);
        assert!(c <= prev + 1e-6, "coverage rose at sdf {d}");
        prev = c;
        d += 0.125;
    }
}

#[test]
fn zero_radius_is_a_sharp_rectangle() {
    let half = Vec2::new(50.0, 20.0);
    let corner = rounded_rect_sdf(Vec2::new(50.0, 20.0), half, 0.0);
    assert!(corner.abs() < 1e-5);
}
