//! Rounded-rectangle clip expressed as a signed distance, so cards and sheets
//! get antialiased corners without a geometric clip path.

use glam::Vec2;

use crate::constants::MASK_FEATHER_PX;

/// Hermite smoothstep that also accepts `edge0 > edge1` (inverted ramp).
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Signed distance from `p` (relative to the rectangle centre) to a rounded
/// rectangle with `half_size` extents and corner `radius`.
#[inline]
pub fn rounded_rect_sdf(p: Vec2, half_size: Vec2, radius: f32) -> f32 {
    let q = p.abs() - (half_size - Vec2::splat(radius));
    q.max(Vec2::ZERO).length() + q.x.max(q.y).min(0.0) - radius
}

/// Antialiased coverage: 1 inside, 0 outside, 0.5 on the edge, over a
/// two-pixel band.
#[inline]
pub fn coverage(sdf: f32) -> f32 {
    smoothstep(MASK_FEATHER_PX, -MASK_FEATHER_PX, sdf)
}

/// Coverage of pixel `frag_coord` for a surface of `resolution` whose corner
/// radius is `radius`.
#[inline]
pub fn surface_coverage(frag_coord: Vec2, resolution: Vec2, radius: f32) -> f32 {
    let half = resolution * 0.5;
    coverage(rounded_rect_sdf(frag_coord - half, half, radius))
}

/// Coverage of a border `width` pixels wide centred on the edge, so half of
/// it lies outside the surface.
pub fn stroke_coverage(frag_coord: Vec2, resolution: Vec2, radius: f32, width: f32) -> f32 {
    let half = resolution * 0.5;
    let sdf = rounded_rect_sdf(frag_coord - half, half, radius);
    coverage(sdf.abs() - width * 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sdf_is_zero_on_straight_edges() {
        let half = Vec2::new(100.0, 50.0);
        assert!(rounded_rect_sdf(Vec2::new(100.0, 0.0), half, 10.0).abs() < 1e-5);
        assert!(rounded_rect_sdf(Vec2::new(0.0, -50.0), half, 10.0).abs() < 1e-5);
    }

    #[test]
    fn sdf_is_negative_inside_and_positive_outside() {
        let half = Vec2::new(100.0, 50.0);
        assert!(rounded_rect_sdf(Vec2::ZERO, half, 10.0) < 0.0);
        assert!(rounded_rect_sdf(Vec2::new(150.0, 0.0), half, 10.0) > 0.0);
    }

    #[test]
    fn corner_is_cut_by_radius() {
        let half = Vec2::new(100.0, 50.0);
        // The sharp corner lies outside once the radius rounds it off.
        let corner = rounded_rect_sdf(half - Vec2::splat(0.5), half, 20.0);
        assert!(corner > 1.0, "{corner}");
        assert!(rounded_rect_sdf(half - Vec2::splat(0.5), half, 0.0) < 0.0);
    }

    #[test]
    fn surface_coverage_is_opaque_in_the_middle() {
        let res = Vec2::new(64.0, 32.0);
        assert_eq!(surface_coverage(res * 0.5, res, 8.0), 1.0);
        assert_eq!(surface_coverage(Vec2::new(0.5, 0.5), res, 8.0), 0.0);
    }

    #[test]
    fn stroke_is_centred_on_the_edge() {
        let res = Vec2::new(64.0, 32.0);
        assert_eq!(stroke_coverage(res * 0.5, res, 8.0, 2.0), 0.0);
        assert_eq!(stroke_coverage(Vec2::new(64.0, 16.0), res, 8.0, 2.0), 1.0);
        // One pixel either side of the edge sits on the stroke's own boundary.
        let inside = stroke_coverage(Vec2::new(63.0, 16.0), res, 8.0, 2.0);
        let outside = stroke_coverage(Vec2::new(65.0, 16.0), res, 8.0, 2.0);
        assert!((inside - 0.5).abs() < 1e-5, "{inside}");
        assert!((outside - 0.5).abs() < 1e-5, "{outside}");
        assert_eq!(stroke_coverage(Vec2::new(67.0, 16.0), res, 8.0, 2.0), 0.0);
    }
}
