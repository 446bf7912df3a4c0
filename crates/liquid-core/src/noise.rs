//! Classic 2D Perlin noise (Gustavson's mod-289 permutation variant).
//!
//! The function carries no state: identical input always produces the same
//! bits, which is what lets two split cards sample one continuous scene.

use glam::{Vec2, Vec4};

#[inline]
fn fract(x: Vec4) -> Vec4 {
    x - x.floor()
}

#[inline]
fn mod289(x: Vec4) -> Vec4 {
    x - (x * (1.0 / 289.0)).floor() * 289.0
}

#[inline]
fn permute(x: Vec4) -> Vec4 {
    mod289((x * 34.0 + Vec4::ONE) * x)
}

#[inline]
fn taylor_inv_sqrt(r: Vec4) -> Vec4 {
    Vec4::splat(1.792_842_914_001_59) - r * 0.853_734_720_953_14
}

/// Quintic fade curve `6t^5 - 15t^4 + 10t^3`.
#[inline]
pub fn fade(t: Vec2) -> Vec2 {
    t * t * t * (t * (t * 6.0 - Vec2::splat(15.0)) + Vec2::splat(10.0))
}

/// Gradient noise in roughly `[-1, 1]`, exactly zero on integer lattice points.
pub fn cnoise(p: Vec2) -> f32 {
    let pxy = Vec4::new(p.x, p.y, p.x, p.y);
    let pi = mod289(pxy.floor() + Vec4::new(0.0, 0.0, 1.0, 1.0));
    let pf = fract(pxy) - Vec4::new(0.0, 0.0, 1.0, 1.0);

    let ix = Vec4::new(pi.x, pi.z, pi.x, pi.z);
    let iy = Vec4::new(pi.y, pi.y, pi.w, pi.w);
    let fx = Vec4::new(pf.x, pf.z, pf.x, pf.z);
    let fy = Vec4::new(pf.y, pf.y, pf.w, pf.w);

    let i = permute(permute(ix) + iy);

    let mut gx = fract(i * (1.0 / 41.0)) * 2.0 - Vec4::ONE;
    let gy = gx.abs() - Vec4::splat(0.5);
    let tx = (gx + Vec4::splat(0.5)).floor();
    gx -= tx;

    let mut g00 = Vec2::new(gx.x, gy.x);
    let mut g10 = Vec2::new(gx.y, gy.y);
    let mut g01 = Vec2::new(gx.z, gy.z);
    let mut g11 = Vec2::new(gx.w, gy.w);

    let norm = taylor_inv_sqrt(Vec4::new(
        g00.dot(g00),
        g01.dot(g01),
        g10.dot(g10),
        g11.dot(g11),
    ));
    g00 *= norm.x;
    g01 *= norm.y;
    g10 *= norm.z;
    g11 *= norm.w;

    let n00 = g00.dot(Vec2::new(fx.x, fy.x));
    let n10 = g10.dot(Vec2::new(fx.y, fy.y));
    let n01 = g01.dot(Vec2::new(fx.z, fy.z));
    let n11 = g11.dot(Vec2::new(fx.w, fy.w));

    let fade_xy = fade(Vec2::new(pf.x, pf.y));
    let n_x = Vec2::new(n00, n01).lerp(Vec2::new(n10, n11), fade_xy.x);
    2.3 * (n_x.x + (n_x.y - n_x.x) * fade_xy.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_hits_endpoints_with_flat_tangents() {
        assert_eq!(fade(Vec2::ZERO), Vec2::ZERO);
        assert_eq!(fade(Vec2::ONE), Vec2::ONE);
        let near_zero = fade(Vec2::splat(1e-3));
        assert!(near_zero.x < 1e-7);
    }

    #[test]
    fn lattice_points_are_zero() {
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (-3.0, 7.0), (12.0, -5.0)] {
            assert_eq!(cnoise(Vec2::new(x, y)), 0.0, "lattice ({x}, {y})");
        }
    }

    #[test]
    fn mod289_wraps_large_values() {
        let r = mod289(Vec4::new(300.0, 1.0, 600.0, 0.0));
        let expected = Vec4::new(11.0, 1.0, 22.0, 0.0);
        assert!((r - expected).abs().max_element() < 1e-3, "{r:?}");
    }
}
