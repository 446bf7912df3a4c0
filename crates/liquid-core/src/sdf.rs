//! Signed-distance scene: one static sphere and two orbiting ones, blended
//! with a polynomial smooth minimum and rippled along y by Perlin noise.

use glam::{Vec2, Vec3};

use crate::constants::{
    BLEND_RADIUS, CORE_RADIUS, DISPLACEMENT_DIVISOR, DISPLACEMENT_TIME_SCALE, NORMAL_EPSILON,
    ORBIT_RADIUS, STEP_SAFETY_DIVISOR,
};
use crate::noise::cnoise;

#[inline]
pub fn sd_sphere(p: Vec3, radius: f32) -> f32 {
    p.length() - radius
}

/// Polynomial smooth minimum; `k` is the blend radius.
#[inline]
pub fn smin(a: f32, b: f32, k: f32) -> f32 {
    let h = (0.5 + 0.5 * (b - a) / k).clamp(0.0, 1.0);
    b + (a - b) * h - k * h * (1.0 - h)
}

/// The liquid blob frozen at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub time: f32,
}

impl Scene {
    pub fn at(time: f32) -> Self {
        Self { time }
    }

    /// Centres of the two orbiting spheres.
    pub fn orbit_centers(&self) -> [Vec3; 2] {
        let (s, c) = self.time.sin_cos();
        [Vec3::new(c, s, 0.0), Vec3::new(c, c, 0.0)]
    }

    /// Conservative distance: the blended field plus displacement, halved so
    /// the march cannot overshoot the rippled surface.
    pub fn distance(&self, p: Vec3) -> f32 {
        let displacement =
            cnoise(Vec2::splat(p.y) + Vec2::splat(self.time * DISPLACEMENT_TIME_SCALE))
                / DISPLACEMENT_DIVISOR;
        let [c2, c3] = self.orbit_centers();
        let d = sd_sphere(p, CORE_RADIUS);
        let d2 = sd_sphere(p - c2, ORBIT_RADIUS);
        let d3 = sd_sphere(p - c3, ORBIT_RADIUS);
        let dist = smin(smin(d, d2, BLEND_RADIUS), d3, BLEND_RADIUS) + displacement;
        dist / STEP_SAFETY_DIVISOR
    }

    /// Backward-difference gradient, normalised.
    pub fn normal(&self, p: Vec3) -> Vec3 {
        let d = self.distance(p);
        let n = Vec3::splat(d)
            - Vec3::new(
                self.distance(p - Vec3::X * NORMAL_EPSILON),
                self.distance(p - Vec3::Y * NORMAL_EPSILON),
                self.distance(p - Vec3::Z * NORMAL_EPSILON),
            );
        n.normalize_or_zero()
    }
}
