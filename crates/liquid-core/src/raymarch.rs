use glam::{Vec2, Vec3};

use crate::constants::{MAX_STEPS, SURFACE_DIST};
use crate::sdf::Scene;

/// Map a pixel coordinate to the centred, height-normalised `[-1, 1]` space
/// the camera works in. Dividing by the height keeps the blob's apparent
/// size independent of the surface's aspect ratio.
#[inline]
pub fn screen_uv(frag_coord: Vec2, resolution: Vec2) -> Vec2 {
    (frag_coord - 0.5 * resolution) / resolution.y * 2.0
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Fixed camera: origin on the `z = 1` plane under the pixel, looking
    /// down `-z` with a slight perspective spread.
    pub fn from_uv(uv: Vec2) -> Self {
        Self {
            origin: uv.extend(1.0),
            direction: uv.extend(-1.0).normalize(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum March {
    Hit {
        position: Vec3,
        normal: Vec3,
        steps: usize,
    },
    Miss,
}

impl March {
    pub fn is_hit(&self) -> bool {
        matches!(self, March::Hit { .. })
    }
}

/// Sphere-trace `ray` through `scene`. Each step advances by the distance
/// sampled at the previous position; the surface counts as reached once
/// that distance falls under [`SURFACE_DIST`].
pub fn march(scene: &Scene, ray: Ray) -> March {
    let mut travelled = 0.0;
    for step in 0..MAX_STEPS {
        let position = ray.origin + travelled * ray.direction;
        let dist = scene.distance(position);
        travelled += dist;
        if dist < SURFACE_DIST {
            let position = ray.origin + travelled * ray.direction;
            return March::Hit {
                position,
                normal: scene.normal(position),
                steps: step + 1,
            };
        }
    }
    March::Miss
}
