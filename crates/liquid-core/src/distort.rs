//! Content-distortion pass: warps an arbitrary content layer by a noise
//! field, the pointer and the device tilt, then clips it to a rounded rect.

use glam::{Vec2, Vec4};

use crate::constants::{ACCEL_WARP_SCALE, NOISE_WARP_SCALE};
use crate::mask::{coverage, rounded_rect_sdf};
use crate::params::{DistortionParams, SceneParams};
use crate::texture::NoiseTexture;

/// Anything the distortion pass can read pixels from.
pub trait ContentLayer {
    /// RGBA at pixel coordinate `coord` of the surface.
    fn sample(&self, coord: Vec2) -> Vec4;
}

/// A single colour everywhere.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolidContent(pub Vec4);

impl ContentLayer for SolidContent {
    fn sample(&self, _coord: Vec2) -> Vec4 {
        self.0
    }
}

impl<F> ContentLayer for F
where
    F: Fn(Vec2) -> Vec4,
{
    fn sample(&self, coord: Vec2) -> Vec4 {
        self(coord)
    }
}

/// Pixel displacement applied before sampling content, in pixels.
pub fn displacement(
    frag_coord: Vec2,
    scene: &SceneParams,
    params: &DistortionParams,
    noise: &NoiseTexture,
) -> Vec2 {
    let uv = frag_coord / scene.resolution;
    let noise_sample = noise.sample(uv).truncate().truncate() * 2.0 - Vec2::ONE;
    let warp = noise_sample * NOISE_WARP_SCALE * params.viscosity;
    let touch_vector = (params.effective_touch_point() - uv) * params.touch_strength;
    let accel_warp = params.accel * ACCEL_WARP_SCALE;
    (warp - touch_vector + accel_warp) * scene.resolution
}

/// Distorted, clipped content colour at `frag_coord`. Only alpha is scaled
/// by the mask; colour channels pass through as sampled.
pub fn distort(
    frag_coord: Vec2,
    scene: &SceneParams,
    params: &DistortionParams,
    noise: &NoiseTexture,
    content: &dyn ContentLayer,
) -> Vec4 {
    let distorted = frag_coord + displacement(frag_coord, scene, params, noise);
    let half = scene.resolution * 0.5;
    let alpha = coverage(rounded_rect_sdf(distorted - half, half, scene.radius));
    let mut color = content.sample(distorted);
    color.w *= alpha;
    color
}
