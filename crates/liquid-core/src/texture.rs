//! Low-resolution noise bitmap used as the distortion source.
//!
//! Generated once per requested size from a float linear-congruential
//! sequence and shared read-only across surfaces, so per-frame work stays on
//! the pixel side.

use std::sync::Arc;

use glam::{UVec2, Vec2, Vec4};
use log::debug;
use rand::Rng;

use crate::constants::DEFAULT_NOISE_SIZE;
use crate::renderer::pixel_count;

#[derive(Clone, Debug, PartialEq)]
pub struct NoiseTexture {
    width: u32,
    height: u32,
    seed: f32,
    texels: Vec<[u8; 4]>,
}

impl NoiseTexture {
    /// Build the bitmap for `size` from a fixed seed. Zero dimensions are
    /// raised to one texel.
    pub fn new(size: UVec2, seed: f32) -> Self {
        let width = size.x.max(1);
        let height = size.y.max(1);
        let count = pixel_count(width, height);
        let mut texels = Vec::with_capacity(count);
        let mut value = seed;
        for _ in 0..count {
            // f32 on purpose: the sequence is defined by float rounding.
            value = (value * 1_664_525.0 + 1_013_904_223.0) % 255.0;
            texels.push([
                unit_to_byte((value % 255.0) / 255.0),
                unit_to_byte(((value * 0.5) % 255.0) / 255.0),
                unit_to_byte(((value * 0.25) % 255.0) / 255.0),
                u8::MAX,
            ]);
        }
        Self {
            width,
            height,
            seed,
            texels,
        }
    }

    /// Same as [`NoiseTexture::new`] with a seed drawn from `[0, 255)`.
    pub fn random(size: UVec2) -> Self {
        let seed = rand::thread_rng().gen::<f32>() * 255.0;
        Self::new(size, seed)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    pub fn seed(&self) -> f32 {
        self.seed
    }

    /// Raw RGBA8 rows, top to bottom, ready for a texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }

    pub fn texel(&self, x: i64, y: i64) -> Vec4 {
        let xi = x.rem_euclid(self.width as i64) as usize;
        let yi = y.rem_euclid(self.height as i64) as usize;
        let [r, g, b, a] = self.texels[yi * self.width as usize + xi];
        Vec4::new(r as f32, g as f32, b as f32, a as f32) / 255.0
    }

    /// Bilinear sample at normalised `uv` with repeat addressing on both
    /// axes, matching a `Repeat`/`Linear` GPU sampler.
    pub fn sample(&self, uv: Vec2) -> Vec4 {
        let p = uv * Vec2::new(self.width as f32, self.height as f32) - Vec2::splat(0.5);
        let base = p.floor();
        let f = p - base;
        let (x0, y0) = (base.x as i64, base.y as i64);
        let top = self.texel(x0, y0).lerp(self.texel(x0 + 1, y0), f.x);
        let bottom = self.texel(x0, y0 + 1).lerp(self.texel(x0 + 1, y0 + 1), f.x);
        top.lerp(bottom, f.y)
    }
}

#[inline]
fn unit_to_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Keeps one shared texture alive and rebuilds it only when the requested
/// size changes.
#[derive(Debug, Default)]
pub struct NoiseCache {
    current: Option<Arc<NoiseTexture>>,
}

impl NoiseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, size: UVec2) -> Arc<NoiseTexture> {
        let wanted = size.max(UVec2::ONE);
        match &self.current {
            Some(tex) if tex.size() == wanted => Arc::clone(tex),
            _ => {
                debug!("generating {}x{} noise texture", wanted.x, wanted.y);
                let tex = Arc::new(NoiseTexture::random(wanted));
                self.current = Some(Arc::clone(&tex));
                tex
            }
        }
    }

    pub fn get_default(&mut self) -> Arc<NoiseTexture> {
        self.get(UVec2::splat(DEFAULT_NOISE_SIZE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_bitmap() {
        let a = NoiseTexture::new(UVec2::new(16, 8), 42.0);
        let b = NoiseTexture::new(UVec2::new(16, 8), 42.0);
        assert_eq!(a, b);
        assert_eq!(a.as_bytes().len(), 16 * 8 * 4);
    }

    #[test]
    fn zero_size_is_raised_to_one_texel() {
        let t = NoiseTexture::new(UVec2::ZERO, 1.0);
        assert_eq!(t.size(), UVec2::ONE);
    }

    #[test]
    fn alpha_is_opaque() {
        let t = NoiseTexture::new(UVec2::splat(8), 7.0);
        assert!(t.as_bytes().chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn sampling_repeats_instead_of_clamping() {
        let t = NoiseTexture::new(UVec2::splat(8), 99.0);
        for uv in [Vec2::new(0.3, 0.7), Vec2::new(0.05, 0.95)] {
            let a = t.sample(uv);
            let b = t.sample(uv + Vec2::new(1.0, -2.0));
            assert!((a - b).abs().max_element() < 1e-4, "{a:?} vs {b:?}");
        }
    }
}
