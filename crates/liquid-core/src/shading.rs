//! Lighting presets for a marched ray.
//!
//! The two presets come from different call sites (full-screen backdrop and
//! card surface) and are kept apart on purpose; the constants are the look.

use glam::{Vec2, Vec3};

use crate::noise::cnoise;
use crate::raymarch::March;

pub const INK_BASE: Vec3 = Vec3::new(0.02, 0.02, 0.03);
pub const VIEW_DIR: Vec3 = Vec3::Z;

const DIFFUSE_TINT: Vec3 = Vec3::new(0.03, 0.03, 0.04);
const SPECULAR1_TINT: Vec3 = Vec3::new(0.7, 0.72, 0.78);
const SPECULAR2_TINT: Vec3 = Vec3::new(0.5, 0.55, 0.65);
const SPECULAR3_TINT: Vec3 = Vec3::new(0.4, 0.42, 0.5);
const FRESNEL_TINT: Vec3 = Vec3::new(0.08, 0.09, 0.12);
const SMOKE_TINT: Vec3 = Vec3::new(0.015, 0.018, 0.025);
const BG_SMOKE_TINT: Vec3 = Vec3::new(0.01, 0.012, 0.018);
const BG_SMOKE2_TINT: Vec3 = Vec3::new(0.008, 0.008, 0.012);
const PALETTE_PHASE: Vec3 = Vec3::new(0.0, 0.1, 0.2);

pub fn simple_light() -> Vec3 {
    Vec3::new(-1.0, 1.0, 1.0).normalize()
}

/// Key, fill and top light of the metallic preset.
pub fn metallic_lights() -> [Vec3; 3] {
    [
        Vec3::new(-1.0, 1.0, 1.0).normalize(),
        Vec3::new(1.0, -0.5, 0.8).normalize(),
        Vec3::new(0.0, 1.0, 0.5).normalize(),
    ]
}

/// Cosine palette scaled by `amount`.
pub fn palette(amount: f32) -> Vec3 {
    let phase = (PALETTE_PHASE + Vec3::splat(amount)) * 6.2831;
    let color = Vec3::splat(0.5) + 0.5 * Vec3::new(phase.x.cos(), phase.y.cos(), phase.z.cos());
    color * amount
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShadingPreset {
    /// Single light, diffuse-only palette colouring; misses stay black.
    Simple,
    /// Ink-black metal: Fresnel rim, two diffuse terms, three speculars and
    /// noise smoke in both branches.
    Metallic,
}

impl ShadingPreset {
    /// Colour for one pixel. `uv` is the pixel's camera-space coordinate,
    /// used by the background smoke of the metallic preset.
    pub fn shade(self, march: &March, uv: Vec2, time: f32) -> Vec3 {
        match (self, march) {
            (ShadingPreset::Simple, March::Hit { normal, .. }) => {
                let diffuse = normal.dot(simple_light()).max(0.0);
                palette(diffuse)
            }
            (ShadingPreset::Simple, March::Miss) => Vec3::ZERO,
            (ShadingPreset::Metallic, March::Hit { position, normal, .. }) => {
                metallic_hit(*position, *normal, time)
            }
            (ShadingPreset::Metallic, March::Miss) => metallic_miss(uv, time),
        }
    }
}

fn metallic_hit(position: Vec3, n: Vec3, time: f32) -> Vec3 {
    let [light1, light2, light3] = metallic_lights();

    let fresnel = (1.0 - n.dot(VIEW_DIR).max(0.0)).powf(4.0);

    let diff1 = n.dot(light1).max(0.0);
    let diff2 = n.dot(light2).max(0.0);

    let h1 = (light1 + VIEW_DIR).normalize();
    let h2 = (light2 + VIEW_DIR).normalize();
    let h3 = (light3 + VIEW_DIR).normalize();
    let spec1 = n.dot(h1).max(0.0).powf(128.0);
    let spec2 = n.dot(h2).max(0.0).powf(96.0);
    let spec3 = n.dot(h3).max(0.0).powf(64.0);

    let mut color = INK_BASE + DIFFUSE_TINT * (diff1 + diff2 * 0.5);
    color += SPECULAR1_TINT * spec1 * 0.6;
    color += SPECULAR2_TINT * spec2 * 0.35;
    color += SPECULAR3_TINT * spec3 * 0.2;
    color += FRESNEL_TINT * fresnel;

    let smoke = cnoise(position.truncate() * 4.0 + Vec2::splat(time * 0.3));
    color + SMOKE_TINT * (smoke * 0.5 + 0.5)
}

fn metallic_miss(uv: Vec2, time: f32) -> Vec3 {
    let bg_smoke = cnoise(uv * 3.0 + Vec2::splat(time * 0.2));
    let bg_smoke2 = cnoise(uv * 5.0 - Vec2::splat(time * 0.15));
    INK_BASE + BG_SMOKE_TINT * (bg_smoke * 0.5 + 0.5) + BG_SMOKE2_TINT * (bg_smoke2 * 0.5 + 0.5)
}
