// Host-side tests for the content distortion pass.

use glam::{UVec2, Vec2, Vec4};
use liquid_core::distort::{displacement, distort};
use liquid_core::{DistortionParams, NoiseTexture, SceneParams, SolidContent};

fn scene() -> SceneParams {
    SceneParams::new(1.0, Vec2::new(240.0, 120.0), 24.0)
}

#[test]
fn zero_touch_strength_matches_no_touch() {
    let noise = NoiseTexture::new(UVec2::splat(16), 3.0);
    let untouched = DistortionParams::default();
    let weightless = DistortionParams {
        touch_point: Some(Vec2::new(0.1, 0.9)),
        touch_strength: 0.0,
        ..DistortionParams::default()
    };
    let content = |p: Vec2| Vec4::new(p.x / 240.0, p.y / 120.0, 0.5, 1.0);
    for y in (0..120).step_by(17) {
        for x in (0..240).step_by(23) {
            let frag = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            let a = distort(frag, &scene(), &untouched, &noise, &content);
            let b = distort(frag, &scene(), &weightless, &noise, &content);
            assert_eq!(a, b, "differs at {frag:?}");
        }
    }
}

#[test]
fn touch_pulls_content_toward_the_pointer() {
    let noise = NoiseTexture::new(UVec2::splat(4), 1.0);
    let params = DistortionParams {
        viscosity: 0.0,
        touch_point: Some(Vec2::new(1.0, 0.5)),
        touch_strength: 0.6,
        ..DistortionParams::default()
    };
    let frag = Vec2::new(120.0, 60.0);
    let d = displacement(frag, &scene(), &params, &noise);
    // Sample point moves away from the pointer, so content slides toward it.
    assert!(d.x < 0.0, "{d:?}");
    assert!(d.y.abs() < 1e-3, "{d:?}");
}

#[test]
fn noise_warp_is_bounded_by_viscosity() {
    let noise = NoiseTexture::new(UVec2::splat(64), 200.0);
    let params = DistortionParams::default();
    let res = scene().resolution;
    for i in 0..50 {
        let frag = Vec2::new(i as f32 * 4.7, i as f32 * 2.3);
        let d = displacement(frag, &scene(), &params, &noise) / res;
        assert!(d.abs().max_element() <= 0.035 * 0.9 + 1e-5, "{d:?}");
    }
}

#[test]
fn outside_the_mask_is_transparent() {
    let noise = NoiseTexture::new(UVec2::splat(4), 1.0);
    let params = DistortionParams {
        viscosity: 0.0,
        ..DistortionParams::default()
    };
    let content = SolidContent(Vec4::ONE);
    let corner = distort(Vec2::new(0.5, 0.5), &scene(), &params, &noise, &content);
    assert_eq!(corner.w, 0.0);
    let centre = distort(Vec2::new(120.0, 60.0), &scene(), &params, &noise, &content);
    assert_eq!(centre.w, 1.0);
}
