use glam::Vec2;

// Shared tuning constants used by the CPU evaluator, the uniform packets and
// (by value) the WGSL programs under `shaders/`. Keep both sides in lockstep.

// Raymarch
pub const MAX_STEPS: usize = 64;
pub const SURFACE_DIST: f32 = 0.01; // hit threshold
pub const NORMAL_EPSILON: f32 = 0.01; // finite-difference step for normals

// Scene layout
pub const CORE_RADIUS: f32 = 0.75; // static sphere at the origin
pub const ORBIT_RADIUS: f32 = 0.25; // both orbiting spheres
pub const BLEND_RADIUS: f32 = 0.7; // smin k
pub const DISPLACEMENT_DIVISOR: f32 = 4.0; // cnoise / 4
pub const DISPLACEMENT_TIME_SCALE: f32 = 0.5;
pub const STEP_SAFETY_DIVISOR: f32 = 2.0; // final distance is halved before marching

// Content distortion
pub const NOISE_WARP_SCALE: f32 = 0.035; // multiplied by viscosity
pub const ACCEL_WARP_SCALE: f32 = 0.03;
pub const TOUCH_STRENGTH_PRESSED: f32 = 0.6;
pub const UNSET_TOUCH_POINT: [f32; 2] = [0.5, 0.5]; // fed to the shader while no pointer is down

// Mask
pub const MASK_FEATHER_PX: f32 = 1.0; // smoothstep(1, -1, sdf)

// Surface defaults
pub const DEFAULT_VISCOSITY: f32 = 0.9;
pub const DEFAULT_CORNER_RADIUS: f32 = 36.0;
pub const SHEET_CORNER_RADIUS: f32 = 48.0;
pub const DEFAULT_NOISE_SIZE: u32 = 64;
pub const FIXED_FRAME_STEP_SEC: f32 = 0.016; // distortion surfaces advance time per frame, not per clock

// Motion
pub const GRAVITY_EARTH: f32 = 9.806_65; // m/s^2, accelerometer normalisation

// Default palette (sRGB, straight alpha)
pub const CARD_CONTAINER_COLOR: [f32; 4] = [
    0x10 as f32 / 255.0,
    0x17 as f32 / 255.0,
    0x22 as f32 / 255.0,
    1.0,
]; // 0xFF101722
pub const CARD_BORDER_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0x80 as f32 / 255.0]; // 0x80FFFFFF
pub const CARD_BORDER_WIDTH_PX: f32 = 1.0;
pub const DEMO_CARD_COLOR: [f32; 4] = [
    0x0C as f32 / 255.0,
    0x19 as f32 / 255.0,
    0x24 as f32 / 255.0,
    1.0,
]; // 0xFF0C1924
pub const DEMO_BACKGROUND_COLOR: [f32; 4] = [
    0x0B as f32 / 255.0,
    0x12 as f32 / 255.0,
    0x20 as f32 / 255.0,
    1.0,
]; // 0xFF0B1220

// Split-card demo choreography
pub const DEMO_VISCOSITY: f32 = 0.95;
pub const EXPAND_DURATION_SEC: f32 = 0.7;
pub const SPLIT_DURATION_SEC: f32 = 0.65;
pub const EXPAND_RADIUS_FROM: f32 = 120.0;
pub const EXPAND_RADIUS_TO: f32 = 32.0;
pub const SPLIT_GAP_MAX_PX: f32 = 16.0;
pub const SPLIT_PROGRESS_EPSILON: f32 = 0.01; // below this the pair collapses into one card
pub const DEMO_WIDTH_FRACTION: f32 = 0.9;
pub const DEMO_CARD_HEIGHT_PX: f32 = 200.0;

#[inline]
pub fn unset_touch_point() -> Vec2 {
    Vec2::from(UNSET_TOUCH_POINT)
}
