//! Host-facing surface state: the values a widget owns between frames.
//!
//! These types avoid platform APIs so any host (winit, a mobile toolkit, a
//! test harness) can feed them. Each frame the host reads a snapshot and
//! hands it to the driver; nothing here is observed reactively.

use std::sync::{Arc, Mutex, PoisonError};

use glam::Vec2;
use log::debug;

use crate::constants::{
    CARD_BORDER_COLOR, CARD_BORDER_WIDTH_PX, CARD_CONTAINER_COLOR, DEFAULT_CORNER_RADIUS,
    DEFAULT_VISCOSITY, GRAVITY_EARTH, SHEET_CORNER_RADIUS, TOUCH_STRENGTH_PRESSED,
};
use crate::params::DistortionParams;

/// Viscosity, corner radius and the current pointer contact of one surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiquidSurfaceState {
    pub viscosity: f32,
    pub corner_radius: f32,
    pub touch_point: Option<Vec2>,
    pub touch_strength: f32,
}

impl Default for LiquidSurfaceState {
    fn default() -> Self {
        Self::new(DEFAULT_VISCOSITY, DEFAULT_CORNER_RADIUS)
    }
}

impl LiquidSurfaceState {
    pub fn new(viscosity: f32, corner_radius: f32) -> Self {
        Self {
            viscosity,
            corner_radius,
            touch_point: None,
            touch_strength: 0.0,
        }
    }

    /// Preset used by bottom sheets.
    pub fn sheet() -> Self {
        Self::new(DEFAULT_VISCOSITY, SHEET_CORNER_RADIUS)
    }

    /// Pointer went down at `position_px` on a surface of `size` pixels.
    pub fn press(&mut self, position_px: Vec2, size: Vec2) {
        self.touch_point = Some(normalize_position(position_px, size));
        self.touch_strength = TOUCH_STRENGTH_PRESSED;
    }

    /// Pointer moved while pressed; ignored when nothing is pressed.
    pub fn drag(&mut self, position_px: Vec2, size: Vec2) {
        if self.touch_point.is_some() {
            self.touch_point = Some(normalize_position(position_px, size));
        }
    }

    pub fn release(&mut self) {
        self.touch_point = None;
        self.touch_strength = 0.0;
    }

    pub fn is_pressed(&self) -> bool {
        self.touch_point.is_some()
    }

    pub fn distortion(&self, motion: LiquidMotionState) -> DistortionParams {
        DistortionParams {
            viscosity: self.viscosity,
            touch_point: self.touch_point,
            touch_strength: self.touch_strength,
            accel: motion.accel,
        }
    }
}

/// Pixel position to `[0, 1]` surface coordinates; a zero-sized surface maps
/// everything to the origin.
pub fn normalize_position(position_px: Vec2, size: Vec2) -> Vec2 {
    if size.x == 0.0 || size.y == 0.0 {
        Vec2::ZERO
    } else {
        position_px / size
    }
}

/// Device tilt snapshot, each axis in `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LiquidMotionState {
    pub accel: Vec2,
}

impl LiquidMotionState {
    pub fn new(accel: Vec2) -> Self {
        Self {
            accel: accel.clamp(Vec2::NEG_ONE, Vec2::ONE),
        }
    }
}

#[derive(Debug, Default)]
struct MotionInner {
    running: bool,
    state: LiquidMotionState,
}

/// Receives accelerometer samples from any thread and exposes the latest one
/// as a snapshot. Last value wins; nothing is queued.
#[derive(Clone, Debug, Default)]
pub struct MotionController {
    inner: Arc<Mutex<MotionInner>>,
}

impl MotionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) {
        self.lock().running = true;
        debug!("motion controller started");
    }

    /// Stop listening. The last snapshot is kept so a paused surface does not
    /// snap back.
    pub fn stop(&self) {
        self.lock().running = false;
        debug!("motion controller stopped");
    }

    pub fn is_running(&self) -> bool {
        self.lock().running
    }

    /// Raw accelerometer reading in m/s^2. `x` is inverted so tilting right
    /// pushes content right; `z` does not contribute.
    pub fn on_sensor_changed(&self, x: f32, y: f32, _z: f32) {
        let mut inner = self.lock();
        if !inner.running {
            return;
        }
        inner.state = LiquidMotionState::new(Vec2::new(-x / GRAVITY_EARTH, y / GRAVITY_EARTH));
    }

    pub fn snapshot(&self) -> LiquidMotionState {
        self.lock().state
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MotionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Card colours: the container fill used when the card cannot be shaded per
/// pixel, and the outline drawn over every card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardStyle {
    pub container_color: [f32; 4],
    pub border_color: [f32; 4],
    pub border_width: f32,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            container_color: CARD_CONTAINER_COLOR,
            border_color: CARD_BORDER_COLOR,
            border_width: CARD_BORDER_WIDTH_PX,
        }
    }
}

impl CardStyle {
    pub fn with_container_color(mut self, color: [f32; 4]) -> Self {
        self.container_color = color;
        self
    }
}
