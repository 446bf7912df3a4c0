//! Frame pacing: clocks and the per-surface driver that turns host state
//! into [`FrameInputs`] once per displayed frame.

use glam::Vec2;
use instant::Instant;
use log::debug;

use crate::constants::FIXED_FRAME_STEP_SEC;
use crate::error::{LiquidError, Result};
use crate::layout::CardLayout;
use crate::params::{DistortionParams, FrameInputs, SceneParams};
use crate::renderer::SurfaceRenderer;

/// Source of the `time` uniform.
pub trait FrameClock {
    /// Seconds to use for the frame being built. Called once per frame.
    fn next_frame(&mut self) -> f32;
}

/// Seconds since the first frame was requested.
#[derive(Debug, Default)]
pub struct WallClock {
    start: Option<Instant>,
}

impl WallClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for WallClock {
    fn next_frame(&mut self) -> f32 {
        let start = *self.start.get_or_insert_with(Instant::now);
        start.elapsed().as_secs_f32()
    }
}

/// Advances by a constant step per frame regardless of real time. The
/// first frame reads zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedStepClock {
    step: f32,
    elapsed: f32,
}

impl Default for FixedStepClock {
    fn default() -> Self {
        Self::new(FIXED_FRAME_STEP_SEC)
    }
}

impl FixedStepClock {
    pub fn new(step: f32) -> Self {
        Self { step, elapsed: 0.0 }
    }
}

impl FrameClock for FixedStepClock {
    fn next_frame(&mut self) -> f32 {
        let now = self.elapsed;
        self.elapsed += self.step;
        now
    }
}

/// Owns one surface's renderer and clock and builds its per-frame inputs.
///
/// The clock ticks on every request, including skipped frames, so animation
/// speed does not depend on how often the surface had a usable size.
pub struct SurfaceDriver<C: FrameClock> {
    renderer: SurfaceRenderer,
    clock: C,
    radius: f32,
    layout: Option<CardLayout>,
    torn_down: bool,
    frames: u64,
}

impl<C: FrameClock> SurfaceDriver<C> {
    pub fn new(renderer: SurfaceRenderer, clock: C, radius: f32) -> Self {
        Self {
            renderer,
            clock,
            radius,
            layout: None,
            torn_down: false,
            frames: 0,
        }
    }

    pub fn renderer(&self) -> &SurfaceRenderer {
        &self.renderer
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Shared layout for split cards; `None` means standalone.
    pub fn set_layout(&mut self, layout: Option<CardLayout>) {
        self.layout = layout;
    }

    /// Frames pushed so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Build inputs for a surface of `size` pixels, or say why not.
    pub fn try_tick(&mut self, size: Vec2, distortion: DistortionParams) -> Result<FrameInputs> {
        if self.torn_down {
            return Err(LiquidError::TornDown);
        }
        let time = self.clock.next_frame();
        let scene = SceneParams::new(time, size, self.radius);
        scene.validate()?;
        self.frames += 1;
        Ok(FrameInputs {
            scene,
            distortion,
            layout: CardLayout::resolve(self.layout, size),
        })
    }

    /// Like [`try_tick`](Self::try_tick) but absorbs the failure: the frame
    /// is skipped and nothing is pushed.
    pub fn tick(&mut self, size: Vec2, distortion: DistortionParams) -> Option<FrameInputs> {
        match self.try_tick(size, distortion) {
            Ok(inputs) => Some(inputs),
            Err(err) => {
                debug!("{} frame skipped: {err}", self.label());
                None
            }
        }
    }

    /// Stop producing frames. Idempotent.
    pub fn teardown(&mut self) {
        if !self.torn_down {
            debug!("{} surface torn down after {} frames", self.label(), self.frames);
        }
        self.torn_down = true;
    }

    fn label(&self) -> &'static str {
        match &self.renderer {
            SurfaceRenderer::ShaderBacked(program) => program.name(),
            SurfaceRenderer::FlatFallback(_) => "flat",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::SurfaceProgram;

    #[test]
    fn fixed_step_starts_at_zero() {
        let mut clock = FixedStepClock::default();
        assert_eq!(clock.next_frame(), 0.0);
        assert!((clock.next_frame() - 0.016).abs() < 1e-6);
        assert!((clock.next_frame() - 0.032).abs() < 1e-6);
    }

    #[test]
    fn wall_clock_is_monotonic() {
        let mut clock = WallClock::new();
        let a = clock.next_frame();
        let b = clock.next_frame();
        assert!(a >= 0.0 && b >= a);
    }

    #[test]
    fn driver_fills_standalone_layout() {
        let renderer = SurfaceRenderer::ShaderBacked(SurfaceProgram::Card);
        let mut driver = SurfaceDriver::new(renderer, FixedStepClock::default(), 20.0);
        let size = Vec2::new(64.0, 32.0);
        let inputs = driver
            .tick(size, DistortionParams::default())
            .expect("valid size");
        assert_eq!(inputs.layout, CardLayout::standalone(size));
        assert_eq!(inputs.scene.radius, 20.0);
        assert_eq!(driver.frames(), 1);
    }
}
