//! Per-frame parameter snapshots handed to the renderer.
//!
//! Everything here is plain data and immutable once built; the host builds a
//! fresh [`FrameInputs`] every frame instead of mutating shared state.

use glam::Vec2;

use crate::constants::{unset_touch_point, DEFAULT_VISCOSITY};
use crate::error::{LiquidError, Result};
use crate::layout::CardLayout;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneParams {
    /// Elapsed seconds.
    pub time: f32,
    /// Surface size in pixels.
    pub resolution: Vec2,
    /// Corner radius in pixels.
    pub radius: f32,
}

impl SceneParams {
    pub fn new(time: f32, resolution: Vec2, radius: f32) -> Self {
        Self {
            time,
            resolution,
            radius,
        }
    }

    /// Zero or negative sizes would divide by zero during normalisation.
    pub fn validate(&self) -> Result<()> {
        if self.resolution.x > 0.0 && self.resolution.y > 0.0 {
            Ok(())
        } else {
            Err(LiquidError::DegenerateSize {
                width: self.resolution.x,
                height: self.resolution.y,
            })
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistortionParams {
    pub viscosity: f32,
    /// Normalised pointer position, `None` while nothing is pressed.
    pub touch_point: Option<Vec2>,
    pub touch_strength: f32,
    pub accel: Vec2,
}

impl Default for DistortionParams {
    fn default() -> Self {
        Self {
            viscosity: DEFAULT_VISCOSITY,
            touch_point: None,
            touch_strength: 0.0,
            accel: Vec2::ZERO,
        }
    }
}

impl DistortionParams {
    /// Touch point as the shader sees it: the centre when unset.
    pub fn effective_touch_point(&self) -> Vec2 {
        self.touch_point.unwrap_or_else(unset_touch_point)
    }
}

/// Everything one surface needs for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInputs {
    pub scene: SceneParams,
    pub distortion: DistortionParams,
    pub layout: CardLayout,
}

impl FrameInputs {
    /// A standalone surface with neutral distortion inputs.
    pub fn standalone(scene: SceneParams) -> Self {
        Self {
            scene,
            distortion: DistortionParams::default(),
            layout: CardLayout::standalone(scene.resolution),
        }
    }

    pub fn with_distortion(mut self, distortion: DistortionParams) -> Self {
        self.distortion = distortion;
        self
    }

    pub fn with_layout(mut self, layout: CardLayout) -> Self {
        self.layout = layout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_and_negative_sizes_are_rejected() {
        for res in [Vec2::ZERO, Vec2::new(10.0, 0.0), Vec2::new(-1.0, 5.0)] {
            let err = SceneParams::new(0.0, res, 4.0).validate();
            assert!(matches!(err, Err(LiquidError::DegenerateSize { .. })));
        }
        assert!(SceneParams::new(0.0, Vec2::ONE, 0.0).validate().is_ok());
    }

    #[test]
    fn unset_touch_reads_as_centre() {
        let d = DistortionParams::default();
        assert_eq!(d.effective_touch_point(), Vec2::new(0.5, 0.5));
        assert_eq!(d.touch_strength, 0.0);
    }
}
