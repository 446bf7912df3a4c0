//! GPU-side parameter packets, one per WGSL program.
//!
//! Field order and padding mirror the `Params` structs in `shaders/*.wgsl`;
//! every packet is a multiple of 16 bytes. `origin` is the surface's
//! top-left corner in render-target pixels, since `@builtin(position)`
//! ignores the viewport offset.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::params::FrameInputs;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct BackgroundUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub _pad: f32,
    pub origin: [f32; 2],
    pub _pad2: [f32; 2],
}

impl BackgroundUniforms {
    pub fn from_inputs(inputs: &FrameInputs, origin: Vec2) -> Self {
        Self {
            resolution: inputs.scene.resolution.to_array(),
            time: inputs.scene.time,
            _pad: 0.0,
            origin: origin.to_array(),
            _pad2: [0.0; 2],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct CardUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub radius: f32,
    pub card_offset: [f32; 2],
    pub total_size: [f32; 2],
    pub origin: [f32; 2],
    pub _pad: [f32; 2],
}

impl CardUniforms {
    pub fn from_inputs(inputs: &FrameInputs, origin: Vec2) -> Self {
        Self {
            resolution: inputs.scene.resolution.to_array(),
            time: inputs.scene.time,
            radius: inputs.scene.radius,
            card_offset: inputs.layout.card_offset.to_array(),
            total_size: inputs.layout.total_size.to_array(),
            origin: origin.to_array(),
            _pad: [0.0; 2],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct SurfaceUniforms {
    pub resolution: [f32; 2],
    pub time: f32,
    pub radius: f32,
    pub viscosity: f32,
    pub touch_strength: f32,
    pub accel: [f32; 2],
    pub touch_point: [f32; 2],
    pub origin: [f32; 2],
}

impl SurfaceUniforms {
    pub fn from_inputs(inputs: &FrameInputs, origin: Vec2) -> Self {
        let d = &inputs.distortion;
        Self {
            resolution: inputs.scene.resolution.to_array(),
            time: inputs.scene.time,
            radius: inputs.scene.radius,
            viscosity: d.viscosity,
            touch_strength: d.touch_strength,
            accel: d.accel.to_array(),
            touch_point: d.effective_touch_point().to_array(),
            origin: origin.to_array(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct FlatUniforms {
    pub color: [f32; 4],
    pub resolution: [f32; 2],
    pub radius: f32,
    /// Zero fills the shape; otherwise only a ring this wide, centred on the
    /// edge, is drawn.
    pub stroke_width: f32,
    pub origin: [f32; 2],
    pub _pad: [f32; 2],
}

impl FlatUniforms {
    pub fn from_inputs(inputs: &FrameInputs, origin: Vec2, color: [f32; 4]) -> Self {
        Self {
            color,
            resolution: inputs.scene.resolution.to_array(),
            radius: inputs.scene.radius,
            stroke_width: 0.0,
            origin: origin.to_array(),
            _pad: [0.0; 2],
        }
    }

    pub fn with_stroke(mut self, width: f32) -> Self {
        self.stroke_width = width.max(0.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{DistortionParams, SceneParams};

    #[test]
    fn unset_touch_is_packed_as_centre() {
        let inputs = FrameInputs::standalone(SceneParams::new(1.0, Vec2::new(10.0, 10.0), 2.0))
            .with_distortion(DistortionParams::default());
        let u = SurfaceUniforms::from_inputs(&inputs, Vec2::ZERO);
        assert_eq!(u.touch_point, [0.5, 0.5]);
        assert_eq!(u.touch_strength, 0.0);
    }

    #[test]
    fn card_packet_carries_layout() {
        let inputs = FrameInputs::standalone(SceneParams::new(0.0, Vec2::new(392.0, 200.0), 32.0))
            .with_layout(crate::layout::CardLayout::new(
                Vec2::new(408.0, 0.0),
                Vec2::new(800.0, 200.0),
            ));
        let u = CardUniforms::from_inputs(&inputs, Vec2::new(40.0, 300.0));
        assert_eq!(u.card_offset, [408.0, 0.0]);
        assert_eq!(u.total_size, [800.0, 200.0]);
        assert_eq!(u.origin, [40.0, 300.0]);
    }
}
