//! Per-pixel evaluation of every surface program, plus the flat fallback
//! used when the host cannot run per-pixel programs.
//!
//! Every pixel is a pure function of its coordinate and the frame's
//! [`FrameInputs`]; no pixel reads another, so a host may evaluate them in
//! any order or in parallel.

use std::sync::Arc;

use glam::{UVec2, Vec2, Vec3, Vec4};
use log::{info, warn};

use crate::distort::{distort, ContentLayer};
use crate::error::{LiquidError, Result};
use crate::mask::surface_coverage;
use crate::params::FrameInputs;
use crate::raymarch::{march, screen_uv, Ray};
use crate::sdf::Scene;
use crate::shading::ShadingPreset;
use crate::texture::NoiseTexture;

/// Number of pixels in a `width` x `height` image, computed without `u32`
/// overflow.
#[inline]
pub fn pixel_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

/// Whether the host can run arbitrary per-pixel programs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capability {
    RuntimeShaders,
    Unsupported,
}

/// Colour and antialiased coverage of one pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderOutput {
    pub color: Vec3,
    pub coverage: f32,
}

impl RenderOutput {
    pub const TRANSPARENT: Self = Self {
        color: Vec3::ZERO,
        coverage: 0.0,
    };

    pub fn new(color: Vec3, coverage: f32) -> Self {
        Self { color, coverage }
    }

    pub fn from_rgba(rgba: Vec4) -> Self {
        Self::new(rgba.truncate(), rgba.w)
    }

    pub fn to_rgba(self) -> Vec4 {
        self.color.extend(self.coverage)
    }

    /// Composite over `dst` with coverage as the blend weight.
    pub fn over(self, dst: Vec4) -> Vec4 {
        let inv = 1.0 - self.coverage;
        (self.color * self.coverage + dst.truncate() * inv).extend(self.coverage + dst.w * inv)
    }
}

/// CPU-side image of one surface.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    width: u32,
    height: u32,
    pixels: Vec<RenderOutput>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![RenderOutput::TRANSPARENT; pixel_count(width, height)],
        }
    }

    /// A frame sized to a (whole-pixel) surface resolution.
    pub fn for_resolution(resolution: Vec2) -> Self {
        let size = resolution.max(Vec2::ZERO).as_uvec2();
        Self::new(size.x, size.y)
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

    pub fn pixel(&self, x: u32, y: u32) -> Option<RenderOutput> {
        (x < self.width && y < self.height)
            .then(|| self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn pixels(&self) -> &[RenderOutput] {
        &self.pixels
    }
}

impl ContentLayer for Frame {
    /// Nearest pixel; outside the frame is transparent.
    fn sample(&self, coord: Vec2) -> Vec4 {
        let p = coord.floor();
        if p.x < 0.0 || p.y < 0.0 {
            return Vec4::ZERO;
        }
        self.pixel(p.x as u32, p.y as u32)
            .map_or(Vec4::ZERO, RenderOutput::to_rgba)
    }
}

/// The per-pixel programs a surface can run.
#[derive(Clone, Debug)]
pub enum SurfaceProgram {
    /// Full-screen blob with the simple palette.
    Background,
    /// Metallic blob clipped to a rounded card, honouring the shared layout.
    Card,
    /// Noise/touch/tilt warp of a content layer, clipped to a rounded rect.
    Distortion { noise: Arc<NoiseTexture> },
}

impl SurfaceProgram {
    pub fn name(&self) -> &'static str {
        match self {
            SurfaceProgram::Background => "background",
            SurfaceProgram::Card => "card",
            SurfaceProgram::Distortion { .. } => "distortion",
        }
    }
}

/// What a surface draws when per-pixel programs are unavailable.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlatFallback {
    /// Plain fill of the whole surface.
    Fill { color: [f32; 4] },
    /// Rounded rectangle in the container colour, using the frame's radius.
    RoundedRect { color: [f32; 4] },
    /// The content layer as-is, without distortion or clipping.
    Passthrough { color: [f32; 4] },
}

impl FlatFallback {
    /// The natural flat stand-in for `program`.
    pub fn for_program(program: &SurfaceProgram, color: [f32; 4]) -> Self {
        match program {
            SurfaceProgram::Background => FlatFallback::Fill { color },
            SurfaceProgram::Card => FlatFallback::RoundedRect { color },
            SurfaceProgram::Distortion { .. } => FlatFallback::Passthrough { color },
        }
    }
}

/// A surface renderer, chosen once when the surface is created.
#[derive(Clone, Debug)]
pub enum SurfaceRenderer {
    ShaderBacked(SurfaceProgram),
    FlatFallback(FlatFallback),
}

impl SurfaceRenderer {
    pub fn select(capability: Capability, program: SurfaceProgram, fallback_color: [f32; 4]) -> Self {
        match capability {
            Capability::RuntimeShaders => {
                info!("{} surface: per-pixel shading", program.name());
                SurfaceRenderer::ShaderBacked(program)
            }
            Capability::Unsupported => {
                warn!(
                    "{} surface: per-pixel shading unavailable, drawing flat",
                    program.name()
                );
                SurfaceRenderer::FlatFallback(FlatFallback::for_program(&program, fallback_color))
            }
        }
    }

    pub fn is_shader_backed(&self) -> bool {
        matches!(self, SurfaceRenderer::ShaderBacked(_))
    }

    /// Shade the pixel at `frag_coord` (pixel centre, y down).
    pub fn evaluate(
        &self,
        frag_coord: Vec2,
        inputs: &FrameInputs,
        content: Option<&dyn ContentLayer>,
    ) -> RenderOutput {
        let scene = &inputs.scene;
        match self {
            SurfaceRenderer::ShaderBacked(SurfaceProgram::Background) => {
                let uv = screen_uv(frag_coord, scene.resolution);
                RenderOutput::new(shade_scene(ShadingPreset::Simple, uv, scene.time), 1.0)
            }
            SurfaceRenderer::ShaderBacked(SurfaceProgram::Card) => {
                let uv = inputs.layout.scene_uv(frag_coord);
                let color = shade_scene(ShadingPreset::Metallic, uv, scene.time);
                let alpha = surface_coverage(frag_coord, scene.resolution, scene.radius);
                RenderOutput::new(color, alpha)
            }
            SurfaceRenderer::ShaderBacked(SurfaceProgram::Distortion { noise }) => {
                let content = content.unwrap_or(&TRANSPARENT_CONTENT);
                RenderOutput::from_rgba(distort(
                    frag_coord,
                    scene,
                    &inputs.distortion,
                    noise,
                    content,
                ))
            }
            SurfaceRenderer::FlatFallback(FlatFallback::Fill { color }) => {
                RenderOutput::from_rgba(Vec4::from(*color))
            }
            SurfaceRenderer::FlatFallback(FlatFallback::RoundedRect { color }) => {
                let rgba = Vec4::from(*color);
                let alpha = surface_coverage(frag_coord, scene.resolution, scene.radius);
                RenderOutput::new(rgba.truncate(), rgba.w * alpha)
            }
            SurfaceRenderer::FlatFallback(FlatFallback::Passthrough { color }) => match content {
                Some(content) => RenderOutput::from_rgba(content.sample(frag_coord)),
                None => {
                    let rgba = Vec4::from(*color);
                    let alpha = surface_coverage(frag_coord, scene.resolution, scene.radius);
                    RenderOutput::new(rgba.truncate(), rgba.w * alpha)
                }
            },
        }
    }

    /// Evaluate every pixel of `frame`. Degenerate sizes are reported and
    /// leave the frame untouched.
    pub fn render(
        &self,
        inputs: &FrameInputs,
        content: Option<&dyn ContentLayer>,
        frame: &mut Frame,
    ) -> Result<()> {
        inputs.scene.validate()?;
        let expected = Frame::for_resolution(inputs.scene.resolution).size();
        if frame.size() != expected {
            return Err(LiquidError::FrameSizeMismatch {
                expected: pixel_count(expected.x, expected.y),
                actual: frame.pixels.len(),
            });
        }
        let width = frame.width;
        for (i, px) in frame.pixels.iter_mut().enumerate() {
            let x = i as u32 % width;
            let y = i as u32 / width;
            let frag = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            *px = self.evaluate(frag, inputs, content);
        }
        Ok(())
    }
}

static TRANSPARENT_CONTENT: crate::distort::SolidContent = crate::distort::SolidContent(Vec4::ZERO);

/// March the camera ray for `uv` and light the result with `preset`.
pub fn shade_scene(preset: ShadingPreset, uv: Vec2, time: f32) -> Vec3 {
    let scene = Scene::at(time);
    let result = march(&scene, Ray::from_uv(uv));
    preset.shade(&result, uv, time)
}
