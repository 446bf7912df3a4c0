//! wgpu backend for the demo window. Every surface is a full-viewport
//! triangle clipped to its rectangle; the fragment programs take care of
//! rounding and antialiasing.

use glam::{UVec2, Vec2};
use liquid_core::constants::MASK_FEATHER_PX;
use liquid_core::{
    BackgroundUniforms, Capability, CardUniforms, FlatFallback, FlatUniforms, FrameInputs,
    NoiseTexture, SurfaceProgram, SurfaceRenderer, SurfaceUniforms, BACKGROUND_WGSL, CARD_WGSL,
    FLAT_WGSL, SURFACE_WGSL,
};
use log::{debug, info, warn};
use wgpu::util::DeviceExt;

// Large enough for any of the uniform packets.
const UNIFORM_SLOT_SIZE: u64 = 48;
// Setting this variable forces the flat path even on capable adapters.
const FORCE_FLAT_ENV: &str = "LIQUID_FORCE_FLAT";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let local = p - self.origin;
        local.x >= 0.0 && local.y >= 0.0 && local.x < self.size.x && local.y < self.size.y
    }

    /// Grown by `by` pixels on every side.
    pub fn outset(&self, by: f32) -> Self {
        Self::new(self.origin - Vec2::splat(by), self.size + Vec2::splat(2.0 * by))
    }

    /// Whole-pixel `[x, y, w, h]` of the part inside a `width` x `height`
    /// target, or `None` when nothing is visible.
    fn clip(&self, width: u32, height: u32) -> Option<[u32; 4]> {
        let x0 = self.origin.x.max(0.0).floor();
        let y0 = self.origin.y.max(0.0).floor();
        let x1 = (self.origin.x + self.size.x).min(width as f32).ceil();
        let y1 = (self.origin.y + self.size.y).min(height as f32).ceil();
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some([x0 as u32, y0 as u32, (x1 - x0) as u32, (y1 - y0) as u32])
    }
}

/// One surface to draw this frame.
pub struct SurfaceDraw<'a> {
    pub renderer: &'a SurfaceRenderer,
    pub rect: Rect,
    pub inputs: FrameInputs,
}

/// Rounded outline drawn over a card, centred on the card's edge.
pub struct BorderDraw {
    pub rect: Rect,
    pub radius: f32,
    pub color: [f32; 4],
    pub width: f32,
}

impl BorderDraw {
    /// Pixels the stroke can touch: its outer half plus the antialiasing band.
    pub fn bounds(&self) -> Rect {
        self.rect.outset(self.width * 0.5 + MASK_FEATHER_PX)
    }
}

/// A distortion surface together with the content it warps. The content is
/// drawn in the surface's own pixel space.
pub struct SheetDraw<'a> {
    pub content: SurfaceDraw<'a>,
    pub surface: SurfaceDraw<'a>,
}

/// Everything drawn in one frame, back to front.
pub struct FrameDraw<'a> {
    pub clear: [f32; 4],
    pub cards: Vec<SurfaceDraw<'a>>,
    pub borders: Vec<BorderDraw>,
    pub sheet: Option<SheetDraw<'a>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pipe {
    Background,
    Card,
    Flat,
    Surface,
}

#[derive(Clone, Copy, Debug)]
struct Draw {
    pipe: Pipe,
    slot: usize,
    viewport: [u32; 4],
}

struct UniformSlot {
    buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
}

struct ContentTarget {
    size: UVec2,
    view: wgpu::TextureView,
    bind_group: wgpu::BindGroup,
}

/// Pipelines that need per-pixel shading; absent on flat-only hosts.
struct ShadedPrograms {
    background: wgpu::RenderPipeline,
    card: wgpu::RenderPipeline,
    surface: wgpu::RenderPipeline,
    surface_layout: wgpu::BindGroupLayout,
    surface_buffer: wgpu::Buffer,
    content_sampler: wgpu::Sampler,
    noise_view: wgpu::TextureView,
    noise_sampler: wgpu::Sampler,
    content: Option<ContentTarget>,
}

pub struct GpuState<'w> {
    pub window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    capability: Capability,
    uniform_layout: wgpu::BindGroupLayout,
    flat: wgpu::RenderPipeline,
    shaded: Option<ShadedPrograms>,
    slots: Vec<UniformSlot>,
    slot_cursor: usize,
}

impl<'w> GpuState<'w> {
    pub async fn new(
        window: &'w winit::window::Window,
        noise: &NoiseTexture,
    ) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let adapter_info = adapter.get_info();
        info!(
            "adapter: {} ({:?}, {:?})",
            adapter_info.name, adapter_info.device_type, adapter_info.backend
        );
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Colours are authored as display values, so skip sRGB encoding.
        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("Surface reports no formats"))?;
        let alpha_mode = surface_caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let uniform_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniforms"),
            entries: &[uniform_entry(0)],
        });
        let flat = create_pipeline(
            &device,
            "flat",
            FLAT_WGSL,
            "fs_flat",
            &uniform_layout,
            format,
            wgpu::BlendState::ALPHA_BLENDING,
        );

        let mut capability = detect_capability(&adapter_info);
        let shaded = if capability == Capability::RuntimeShaders {
            device.push_error_scope(wgpu::ErrorFilter::Validation);
            let programs = ShadedPrograms::new(&device, &queue, format, &uniform_layout, noise);
            match device.pop_error_scope().await {
                None => Some(programs),
                Some(err) => {
                    warn!("liquid programs rejected by the device: {err}");
                    capability = Capability::Unsupported;
                    None
                }
            }
        } else {
            None
        };
        info!("surface rendering: {capability:?}, format {format:?}");

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            capability,
            uniform_layout,
            flat,
            shaded,
            slots: Vec::new(),
            slot_cursor: 0,
        })
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, frame: &FrameDraw) -> Result<(), wgpu::SurfaceError> {
        self.slot_cursor = 0;
        let target = UVec2::new(self.config.width, self.config.height);

        let mut main_draws = Vec::new();
        let mut content_draws = Vec::new();
        for card in &frame.cards {
            main_draws.extend(self.plan(card, target));
        }
        for border in &frame.borders {
            main_draws.extend(self.plan_border(border, target));
        }
        if let Some(sheet) = &frame.sheet {
            if let SurfaceRenderer::FlatFallback(FlatFallback::Passthrough { .. }) =
                sheet.surface.renderer
            {
                // Undistorted: draw the content straight into the sheet's rect.
                let direct = SurfaceDraw {
                    renderer: sheet.content.renderer,
                    rect: sheet.surface.rect,
                    inputs: sheet.content.inputs,
                };
                main_draws.extend(self.plan(&direct, target));
            } else {
                let size = sheet.surface.rect.size.max(Vec2::ONE).as_uvec2();
                self.ensure_content(size);
                content_draws.extend(self.plan(&sheet.content, size));
                main_draws.extend(self.plan(&sheet.surface, target));
            }
        }

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let content_view = self
            .shaded
            .as_ref()
            .and_then(|s| s.content.as_ref())
            .map(|c| &c.view)
            .filter(|_| !content_draws.is_empty());
        if let Some(content_view) = content_view {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("content"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: content_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.execute(&mut rpass, &content_draws);
        }
        {
            let [r, g, b, a] = frame.clear;
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: r as f64,
                            g: g as f64,
                            b: b as f64,
                            a: a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.execute(&mut rpass, &main_draws);
        }
        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }

    /// Write the uniforms for `draw` and record which pipeline runs it.
    fn plan(&mut self, draw: &SurfaceDraw, target: UVec2) -> Option<Draw> {
        let viewport = draw.rect.clip(target.x, target.y)?;
        let origin = draw.rect.origin;
        let inputs = &draw.inputs;
        let (pipe, bytes): (Pipe, Vec<u8>) = match draw.renderer {
            SurfaceRenderer::ShaderBacked(SurfaceProgram::Background) => (
                Pipe::Background,
                bytemuck::bytes_of(&BackgroundUniforms::from_inputs(inputs, origin)).to_vec(),
            ),
            SurfaceRenderer::ShaderBacked(SurfaceProgram::Card) => (
                Pipe::Card,
                bytemuck::bytes_of(&CardUniforms::from_inputs(inputs, origin)).to_vec(),
            ),
            SurfaceRenderer::ShaderBacked(SurfaceProgram::Distortion { .. }) => {
                let shaded = self.shaded.as_ref()?;
                self.queue.write_buffer(
                    &shaded.surface_buffer,
                    0,
                    bytemuck::bytes_of(&SurfaceUniforms::from_inputs(inputs, origin)),
                );
                return Some(Draw {
                    pipe: Pipe::Surface,
                    slot: 0,
                    viewport,
                });
            }
            SurfaceRenderer::FlatFallback(FlatFallback::Fill { color }) => {
                // Oversized by two pixels per side; the scissor trims the
                // feathered edge so the fill is hard.
                let pad = Vec2::splat(2.0);
                let mut fill = FlatUniforms::from_inputs(inputs, origin - pad, *color);
                fill.resolution = (inputs.scene.resolution + 2.0 * pad).to_array();
                fill.radius = 0.0;
                (Pipe::Flat, bytemuck::bytes_of(&fill).to_vec())
            }
            SurfaceRenderer::FlatFallback(FlatFallback::RoundedRect { color })
            | SurfaceRenderer::FlatFallback(FlatFallback::Passthrough { color }) => (
                Pipe::Flat,
                bytemuck::bytes_of(&FlatUniforms::from_inputs(inputs, origin, *color)).to_vec(),
            ),
        };
        if pipe != Pipe::Flat && self.shaded.is_none() {
            debug!("skipping {pipe:?} draw without shaded programs");
            return None;
        }
        let slot = self.write_slot(&bytes);
        Some(Draw {
            pipe,
            slot,
            viewport,
        })
    }

    fn plan_border(&mut self, border: &BorderDraw, target: UVec2) -> Option<Draw> {
        if border.width <= 0.0 {
            return None;
        }
        let viewport = border.bounds().clip(target.x, target.y)?;
        let uniforms = FlatUniforms {
            color: border.color,
            resolution: border.rect.size.to_array(),
            radius: border.radius,
            stroke_width: 0.0,
            origin: border.rect.origin.to_array(),
            _pad: [0.0; 2],
        }
        .with_stroke(border.width);
        let slot = self.write_slot(bytemuck::bytes_of(&uniforms));
        Some(Draw {
            pipe: Pipe::Flat,
            slot,
            viewport,
        })
    }

    fn write_slot(&mut self, bytes: &[u8]) -> usize {
        if self.slot_cursor == self.slots.len() {
            let buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("surface uniforms"),
                size: UNIFORM_SLOT_SIZE,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            });
            let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("surface uniforms"),
                layout: &self.uniform_layout,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: buffer.as_entire_binding(),
                }],
            });
            self.slots.push(UniformSlot { buffer, bind_group });
        }
        let slot = self.slot_cursor;
        self.queue.write_buffer(&self.slots[slot].buffer, 0, bytes);
        self.slot_cursor += 1;
        slot
    }

    fn ensure_content(&mut self, size: UVec2) {
        let format = self.config.format;
        let Some(shaded) = self.shaded.as_mut() else {
            return;
        };
        if shaded.content.as_ref().is_some_and(|c| c.size == size) {
            return;
        }
        debug!("content target {}x{}", size.x, size.y);
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("sheet content"),
            size: wgpu::Extent3d {
                width: size.x,
                height: size.y,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sheet"),
            layout: &shaded.surface_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: shaded.surface_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&shaded.content_sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::TextureView(&shaded.noise_view),
                },
                wgpu::BindGroupEntry {
                    binding: 4,
                    resource: wgpu::BindingResource::Sampler(&shaded.noise_sampler),
                },
            ],
        });
        shaded.content = Some(ContentTarget {
            size,
            view,
            bind_group,
        });
    }

    fn execute(&self, rpass: &mut wgpu::RenderPass<'_>, draws: &[Draw]) {
        for draw in draws {
            let (pipeline, bind_group) = match (draw.pipe, self.shaded.as_ref()) {
                (Pipe::Flat, _) => (&self.flat, &self.slots[draw.slot].bind_group),
                (Pipe::Background, Some(s)) => (&s.background, &self.slots[draw.slot].bind_group),
                (Pipe::Card, Some(s)) => (&s.card, &self.slots[draw.slot].bind_group),
                (Pipe::Surface, Some(s)) => match &s.content {
                    Some(content) => (&s.surface, &content.bind_group),
                    None => continue,
                },
                _ => continue,
            };
            let [x, y, w, h] = draw.viewport;
            rpass.set_viewport(x as f32, y as f32, w as f32, h as f32, 0.0, 1.0);
            rpass.set_scissor_rect(x, y, w, h);
            rpass.set_pipeline(pipeline);
            rpass.set_bind_group(0, bind_group, &[]);
            rpass.draw(0..3, 0..1);
        }
    }
}

impl ShadedPrograms {
    fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        format: wgpu::TextureFormat,
        uniform_layout: &wgpu::BindGroupLayout,
        noise: &NoiseTexture,
    ) -> Self {
        let background = create_pipeline(
            device,
            "background",
            BACKGROUND_WGSL,
            "fs_background",
            uniform_layout,
            format,
            wgpu::BlendState::REPLACE,
        );
        let card = create_pipeline(
            device,
            "card",
            CARD_WGSL,
            "fs_card",
            uniform_layout,
            format,
            wgpu::BlendState::ALPHA_BLENDING,
        );

        let texture_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Texture {
                sample_type: wgpu::TextureSampleType::Float { filterable: true },
                view_dimension: wgpu::TextureViewDimension::D2,
                multisampled: false,
            },
            count: None,
        };
        let sampler_entry = |binding| wgpu::BindGroupLayoutEntry {
            binding,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
            count: None,
        };
        let surface_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sheet"),
            entries: &[
                uniform_entry(0),
                texture_entry(1),
                sampler_entry(2),
                texture_entry(3),
                sampler_entry(4),
            ],
        });
        // Content is already premultiplied by the content pass.
        let surface = create_pipeline(
            device,
            "surface",
            SURFACE_WGSL,
            "fs_surface",
            &surface_layout,
            format,
            wgpu::BlendState::PREMULTIPLIED_ALPHA_BLENDING,
        );
        let surface_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sheet uniforms"),
            size: std::mem::size_of::<SurfaceUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let noise_texture = device.create_texture_with_data(
            queue,
            &wgpu::TextureDescriptor {
                label: Some("noise"),
                size: wgpu::Extent3d {
                    width: noise.width(),
                    height: noise.height(),
                    depth_or_array_layers: 1,
                },
                mip_level_count: 1,
                sample_count: 1,
                dimension: wgpu::TextureDimension::D2,
                format: wgpu::TextureFormat::Rgba8Unorm,
                usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
                view_formats: &[],
            },
            wgpu::util::TextureDataOrder::LayerMajor,
            noise.as_bytes(),
        );
        let noise_view = noise_texture.create_view(&wgpu::TextureViewDescriptor::default());
        let noise_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("noise"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });
        let content_sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sheet content"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self {
            background,
            card,
            surface,
            surface_layout,
            surface_buffer,
            content_sampler,
            noise_view,
            noise_sampler,
            content: None,
        }
    }
}

/// Software adapters cannot afford a 64-step march per pixel.
fn detect_capability(info: &wgpu::AdapterInfo) -> Capability {
    if std::env::var_os(FORCE_FLAT_ENV).is_some() {
        info!("{FORCE_FLAT_ENV} set");
        return Capability::Unsupported;
    }
    match info.device_type {
        wgpu::DeviceType::Cpu => Capability::Unsupported,
        _ => Capability::RuntimeShaders,
    }
}

fn uniform_entry(binding: u32) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::FRAGMENT,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Uniform,
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    label: &str,
    source: &'static str,
    fragment_entry: &str,
    layout: &wgpu::BindGroupLayout,
    format: wgpu::TextureFormat,
    blend: wgpu::BlendState,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some(label),
        bind_group_layouts: &[layout],
        push_constant_ranges: &[],
    });
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(&pipeline_layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_fullscreen"),
            buffers: &[],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some(fragment_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_trims_to_target() {
        let r = Rect::new(Vec2::new(-10.5, 20.0), Vec2::new(100.0, 50.0));
        assert_eq!(r.clip(64, 64), Some([0, 20, 64, 44]));
    }

    #[test]
    fn clip_rejects_offscreen_rects() {
        let r = Rect::new(Vec2::new(200.0, 0.0), Vec2::new(10.0, 10.0));
        assert_eq!(r.clip(100, 100), None);
    }

    #[test]
    fn border_bounds_cover_the_outer_half_of_the_stroke() {
        let border = BorderDraw {
            rect: Rect::new(Vec2::new(10.0, 20.0), Vec2::new(100.0, 50.0)),
            radius: 8.0,
            color: [1.0; 4],
            width: 2.0,
        };
        let bounds = border.bounds();
        assert_eq!(bounds.origin, Vec2::new(8.0, 18.0));
        assert_eq!(bounds.size, Vec2::new(104.0, 54.0));
        // The pixel just outside the card's right edge is still drawn.
        assert!(bounds.contains(Vec2::new(110.5, 40.0)));
        assert!(!border.rect.contains(Vec2::new(110.5, 40.0)));
    }

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(Vec2::new(10.0, 10.0), Vec2::new(5.0, 5.0));
        assert!(r.contains(Vec2::new(10.0, 14.9)));
        assert!(!r.contains(Vec2::new(15.0, 12.0)));
    }
}
