mod demo;
mod gpu;

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use glam::Vec2;
use instant::Instant;
use log::{info, warn};
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use liquid_core::constants::{
    CARD_CONTAINER_COLOR, DEMO_BACKGROUND_COLOR, DEMO_CARD_COLOR, DEMO_VISCOSITY, GRAVITY_EARTH,
};
use liquid_core::{
    CardStyle, FixedStepClock, FrameClock, LiquidSurfaceState, MotionController, NoiseCache,
    SurfaceDriver, SurfaceProgram, SurfaceRenderer, WallClock,
};

use demo::SplitDemo;
use gpu::{BorderDraw, FrameDraw, GpuState, Rect, SheetDraw, SurfaceDraw};

const SHEET_MARGIN_PX: f32 = 24.0;
const TILT_STEP: f32 = 0.25;

/// Clock shared by every card of one split so the halves sample the same
/// instant of the scene.
struct FrameTime(Rc<Cell<f32>>);

impl FrameClock for FrameTime {
    fn next_frame(&mut self) -> f32 {
        self.0.get()
    }
}

/// Top half holds the cards; the sheet fills the bottom half inside a margin.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Regions {
    cards: Rect,
    sheet: Rect,
}

impl Regions {
    fn for_window(size: Vec2) -> Self {
        let half = size.y * 0.5;
        let margin = Vec2::splat(SHEET_MARGIN_PX);
        Self {
            cards: Rect::new(Vec2::ZERO, Vec2::new(size.x, half)),
            sheet: Rect::new(
                Vec2::new(0.0, half) + margin,
                (Vec2::new(size.x, half) - 2.0 * margin).max(Vec2::ZERO),
            ),
        }
    }
}

/// Every card carries the style's outline, shaded or flat.
fn card_border(style: &CardStyle, rect: Rect, radius: f32) -> BorderDraw {
    BorderDraw {
        rect,
        radius,
        color: style.border_color,
        width: style.border_width,
    }
}

struct App {
    start: Instant,
    demo: SplitDemo,
    card_time: Rc<Cell<f32>>,
    cards: [SurfaceDriver<FrameTime>; 2],
    content: SurfaceDriver<WallClock>,
    sheet: SurfaceDriver<FixedStepClock>,
    card_state: LiquidSurfaceState,
    sheet_state: LiquidSurfaceState,
    style: CardStyle,
    motion: MotionController,
    tilt: Vec2,
    cursor: Vec2,
    window_size: Vec2,
}

impl App {
    fn new(gpu: &GpuState, noise: Arc<liquid_core::NoiseTexture>, window_size: Vec2) -> Self {
        let capability = gpu.capability();
        let style = CardStyle::default().with_container_color(DEMO_CARD_COLOR);
        let card_state = LiquidSurfaceState::new(DEMO_VISCOSITY, 0.0);
        let sheet_state = LiquidSurfaceState::sheet();
        let card_time = Rc::new(Cell::new(0.0));
        let card = || {
            SurfaceDriver::new(
                SurfaceRenderer::select(capability, SurfaceProgram::Card, style.container_color),
                FrameTime(Rc::clone(&card_time)),
                card_state.corner_radius,
            )
        };
        let cards = [card(), card()];
        let content = SurfaceDriver::new(
            SurfaceRenderer::select(capability, SurfaceProgram::Background, DEMO_BACKGROUND_COLOR),
            WallClock::new(),
            0.0,
        );
        let sheet = SurfaceDriver::new(
            SurfaceRenderer::select(
                capability,
                SurfaceProgram::Distortion { noise },
                CARD_CONTAINER_COLOR,
            ),
            FixedStepClock::default(),
            sheet_state.corner_radius,
        );
        let motion = MotionController::new();
        motion.start();

        let start = Instant::now();
        Self {
            start,
            demo: SplitDemo::new(0.0),
            card_time,
            cards,
            content,
            sheet,
            card_state,
            sheet_state,
            style,
            motion,
            tilt: Vec2::ZERO,
            cursor: Vec2::ZERO,
            window_size,
        }
    }

    fn now(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    fn regions(&self) -> Regions {
        Regions::for_window(self.window_size)
    }

    fn cursor_moved(&mut self, position: Vec2) {
        self.cursor = position;
        let sheet = self.regions().sheet;
        self.sheet_state.drag(position - sheet.origin, sheet.size);
    }

    fn pointer_button(&mut self, state: ElementState) {
        let sheet = self.regions().sheet;
        match state {
            ElementState::Pressed if sheet.contains(self.cursor) => {
                self.sheet_state.press(self.cursor - sheet.origin, sheet.size)
            }
            ElementState::Pressed => {}
            ElementState::Released => self.sheet_state.release(),
        }
    }

    /// Arrow keys stand in for an accelerometer.
    fn nudge_tilt(&mut self, by: Vec2) {
        self.tilt = (self.tilt + by).clamp(Vec2::NEG_ONE, Vec2::ONE);
        self.motion.on_sensor_changed(
            -self.tilt.x * GRAVITY_EARTH,
            self.tilt.y * GRAVITY_EARTH,
            GRAVITY_EARTH,
        );
    }

    fn toggle_split(&mut self) {
        let now = self.now();
        self.demo.toggle(now);
        info!("split: {}", self.demo.is_split());
    }

    fn teardown(&mut self) {
        for card in &mut self.cards {
            card.teardown();
        }
        self.content.teardown();
        self.sheet.teardown();
        self.motion.stop();
    }

    fn frame(&mut self) -> FrameDraw<'_> {
        let now = self.now();
        self.card_time.set(now);
        self.card_state.corner_radius = self.demo.corner_radius(now);
        let regions = self.regions();
        let motion = self.motion.snapshot();

        let mut card_inputs = Vec::with_capacity(2);
        let placements = self
            .demo
            .placements(now, regions.cards.origin, regions.cards.size);
        for (index, (driver, card)) in self.cards.iter_mut().zip(placements).enumerate() {
            driver.set_radius(self.card_state.corner_radius);
            driver.set_layout(Some(card.layout));
            if let Some(inputs) = driver.tick(card.size, self.card_state.distortion(motion)) {
                card_inputs.push((index, Rect::new(card.origin, card.size), inputs));
            }
        }

        let sheet_rect = regions.sheet;
        let sheet_inputs = self
            .content
            .tick(sheet_rect.size, Default::default())
            .zip(
                self.sheet
                    .tick(sheet_rect.size, self.sheet_state.distortion(motion)),
            );

        let mut cards = Vec::with_capacity(card_inputs.len());
        let mut borders = Vec::new();
        for (index, rect, inputs) in card_inputs {
            let renderer = self.cards[index].renderer();
            borders.push(card_border(&self.style, rect, inputs.scene.radius));
            cards.push(SurfaceDraw {
                renderer,
                rect,
                inputs,
            });
        }
        let sheet = sheet_inputs.map(|(content, surface)| SheetDraw {
            content: SurfaceDraw {
                renderer: self.content.renderer(),
                rect: Rect::new(Vec2::ZERO, sheet_rect.size),
                inputs: content,
            },
            surface: SurfaceDraw {
                renderer: self.sheet.renderer(),
                rect: sheet_rect,
                inputs: surface,
            },
        });

        FrameDraw {
            clear: DEMO_BACKGROUND_COLOR,
            cards,
            borders,
            sheet,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let noise = NoiseCache::new().get_default();
    info!("noise texture {}x{}", noise.width(), noise.height());

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Liquid surfaces")
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(GpuState::new(&window, &noise))?;
    let size = window.inner_size();
    let mut app = App::new(
        &gpu,
        Arc::clone(&noise),
        Vec2::new(size.width as f32, size.height as f32),
    );
    info!("space splits the card, arrows tilt, drag the lower sheet");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                app.window_size = Vec2::new(size.width as f32, size.height as f32);
                gpu.resize(size);
            }
            WindowEvent::CloseRequested => {
                app.teardown();
                elwt.exit();
            }
            WindowEvent::CursorMoved { position, .. } => {
                app.cursor_moved(Vec2::new(position.x as f32, position.y as f32))
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => app.pointer_button(state),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Space) if !repeat => app.toggle_split(),
                Key::Named(NamedKey::ArrowLeft) => app.nudge_tilt(Vec2::new(-TILT_STEP, 0.0)),
                Key::Named(NamedKey::ArrowRight) => app.nudge_tilt(Vec2::new(TILT_STEP, 0.0)),
                Key::Named(NamedKey::ArrowUp) => app.nudge_tilt(Vec2::new(0.0, -TILT_STEP)),
                Key::Named(NamedKey::ArrowDown) => app.nudge_tilt(Vec2::new(0.0, TILT_STEP)),
                Key::Named(NamedKey::Escape) => {
                    app.teardown();
                    elwt.exit();
                }
                _ => {}
            },
            _ => {}
        },
        Event::AboutToWait => {
            if app.window_size.min_element() <= 0.0 {
                return;
            }
            let frame = app.frame();
            match gpu.render(&frame) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    warn!("out of GPU memory, exiting");
                    elwt.exit();
                }
                Err(_) => {}
            }
        }
        _ => {}
    })?;
    Ok(())
}
