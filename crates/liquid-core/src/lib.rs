pub mod constants;
pub mod distort;
pub mod error;
pub mod frame;
pub mod layout;
pub mod mask;
pub mod noise;
pub mod params;
pub mod raymarch;
pub mod renderer;
pub mod sdf;
pub mod shading;
pub mod state;
pub mod texture;
pub mod uniforms;

// Each program is the shared helpers followed by its own entry point.
pub static BACKGROUND_WGSL: &str = concat!(
    include_str!("../shaders/common.wgsl"),
    include_str!("../shaders/background.wgsl")
);
pub static CARD_WGSL: &str = concat!(
    include_str!("../shaders/common.wgsl"),
    include_str!("../shaders/card.wgsl")
);
pub static SURFACE_WGSL: &str = concat!(
    include_str!("../shaders/common.wgsl"),
    include_str!("../shaders/surface.wgsl")
);
pub static FLAT_WGSL: &str = concat!(
    include_str!("../shaders/common.wgsl"),
    include_str!("../shaders/flat.wgsl")
);

pub use distort::{ContentLayer, SolidContent};
pub use error::{LiquidError, Result};
pub use frame::{FixedStepClock, FrameClock, SurfaceDriver, WallClock};
pub use layout::{CardLayout, CardPlacement, SplitLayout};
pub use noise::cnoise;
pub use params::{DistortionParams, FrameInputs, SceneParams};
pub use raymarch::{march, screen_uv, March, Ray};
pub use renderer::{
    Capability, FlatFallback, Frame, RenderOutput, SurfaceProgram, SurfaceRenderer,
};
pub use sdf::Scene;
pub use shading::ShadingPreset;
pub use state::*;
pub use texture::{NoiseCache, NoiseTexture};
pub use uniforms::{BackgroundUniforms, CardUniforms, FlatUniforms, SurfaceUniforms};
