use thiserror::Error;

/// Failures a surface can report to its host.
///
/// None of these are fatal: the driver absorbs them by skipping the frame,
/// so the host never surfaces them to users.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LiquidError {
    #[error("degenerate surface size {width}x{height}")]
    DegenerateSize { width: f32, height: f32 },
    #[error("frame buffer holds {actual} pixels, expected {expected}")]
    FrameSizeMismatch { expected: usize, actual: usize },
    #[error("surface has been torn down")]
    TornDown,
}

pub type Result<T> = std::result::Result<T, LiquidError>;
