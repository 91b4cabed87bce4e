//! Error type shared by the fallible entry points of the core crate.

/// Errors produced by pixel buffers, rendering, presets, and sessions.
#[derive(Debug, thiserror::Error)]
pub enum RetintError {
    #[error(
        "dimension mismatch: source is {source_width}x{source_height}, target is {target_width}x{target_height}"
    )]
    DimensionMismatch {
        source_width: u32,
        source_height: u32,
        target_width: u32,
        target_height: u32,
    },
    #[error("buffer size mismatch: expected {expected} elements, got {actual}")]
    BufferSize { expected: usize, actual: usize },
    #[error("no image available")]
    NoImage,
    #[error("no image available: {0}")]
    ImageUnavailable(String),
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    #[error("invalid curve: expected 5 levels, got {0}")]
    InvalidCurve(usize),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
