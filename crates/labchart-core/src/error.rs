// File: crates/labchart-core/src/error.rs
// Summary: Error type returned by chart validation, rendering, and export.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RenderError>;

#[derive(Debug, Error)]
pub enum RenderError {
    /// The chart description violates a layout invariant (lengths, scale, DPI).
    #[error("invalid chart spec: {0}")]
    InvalidSpec(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to create raster surface ({width}x{height})")]
    Surface { width: i32, height: i32 },

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

impl RenderError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        RenderError::InvalidSpec(msg.into())
    }
}

impl From<png::EncodingError> for RenderError {
    fn from(err: png::EncodingError) -> Self {
        match err {
            png::EncodingError::IoError(e) => RenderError::Io(e),
            other => RenderError::Encode(other.to_string()),
        }
    }
}
