//! Error types for rendering and image output.

use thiserror::Error;

/// Errors that can occur while executing a draw list or writing the result.
///
/// Degenerate geometry is never reported here: a non-positive scale simply
/// yields an empty draw list.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Cairo drawing error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid surface size {width}x{height}")]
    InvalidSurfaceSize { width: f64, height: f64 },

    #[error("Renderer has not been measured yet")]
    NotMeasured,
}
