//! Error types for figure rendering.

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

/// Result type alias using RenderError.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while building or encoding a figure.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Requested canvas is too small or cannot be allocated
    #[error("invalid figure size {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    /// Field has no finite values to colour
    #[error("no finite values to render: {0}")]
    EmptyData(String),

    /// Style file is malformed
    #[error("invalid style: {0}")]
    Style(String),

    /// Coastline file holds an unusable geometry
    #[error("invalid coastline geometry: {0}")]
    InvalidGeometry(String),

    /// Drawing on the plotters backend failed
    #[error("drawing failed: {0}")]
    Draw(String),

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Draw(err.to_string())
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Encode(err.to_string())
    }
}
