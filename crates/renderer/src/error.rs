//! Error types for rendering.

use thiserror::Error;

/// Errors that can occur while producing render output.
#[derive(Debug, Error)]
pub enum RenderError {
    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    PngEncoding(String),

    /// GeoJSON serialization failed.
    #[error("GeoJSON serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
