//! Error types for the grid renderer
//!
//! Configuration problems are reported before any drawing happens;
//! everything else comes from persisting the finished canvas.

use thiserror::Error;

/// Custom error type for grid rendering operations
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image error: {0}")]
    ImageError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),
}

/// Result type alias for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Helper to convert serde_json errors
impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::JsonError(err.to_string())
    }
}

/// Encoder I/O failures stay I/O failures; the rest are image errors
impl From<image::ImageError> for GridError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(io) => GridError::IoError(io),
            other => GridError::ImageError(other.to_string()),
        }
    }
}
