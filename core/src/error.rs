use thiserror::Error;

/// Result type for mammoedit operations
pub type Result<T> = std::result::Result<T, MammoeditError>;

/// Error types for mammoedit operations
#[derive(Error, Debug)]
pub enum MammoeditError {
    /// Sample count or mask shape inconsistent with the grid, or a polygon
    /// point beyond the grid bounds
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Region exceeds grid extents after clamping
    #[error("region out of bounds: {0}")]
    OutOfBounds(String),

    /// Degenerate region (zero-extent rectangle or fewer than 3 polygon points)
    #[error("empty region: {0}")]
    EmptyRegion(String),

    /// Unknown study identifier
    #[error("study not found: {0}")]
    StudyNotFound(String),

    /// Preview encoding error
    #[error("encoding error: {0}")]
    EncodingError(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Helper conversions
impl From<String> for MammoeditError {
    fn from(s: String) -> Self {
        MammoeditError::EncodingError(s)
    }
}

impl From<&str> for MammoeditError {
    fn from(s: &str) -> Self {
        MammoeditError::EncodingError(s.to_string())
    }
}

// Convert image crate errors
impl From<image::ImageError> for MammoeditError {
    fn from(e: image::ImageError) -> Self {
        MammoeditError::EncodingError(format!("{}", e))
    }
}
