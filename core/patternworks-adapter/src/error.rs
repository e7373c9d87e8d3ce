//! Error types for the drawing adapter.

use thiserror::Error;

/// Adapter-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    /// The requested kind has no method on the advanced drawer.
    #[error("unsupported shape: {0}")]
    UnsupportedShape(String),
}

/// Result type for drawing operations.
pub type DrawResult<T> = Result<T, DrawError>;
