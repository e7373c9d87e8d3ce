//! Error types for the prototype cache.

use thiserror::Error;

/// Prototype-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrototypeError {
    /// No prototype is registered under the requested id.
    #[error("shape not found: {0}")]
    NotFound(String),

    /// A prototype with this id is already registered.
    #[error("shape id already registered: {0}")]
    DuplicateId(String),

    /// An independent copy of the prototype could not be produced.
    #[error("failed to duplicate shape: {0}")]
    CloneFailure(String),

    /// Text did not name a known shape kind.
    #[error("unknown shape kind: {0}")]
    UnknownKind(String),
}

/// Result type for prototype operations.
pub type PrototypeResult<T> = Result<T, PrototypeError>;
