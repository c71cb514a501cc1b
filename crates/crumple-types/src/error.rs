//! Error types for the crumple engine.
//!
//! All crates return `CrumpleResult<T>` from fallible operations.
//! Routine conditions (uninitialized state, empty anchor lists,
//! exhausted vertex budgets) are not errors and never surface here.

use thiserror::Error;

/// Unified error type for the crumple engine.
#[derive(Debug, Error)]
pub enum CrumpleError {
    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// Configuration value is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The live vertex buffer no longer matches the captured deformation state.
    ///
    /// Raised when a mesh is swapped after initialization without
    /// re-initializing. This is a wiring error on the host side.
    #[error("Vertex count mismatch: state was captured for {expected} vertices, mesh has {actual}")]
    VertexCountMismatch {
        expected: usize,
        actual: usize,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for `Result<T, CrumpleError>`.
pub type CrumpleResult<T> = Result<T, CrumpleError>;
