//! Error types for ray queries.

use thiserror::Error;

/// Errors that can occur while preparing or running a ray query.
///
/// Missing an intersection is never an error; geometric tests report that
/// as `None`.
#[derive(Error, Debug)]
pub enum RayError {
    /// A frustum test was requested without a frustum.
    #[error("frustum argument is missing")]
    MissingFrustum,

    /// Index buffer length is not a whole number of triangles.
    #[error("index buffer length {0} is not a multiple of 3")]
    MeshIndexCount(usize),

    /// An index points past the end of the vertex buffer.
    #[error("triangle {triangle} references vertex {index}, but only {vertex_count} vertices exist")]
    MeshIndexOutOfBounds {
        /// Triangle holding the bad index.
        triangle: usize,
        /// The offending vertex index.
        index: u32,
        /// Length of the vertex buffer.
        vertex_count: usize,
    },

    /// Tolerance settings failed validation.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(String),

    /// Tolerance settings could not be parsed.
    #[error("failed to parse tolerance config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for ray operations.
pub type Result<T> = std::result::Result<T, RayError>;
