// crates/atlas-core/src/error.rs
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, AtlasError>;

/// Errors surfaced by the atlas pipeline and its I/O helpers.
///
/// Only [`AtlasError::InputShape`] and [`AtlasError::DuplicateCode`] can come
/// out of the pure pipeline itself; per-feature defects (missing geometry,
/// missing properties, malformed coordinates) are absorbed into defaulted
/// fields and never become errors.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("binary snapshot error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("{0}")]
    NotFound(String),

    #[error("input is not a FeatureCollection: {0}")]
    InputShape(String),

    /// Two retained features resolved to the same ISO code and the run was
    /// configured with [`CollisionPolicy::Reject`](crate::CollisionPolicy).
    #[error("duplicate ISO code {code:?} (records #{first} and #{second})")]
    DuplicateCode {
        code: String,
        first: usize,
        second: usize,
    },
}
