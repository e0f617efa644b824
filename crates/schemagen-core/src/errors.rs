//! Error types for the schemagen core.

use thiserror::Error;

/// Errors raised while building examples or emitting the manifest.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No example value can be derived for a type.
    #[error("No example value for type: {0}")]
    NoExample(String),

    /// A named type has no declaration the generator can see.
    #[error("Unresolved type '{0}' (not registered and not declared in the package)")]
    UnresolvedType(String),

    /// Manifest or example serialization failed.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
