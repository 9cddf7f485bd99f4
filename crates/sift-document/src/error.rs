//! Error types for document loading.

use thiserror::Error;

/// Errors that can occur when loading a document collection.
///
/// The search pipeline itself is total; errors only exist at the
/// document-source boundary.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The collection file could not be read.
    #[error("failed to read document collection: {0}")]
    Io(#[from] std::io::Error),

    /// The collection was not a valid JSON document array.
    #[error("failed to parse document collection: {0}")]
    Parse(#[from] serde_json::Error),
}
