//! Catalog artifact error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the catalog artifact.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read or write the artifact.
    #[error("Failed to access catalog '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The artifact is not valid catalog JSON.
    #[error("Failed to parse catalog '{path}': {source}")]
    JsonError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The temporary file could not replace the artifact.
    #[error("Failed to replace catalog '{path}': {source}")]
    PersistError {
        path: String,
        #[source]
        source: tempfile::PersistError,
    },
}
