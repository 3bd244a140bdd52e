//! Repository discovery error types.

use crate::github::ApiError;
use thiserror::Error;

/// Errors that abort discovery for an account.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Listing a page of repositories failed with a non rate-limit error.
    #[error("Failed to list repositories for '{account}' (page {page}): {source}")]
    Listing {
        account: String,
        page: u32,
        #[source]
        source: ApiError,
    },
}

/// Errors that drop a single repository from the catalog.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// The repository detail fetch failed.
    #[error("Failed to fetch repository '{repository}': {source}")]
    Detail {
        repository: String,
        #[source]
        source: ApiError,
    },
}

/// Reasons the dependency manifest could not be inspected.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest could not be fetched.
    #[error("Failed to fetch manifest: {0}")]
    Fetch(#[from] ApiError),

    /// The contents response had no body.
    #[error("Manifest response has no content")]
    MissingContent,

    /// The contents response used an encoding other than base64.
    #[error("Unsupported manifest encoding '{0}'")]
    UnsupportedEncoding(String),

    /// The base64 body could not be decoded.
    #[error("Failed to decode manifest: {0}")]
    Decode(#[from] base64::DecodeError),

    /// The decoded body is not UTF-8.
    #[error("Manifest is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The manifest is not valid JSON.
    #[error("Failed to parse manifest: {0}")]
    Parse(#[from] serde_json::Error),
}
