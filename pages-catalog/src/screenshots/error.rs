//! Screenshot capture error types.

use crate::catalog::CatalogError;
use thiserror::Error;

/// Errors that abort a screenshot run.
#[derive(Debug, Error)]
pub enum ScreenshotError {
    /// The catalog could not be read.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A screenshot directory or marker file could not be written.
    #[error("Failed to write '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors for a single capture.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The browser process could not be started.
    #[error("Failed to launch browser '{browser}': {source}")]
    Launch {
        browser: String,
        #[source]
        source: std::io::Error,
    },

    /// The URL could not be reached.
    #[error("Navigation to '{url}' failed: {message}")]
    Navigation { url: String, message: String },

    /// The page did not finish within the timeout.
    #[error("Navigation timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// The browser exited with a failure status.
    #[error("Browser exited with {status}: {stderr}")]
    BrowserFailed { status: String, stderr: String },

    /// The browser exited successfully but wrote no bitmap.
    #[error("Browser did not write a screenshot to '{path}'")]
    MissingOutput { path: String },
}
