//! Per-item result types.

/// Result of enriching a single repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingResult {
    /// The repository was added to the catalog.
    Added {
        /// Repository name.
        repository: String,
    },

    /// The repository was dropped from the catalog.
    Failed {
        /// Repository name.
        repository: String,
        /// Error message.
        error: String,
    },
}

/// Result of capturing a single screenshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureResult {
    /// The bitmap was written.
    Captured {
        /// App name.
        app: String,
        /// Bitmap path.
        path: String,
    },

    /// Capture failed and a marker file was written instead.
    Failed {
        /// App name.
        app: String,
        /// Error message.
        error: String,
    },
}
