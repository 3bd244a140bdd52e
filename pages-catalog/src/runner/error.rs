//! Runner error types.

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration loading errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// Repository listing failed for an account.
    #[error(transparent)]
    Discovery(#[from] crate::discovery::DiscoveryError),

    /// The catalog could not be written.
    #[error(transparent)]
    Catalog(#[from] crate::catalog::CatalogError),

    /// Screenshot capture could not proceed.
    #[error(transparent)]
    Screenshots(#[from] crate::screenshots::ScreenshotError),

    /// The gallery could not be rendered or written.
    #[error(transparent)]
    Gallery(#[from] crate::gallery::GalleryError),
}
