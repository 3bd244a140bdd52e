//! Gallery rendering error types.

use thiserror::Error;

/// Gallery rendering error.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Template registration error.
    #[error("Template registration error: {0}")]
    RegistrationError(#[from] handlebars::TemplateError),

    /// The rendered page could not be written.
    #[error("Failed to write gallery '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
