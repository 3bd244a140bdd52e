//! GitHub API error types.

use thiserror::Error;

/// Errors returned by [`GitHubApi`](super::GitHubApi) operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// GitHub refused the request because of rate limiting (HTTP 403 or 429).
    #[error("Rate limited by GitHub: {message}")]
    RateLimited { message: String },

    /// GitHub answered with a non-success status.
    #[error("GitHub API request failed ({status}): {message}")]
    Status { status: u16, message: String },

    /// Transport or decoding failure.
    #[error("GitHub API error: {0}")]
    GitHub(#[source] octocrab::Error),
}

impl ApiError {
    /// Returns true if the request should be retried after the rate-limit wait.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// Classifies a status code and message the way GitHub responses are classified.
    pub(crate) fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        if is_rate_limit_status(status) {
            Self::RateLimited { message }
        } else {
            Self::Status { status, message }
        }
    }
}

impl From<octocrab::Error> for ApiError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => {
                Self::from_status(source.status_code.as_u16(), source.message)
            }
            other => Self::GitHub(other),
        }
    }
}

fn is_rate_limit_status(status: u16) -> bool {
    status == 403 || status == 429
}
