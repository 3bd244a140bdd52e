//! Rate-limit handling for GitHub API calls.
//!
//! When GitHub rejects a request with a rate-limit response the caller waits a
//! fixed interval and retries the same request. There is no backoff growth and
//! no retry cap: a persistent block stalls the run instead of aborting it.

use std::time::Duration;
use tracing::warn;

/// Wait applied after every rate-limit response.
pub const DEFAULT_RATE_LIMIT_WAIT: Duration = Duration::from_secs(60);

/// Fixed-interval rate-limit wait policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitPolicy {
    wait: Duration,
}

impl Default for RateLimitPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RATE_LIMIT_WAIT)
    }
}

impl RateLimitPolicy {
    /// Creates a policy that waits `wait` after each rate-limit response.
    #[must_use]
    pub const fn new(wait: Duration) -> Self {
        Self { wait }
    }

    /// Returns the wait interval.
    #[must_use]
    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Suspends the current task for the configured interval.
    pub async fn wait_before_retry(&self, attempt: u32) {
        warn!(
            wait_secs = self.wait.as_secs(),
            attempt, "Rate limit hit, waiting before retrying"
        );
        tokio::time::sleep(self.wait).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wait_is_sixty_seconds() {
        assert_eq!(RateLimitPolicy::default().wait(), Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn wait_before_retry_sleeps_for_the_interval() {
        let policy = RateLimitPolicy::new(Duration::from_secs(60));
        let start = tokio::time::Instant::now();

        policy.wait_before_retry(1).await;

        assert_eq!(start.elapsed(), Duration::from_secs(60));
    }
}
