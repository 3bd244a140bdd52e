//! Runner configuration.

use crate::config::Account;
use crate::rate_limit::RateLimitPolicy;
use std::path::{Path, PathBuf};

/// Configuration for a discovery run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Where the catalog artifact is written.
    output_path: PathBuf,
    /// Accounts in processing order, credentials already resolved.
    accounts: Vec<Account>,
    /// Wait applied to rate-limited listing requests.
    rate_limit: RateLimitPolicy,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(output_path: PathBuf, accounts: Vec<Account>) -> Self {
        Self {
            output_path,
            accounts,
            rate_limit: RateLimitPolicy::default(),
        }
    }

    /// Sets a custom rate-limit policy.
    pub fn with_rate_limit_policy(mut self, rate_limit: RateLimitPolicy) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Returns the catalog output path.
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Returns the configured accounts.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Returns the rate-limit policy.
    pub fn rate_limit(&self) -> &RateLimitPolicy {
        &self.rate_limit
    }
}
