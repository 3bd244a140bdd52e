//! Orchestrates discovery across accounts and writes the catalog.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::catalog::Catalog;
use crate::discovery::discover_account;
use crate::github::{GitHubApi, OctocrabClient};
use crate::summary::DiscoverySummary;
use chrono::Utc;
use tracing::info;

/// Builds a GitHub client from an account token.
pub type ClientFactory =
    Box<dyn Fn(&str) -> Result<Box<dyn GitHubApi>, RunnerError> + Send + Sync>;

fn octocrab_client(token: &str) -> Result<Box<dyn GitHubApi>, RunnerError> {
    Ok(Box::new(OctocrabClient::new(token)?))
}

/// Runs discovery for every account with a credential.
pub struct Runner {
    config: RunnerConfig,
    client_factory: ClientFactory,
}

impl Runner {
    /// Builds a runner that talks to GitHub through octocrab.
    pub fn new(config: RunnerConfig) -> Self {
        Self::with_client_factory(config, Box::new(octocrab_client))
    }

    /// Builds a runner with a custom client factory.
    pub fn with_client_factory(config: RunnerConfig, client_factory: ClientFactory) -> Self {
        Self {
            config,
            client_factory,
        }
    }

    /// Executes discovery and writes the catalog.
    ///
    /// Accounts without a credential contribute nothing. The catalog is only
    /// written once every account has been processed.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if a client cannot be built, an account's
    /// repositories cannot be listed, or the catalog cannot be written.
    pub async fn run(&self) -> Result<DiscoverySummary, RunnerError> {
        let mut summary = DiscoverySummary::new();
        let mut contributions = Vec::new();

        for account in self.config.accounts() {
            let Some(token) = account.token.as_deref() else {
                info!(account = %account.name, "No credential available, skipping account");
                summary.accounts_skipped += 1;
                continue;
            };

            let client = (self.client_factory)(token)?;
            let apps = discover_account(
                client.as_ref(),
                account,
                self.config.rate_limit(),
                &mut summary,
            )
            .await?;

            summary.accounts_processed += 1;
            contributions.push(apps);
        }

        let catalog = Catalog::build(contributions, Utc::now());
        catalog.write(self.config.output_path())?;

        let names: Vec<&str> = catalog.apps.iter().map(|app| app.name.as_str()).collect();
        info!(
            count = catalog.total_apps,
            apps = %names.join(", "),
            "Successfully discovered GitHub Pages apps"
        );
        Ok(summary)
    }
}
