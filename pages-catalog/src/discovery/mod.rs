//! GitHub Pages discovery.
//!
//! Lists every repository of an account, keeps the ones with Pages enabled
//! and turns each into an [`AppEntry`]. Repositories that cannot be enriched
//! are logged and skipped.

mod enrich;
mod error;
mod manifest;
mod paginator;

pub use enrich::{
    build_tags, capitalize, count_contributors, enrich_repository, fallback_pages_url,
    is_root_site, resolve_pages_url, screenshot_path, CONTRIBUTORS_PAGE_SIZE,
    DEFAULT_DESCRIPTION, SCREENSHOT_DIR, UNKNOWN_LANGUAGE,
};
pub use error::{DiscoveryError, EnrichError, ManifestError};
pub use manifest::{
    fetch_manifest, is_desktop_app, PackageManifest, DESKTOP_DEPENDENCY, MANIFEST_PATH,
};
pub use paginator::{list_all_repositories, repository_pages, MAX_PAGES, PAGE_SIZE};

use crate::catalog::AppEntry;
use crate::config::Account;
use crate::github::{GitHubApi, RepositorySummary};
use crate::rate_limit::RateLimitPolicy;
use crate::summary::{DiscoverySummary, ProcessingResult};
use tracing::{debug, error, info, info_span, Instrument};

/// Discovers the Pages apps of one account.
///
/// Entries are returned in listing order (most recently updated first).
///
/// # Errors
///
/// Returns [`DiscoveryError`] if listing repositories fails. Enrichment
/// failures only drop the affected repository.
pub async fn discover_account(
    api: &dyn GitHubApi,
    account: &Account,
    policy: &RateLimitPolicy,
    summary: &mut DiscoverySummary,
) -> Result<Vec<AppEntry>, DiscoveryError> {
    let span = info_span!("discover", account = %account.name, kind = %account.kind);

    async {
        info!("Starting GitHub Pages discovery");

        let repositories = list_all_repositories(api, account, policy).await?;
        summary.repositories_listed += repositories.len();

        let pages = pages_repositories(repositories);
        summary.pages_repositories += pages.len();
        info!(count = pages.len(), "Repositories with GitHub Pages");

        let mut apps = Vec::with_capacity(pages.len());
        for repository in &pages {
            let result = match enrich_repository(api, account, repository).await {
                Ok(app) => {
                    let result = ProcessingResult::Added {
                        repository: repository.name.clone(),
                    };
                    apps.push(app);
                    result
                }
                Err(e) => {
                    error!(repo = %repository.name, error = %e, "Error processing repository");
                    ProcessingResult::Failed {
                        repository: repository.name.clone(),
                        error: e.to_string(),
                    }
                }
            };
            summary.record_result(&result);
        }

        info!(count = apps.len(), "Discovery complete");
        Ok(apps)
    }
    .instrument(span)
    .await
}

/// Keeps only repositories with GitHub Pages enabled, preserving order.
#[must_use]
pub fn pages_repositories(repositories: Vec<RepositorySummary>) -> Vec<RepositorySummary> {
    repositories
        .into_iter()
        .filter(|repository| {
            debug!(repo = %repository.name, has_pages = repository.has_pages, "Pages check");
            repository.has_pages
        })
        .collect()
}
