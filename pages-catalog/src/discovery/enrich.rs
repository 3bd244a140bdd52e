//! Turning a Pages-enabled repository into a catalog entry.

use super::manifest::is_desktop_app;
use super::EnrichError;
use crate::catalog::AppEntry;
use crate::config::Account;
use crate::github::{GitHubApi, RepositorySummary};
use tracing::{debug, info, info_span, Instrument};
use url::Url;

/// Description used when the repository has none.
pub const DEFAULT_DESCRIPTION: &str = "No description available";

/// Language recorded when GitHub detected none.
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// Directory screenshot paths are rooted at.
pub const SCREENSHOT_DIR: &str = "screenshots";

/// Contributors requested; the count never exceeds this.
pub const CONTRIBUTORS_PAGE_SIZE: u8 = 100;

/// Builds a catalog entry for one repository.
///
/// Only the repository detail fetch is required. The Pages URL, contributor
/// count and desktop packaging check fall back to defaults on failure.
///
/// # Errors
///
/// Returns [`EnrichError::Detail`] if the repository detail cannot be fetched.
pub async fn enrich_repository(
    api: &dyn GitHubApi,
    account: &Account,
    summary: &RepositorySummary,
) -> Result<AppEntry, EnrichError> {
    let span = info_span!("enrich", account = %account.name, repo = %summary.name);

    async {
        let owner = account.name.as_str();
        let repo = summary.name.as_str();

        let detail = api
            .get_repository(owner, repo)
            .await
            .map_err(|e| EnrichError::Detail {
                repository: format!("{owner}/{repo}"),
                source: e,
            })?;

        let url = resolve_pages_url(api, owner, repo).await;
        let contributors = count_contributors(api, owner, repo).await;
        let is_electron_app = is_desktop_app(api, owner, repo).await;

        let name = if is_root_site(owner, repo) {
            root_site_name(owner)
        } else {
            repo.to_string()
        };

        let entry = AppEntry {
            screenshot: screenshot_path(owner, repo),
            tags: build_tags(&detail.topics, detail.language.as_deref()),
            description: detail
                .description
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            language: detail
                .language
                .unwrap_or_else(|| UNKNOWN_LANGUAGE.to_string()),
            name,
            url,
            repository: detail.html_url,
            stars: detail.stargazers_count,
            forks: detail.forks_count,
            updated_at: detail.updated_at,
            contributors,
            is_electron_app,
            organization: owner.to_string(),
        };

        info!(app = %entry.name, url = %entry.url, "Added app");
        Ok(entry)
    }
    .instrument(span)
    .await
}

/// Returns the Pages URL reported by GitHub, or the conventional URL.
///
/// Never fails: any lookup error or unusable URL falls back to
/// [`fallback_pages_url`].
pub async fn resolve_pages_url(api: &dyn GitHubApi, owner: &str, repo: &str) -> String {
    match api.get_pages(owner, repo).await {
        Ok(site) => match site.html_url {
            Some(html_url) if is_web_url(&html_url) => return html_url,
            other => debug!(repo, html_url = ?other, "Pages API returned no usable URL"),
        },
        Err(e) => debug!(repo, error = %e, "Could not get Pages info"),
    }

    let url = fallback_pages_url(owner, repo);
    info!(repo, url = %url, "Constructed Pages URL by convention");
    url
}

/// Builds the conventional Pages URL for a repository.
///
/// The account's root site lives at the bare domain, every other repository
/// under `/{repo}`.
#[must_use]
pub fn fallback_pages_url(owner: &str, repo: &str) -> String {
    let host = format!("{}.github.io", owner.to_lowercase());
    if is_root_site(owner, repo) {
        format!("https://{host}")
    } else {
        format!("https://{host}/{repo}")
    }
}

/// Returns true if `repo` is the account's `{owner}.github.io` repository.
#[must_use]
pub fn is_root_site(owner: &str, repo: &str) -> bool {
    repo.eq_ignore_ascii_case(&root_site_name(owner))
}

fn root_site_name(owner: &str) -> String {
    format!("{owner}.github.io")
}

fn is_web_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| matches!(url.scheme(), "https" | "http"))
        .unwrap_or(false)
}

/// Capitalized topics in order, followed by the language if there is one.
#[must_use]
pub fn build_tags(topics: &[String], language: Option<&str>) -> Vec<String> {
    topics
        .iter()
        .map(|topic| capitalize(topic))
        .chain(language.map(str::to_string))
        .collect()
}

/// Uppercases the first character and leaves the rest unchanged.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Relative screenshot path for a repository of an account.
#[must_use]
pub fn screenshot_path(owner: &str, repo: &str) -> String {
    format!("{SCREENSHOT_DIR}/{owner}-{repo}.png")
}

/// Counts contributors on the first listing page; failures count as zero.
pub async fn count_contributors(api: &dyn GitHubApi, owner: &str, repo: &str) -> u64 {
    match api
        .list_contributors(owner, repo, CONTRIBUTORS_PAGE_SIZE)
        .await
    {
        Ok(contributors) => contributors.len() as u64,
        Err(e) => {
            debug!(repo, error = %e, "Could not list contributors");
            0
        }
    }
}
