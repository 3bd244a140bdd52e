//! Paginated repository listing.

use super::DiscoveryError;
use crate::config::Account;
use crate::github::{GitHubApi, RepositorySummary};
use crate::rate_limit::RateLimitPolicy;
use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, info, warn};

/// Repositories requested per page.
pub const PAGE_SIZE: u8 = 100;

/// Maximum number of pages fetched for one account.
pub const MAX_PAGES: u32 = 50;

/// Position of the page stream.
enum Cursor {
    Next(u32),
    Exhausted,
}

/// Lazily yields pages of repositories for an account.
///
/// Pages are requested in ascending order starting at 1. The stream ends after
/// a short page or after [`MAX_PAGES`] pages. Rate-limit responses are retried
/// for the same page after the policy's wait; any other error ends the stream
/// with that error.
pub fn repository_pages<'a>(
    api: &'a dyn GitHubApi,
    account: &'a Account,
    policy: &'a RateLimitPolicy,
) -> impl Stream<Item = Result<Vec<RepositorySummary>, DiscoveryError>> + 'a {
    stream::try_unfold(Cursor::Next(1), move |cursor| async move {
        let page = match cursor {
            Cursor::Next(page) => page,
            Cursor::Exhausted => return Ok::<_, DiscoveryError>(None),
        };

        if page > MAX_PAGES {
            warn!(
                account = %account.name,
                max_pages = MAX_PAGES,
                "Reached maximum page limit, stopping pagination"
            );
            return Ok(None);
        }

        let repositories = fetch_page(api, account, page, policy).await?;
        info!(
            account = %account.name,
            page,
            count = repositories.len(),
            "Fetched repository page"
        );

        let next = if repositories.len() == usize::from(PAGE_SIZE) {
            Cursor::Next(page + 1)
        } else {
            Cursor::Exhausted
        };
        Ok(Some((repositories, next)))
    })
}

/// Collects every repository of an account, in listing order.
///
/// # Errors
///
/// Returns [`DiscoveryError`] if a page fails with a non rate-limit error.
pub async fn list_all_repositories(
    api: &dyn GitHubApi,
    account: &Account,
    policy: &RateLimitPolicy,
) -> Result<Vec<RepositorySummary>, DiscoveryError> {
    let repositories = repository_pages(api, account, policy)
        .try_fold(Vec::new(), |mut all, page| async move {
            all.extend(page);
            Ok(all)
        })
        .await?;

    info!(
        account = %account.name,
        count = repositories.len(),
        "Listed repositories"
    );
    Ok(repositories)
}

/// Fetches one page, waiting and retrying the same page on rate limits.
async fn fetch_page(
    api: &dyn GitHubApi,
    account: &Account,
    page: u32,
    policy: &RateLimitPolicy,
) -> Result<Vec<RepositorySummary>, DiscoveryError> {
    let mut attempt = 0;
    loop {
        attempt += 1;
        debug!(account = %account.name, page, attempt, "Fetching repository page");

        match api
            .list_repositories(&account.name, account.kind, page, PAGE_SIZE)
            .await
        {
            Ok(repositories) => return Ok(repositories),
            Err(e) if e.is_rate_limited() => {
                warn!(account = %account.name, page, error = %e, "Rate limited while listing");
                policy.wait_before_retry(attempt).await;
            }
            Err(e) => {
                return Err(DiscoveryError::Listing {
                    account: account.name.clone(),
                    page,
                    source: e,
                })
            }
        }
    }
}
