//! [`GitHubApi`] implementation backed by octocrab.

use super::{
    ApiError, ContentFile, Contributor, GitHubApi, PagesSite, RepositoryDetail, RepositorySummary,
};
use crate::config::AccountKind;
use async_trait::async_trait;
use octocrab::Octocrab;
use serde::Serialize;
use tracing::debug;

/// Authenticated GitHub client for a single account.
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Octocrab,
}

#[derive(Serialize)]
struct ListRepositoriesParams {
    per_page: u8,
    page: u32,
    sort: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Serialize)]
struct PerPageParams {
    per_page: u8,
}

impl OctocrabClient {
    /// Builds a client authenticated with a personal access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(token: &str) -> Result<Self, octocrab::Error> {
        let octocrab = Octocrab::builder()
            .personal_token(token.to_string())
            .build()?;
        Ok(Self { octocrab })
    }
}

/// Route listing an account's repositories.
fn repositories_route(account: &str, kind: AccountKind) -> String {
    match kind {
        AccountKind::Individual => format!("/users/{account}/repos"),
        AccountKind::Organization => format!("/orgs/{account}/repos"),
    }
}

#[async_trait]
impl GitHubApi for OctocrabClient {
    async fn list_repositories(
        &self,
        account: &str,
        kind: AccountKind,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, ApiError> {
        let route = repositories_route(account, kind);
        let params = ListRepositoriesParams {
            per_page,
            page,
            sort: "updated",
            kind: "all",
        };
        debug!(route = %route, page, "GET repositories");
        Ok(self.octocrab.get(route, Some(&params)).await?)
    }

    async fn get_repository(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<RepositoryDetail, ApiError> {
        let route = format!("/repos/{owner}/{repo}");
        Ok(self.octocrab.get(route, None::<&()>).await?)
    }

    async fn get_pages(&self, owner: &str, repo: &str) -> Result<PagesSite, ApiError> {
        let route = format!("/repos/{owner}/{repo}/pages");
        Ok(self.octocrab.get(route, None::<&()>).await?)
    }

    async fn get_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<ContentFile, ApiError> {
        let route = format!("/repos/{owner}/{repo}/contents/{path}");
        Ok(self.octocrab.get(route, None::<&()>).await?)
    }

    async fn list_contributors(
        &self,
        owner: &str,
        repo: &str,
        per_page: u8,
    ) -> Result<Vec<Contributor>, ApiError> {
        let route = format!("/repos/{owner}/{repo}/contributors");
        let params = PerPageParams { per_page };
        Ok(self.octocrab.get(route, Some(&params)).await?)
    }
}
