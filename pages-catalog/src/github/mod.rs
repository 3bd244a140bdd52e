//! GitHub REST API access.
//!
//! The discovery pipeline talks to GitHub only through the [`GitHubApi`]
//! trait. [`OctocrabClient`] is the production implementation; tests supply
//! their own.

mod client;
mod error;
mod models;

pub use client::OctocrabClient;
pub use error::ApiError;
pub use models::{ContentFile, Contributor, PagesSite, RepositoryDetail, RepositorySummary};

use crate::config::AccountKind;
use async_trait::async_trait;

/// Read-only GitHub operations consumed by discovery.
#[async_trait]
pub trait GitHubApi: Send + Sync {
    /// Lists one page of repositories for an account, most recently updated first.
    async fn list_repositories(
        &self,
        account: &str,
        kind: AccountKind,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, ApiError>;

    /// Fetches the full repository record.
    async fn get_repository(&self, owner: &str, repo: &str)
        -> Result<RepositoryDetail, ApiError>;

    /// Fetches the Pages configuration of a repository.
    async fn get_pages(&self, owner: &str, repo: &str) -> Result<PagesSite, ApiError>;

    /// Fetches a single file from the default branch.
    async fn get_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<ContentFile, ApiError>;

    /// Lists the first page of contributors.
    async fn list_contributors(
        &self,
        owner: &str,
        repo: &str,
        per_page: u8,
    ) -> Result<Vec<Contributor>, ApiError>;
}
