#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use pages_catalog::config::AccountKind;
use pages_catalog::github::{
    ApiError, ContentFile, Contributor, GitHubApi, PagesSite, RepositoryDetail, RepositorySummary,
};
use pages_catalog::screenshots::{Browser, CaptureError};
use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::Mutex;

/// Scripted response for one listing request.
pub enum Listing {
    Page(Vec<RepositorySummary>),
    RateLimited,
    Status(u16),
}

/// In-memory GitHub with scripted listing pages and per-repository data.
#[derive(Default)]
pub struct FakeGitHub {
    listing: Mutex<HashMap<u32, VecDeque<Listing>>>,
    details: HashMap<String, RepositoryDetail>,
    pages: HashMap<String, String>,
    manifests: HashMap<String, ContentFile>,
    contributors: HashMap<String, usize>,
    list_calls: Mutex<Vec<u32>>,
    detail_calls: Mutex<Vec<String>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    fn script(self, page: u32, response: Listing) -> Self {
        self.listing
            .lock()
            .unwrap()
            .entry(page)
            .or_default()
            .push_back(response);
        self
    }

    /// Queues a successful page.
    pub fn with_page(self, page: u32, repositories: Vec<RepositorySummary>) -> Self {
        self.script(page, Listing::Page(repositories))
    }

    /// Queues a rate-limit response for a page.
    pub fn with_rate_limit(self, page: u32) -> Self {
        self.script(page, Listing::RateLimited)
    }

    /// Queues an error response for a page.
    pub fn with_listing_error(self, page: u32, status: u16) -> Self {
        self.script(page, Listing::Status(status))
    }

    /// Queues `count` full pages of repositories without Pages.
    pub fn with_full_pages(mut self, count: u32) -> Self {
        for page in 1..=count {
            let repositories = (0..100)
                .map(|i| summary(&format!("repo-{page}-{i}"), false))
                .collect();
            self = self.with_page(page, repositories);
        }
        self
    }

    pub fn with_repository(mut self, detail: RepositoryDetail) -> Self {
        self.details.insert(detail.name.clone(), detail);
        self
    }

    pub fn with_pages_url(mut self, repo: &str, url: &str) -> Self {
        self.pages.insert(repo.to_string(), url.to_string());
        self
    }

    /// Serves `text` base64-encoded as the repository's manifest.
    pub fn with_manifest(mut self, repo: &str, text: &str) -> Self {
        use base64::Engine;
        self.manifests.insert(
            repo.to_string(),
            ContentFile {
                content: Some(base64::engine::general_purpose::STANDARD.encode(text)),
                encoding: Some("base64".to_string()),
            },
        );
        self
    }

    pub fn with_raw_manifest(mut self, repo: &str, file: ContentFile) -> Self {
        self.manifests.insert(repo.to_string(), file);
        self
    }

    pub fn with_contributors(mut self, repo: &str, count: usize) -> Self {
        self.contributors.insert(repo.to_string(), count);
        self
    }

    /// Page numbers requested, in order.
    pub fn list_calls(&self) -> Vec<u32> {
        self.list_calls.lock().unwrap().clone()
    }

    /// Repositories whose detail was requested, in order.
    pub fn detail_calls(&self) -> Vec<String> {
        self.detail_calls.lock().unwrap().clone()
    }
}

fn not_found() -> ApiError {
    ApiError::Status {
        status: 404,
        message: "Not Found".to_string(),
    }
}

#[async_trait]
impl GitHubApi for FakeGitHub {
    async fn list_repositories(
        &self,
        _account: &str,
        _kind: AccountKind,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<RepositorySummary>, ApiError> {
        assert_eq!(per_page, 100);
        self.list_calls.lock().unwrap().push(page);

        let next = self
            .listing
            .lock()
            .unwrap()
            .get_mut(&page)
            .and_then(VecDeque::pop_front);

        match next {
            Some(Listing::Page(repositories)) => Ok(repositories),
            Some(Listing::RateLimited) => Err(ApiError::RateLimited {
                message: "API rate limit exceeded".to_string(),
            }),
            Some(Listing::Status(status)) => Err(ApiError::Status {
                status,
                message: "listing failed".to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn get_repository(
        &self,
        _owner: &str,
        repo: &str,
    ) -> Result<RepositoryDetail, ApiError> {
        self.detail_calls.lock().unwrap().push(repo.to_string());
        self.details.get(repo).cloned().ok_or_else(not_found)
    }

    async fn get_pages(&self, _owner: &str, repo: &str) -> Result<PagesSite, ApiError> {
        self.pages
            .get(repo)
            .map(|url| PagesSite {
                html_url: Some(url.clone()),
            })
            .ok_or_else(not_found)
    }

    async fn get_content(
        &self,
        _owner: &str,
        repo: &str,
        path: &str,
    ) -> Result<ContentFile, ApiError> {
        assert_eq!(path, "package.json");
        self.manifests.get(repo).cloned().ok_or_else(not_found)
    }

    async fn list_contributors(
        &self,
        _owner: &str,
        repo: &str,
        per_page: u8,
    ) -> Result<Vec<Contributor>, ApiError> {
        assert_eq!(per_page, 100);
        match self.contributors.get(repo) {
            Some(count) => Ok((0..*count)
                .map(|i| Contributor {
                    login: Some(format!("user{i}")),
                    contributions: 1,
                })
                .collect()),
            None => Err(ApiError::Status {
                status: 500,
                message: "contributors unavailable".to_string(),
            }),
        }
    }
}

pub fn summary(name: &str, has_pages: bool) -> RepositorySummary {
    RepositorySummary {
        name: name.to_string(),
        has_pages,
        updated_at: None,
    }
}

pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

pub fn detail(owner: &str, name: &str, updated_at: DateTime<Utc>) -> RepositoryDetail {
    RepositoryDetail {
        name: name.to_string(),
        description: None,
        language: None,
        topics: Vec::new(),
        stargazers_count: 0,
        forks_count: 0,
        updated_at,
        html_url: format!("https://github.com/{owner}/{name}"),
    }
}

/// Browser that writes a small file on success and fails for listed URLs.
#[derive(Default)]
pub struct FakeBrowser {
    failing: HashMap<String, String>,
    partial_on_failure: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, url: &str, message: &str) -> Self {
        self.failing.insert(url.to_string(), message.to_string());
        self
    }

    /// Writes a truncated bitmap before failing.
    pub fn with_partial_output(mut self) -> Self {
        self.partial_on_failure = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Browser for FakeBrowser {
    async fn capture(&self, url: &str, destination: &Path) -> Result<(), CaptureError> {
        self.calls.lock().unwrap().push(url.to_string());

        if let Some(message) = self.failing.get(url) {
            if self.partial_on_failure {
                std::fs::write(destination, b"\x89PN").unwrap();
            }
            return Err(CaptureError::BrowserFailed {
                status: "exit status: 1".to_string(),
                stderr: message.clone(),
            });
        }

        std::fs::write(destination, b"\x89PNG\r\n\x1a\n").unwrap();
        Ok(())
    }
}
