//! Wire models for the GitHub endpoints used by discovery.
//!
//! Only the fields the catalog needs are deserialized; GitHub sends many more.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A repository as returned by the account listing endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositorySummary {
    /// Repository name, unique within the account.
    pub name: String,

    /// Whether GitHub Pages is enabled.
    #[serde(default)]
    pub has_pages: bool,

    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Full repository record from `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepositoryDetail {
    pub name: String,

    pub description: Option<String>,

    /// Primary language detected by GitHub.
    pub language: Option<String>,

    /// Topic labels in the order GitHub returns them.
    #[serde(default)]
    pub topics: Vec<String>,

    #[serde(default)]
    pub stargazers_count: u64,

    #[serde(default)]
    pub forks_count: u64,

    pub updated_at: DateTime<Utc>,

    /// Canonical repository URL (`https://github.com/{owner}/{repo}`).
    pub html_url: String,
}

/// Pages configuration from `GET /repos/{owner}/{repo}/pages`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PagesSite {
    /// Public URL of the site.
    pub html_url: Option<String>,
}

/// A file from `GET /repos/{owner}/{repo}/contents/{path}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ContentFile {
    /// Encoded file body.
    pub content: Option<String>,

    /// Encoding of `content`; GitHub uses `base64`.
    pub encoding: Option<String>,
}

/// One entry of `GET /repos/{owner}/{repo}/contributors`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contributor {
    pub login: Option<String>,

    #[serde(default)]
    pub contributions: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_defaults_missing_pages_flag() {
        let summary: RepositorySummary = serde_json::from_str(r#"{"name": "tool"}"#).unwrap();
        assert_eq!(summary.name, "tool");
        assert!(!summary.has_pages);
        assert!(summary.updated_at.is_none());
    }

    #[test]
    fn detail_parses_github_payload() {
        let detail: RepositoryDetail = serde_json::from_str(
            r#"{
                "name": "tetris",
                "description": null,
                "language": "TypeScript",
                "topics": ["game", "canvas"],
                "stargazers_count": 12,
                "forks_count": 3,
                "updated_at": "2024-06-01T10:00:00Z",
                "html_url": "https://github.com/someone/tetris",
                "private": false
            }"#,
        )
        .unwrap();

        assert_eq!(detail.description, None);
        assert_eq!(detail.language.as_deref(), Some("TypeScript"));
        assert_eq!(detail.topics, vec!["game", "canvas"]);
        assert_eq!(detail.stargazers_count, 12);
        assert_eq!(detail.forks_count, 3);
        assert_eq!(detail.updated_at.to_rfc3339(), "2024-06-01T10:00:00+00:00");
    }
}
