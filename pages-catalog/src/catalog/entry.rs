//! Catalog records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One GitHub Pages app in the catalog.
///
/// Field names are part of the artifact contract consumed by the screenshot
/// capturer and the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    /// Repository name, or `{account}.github.io` for the account's root site.
    pub name: String,

    pub description: String,

    /// Public Pages URL.
    pub url: String,

    /// Repository URL.
    pub repository: String,

    /// Relative path of the screenshot bitmap.
    pub screenshot: String,

    /// Capitalized topics followed by the primary language.
    pub tags: Vec<String>,

    pub language: String,

    pub stars: u64,

    pub forks: u64,

    pub updated_at: DateTime<Utc>,

    /// Contributors on the first page of the listing (at most 100).
    pub contributors: u64,

    /// Whether the manifest declares the desktop packaging dependency.
    pub is_electron_app: bool,

    /// Account the app was discovered under.
    pub organization: String,
}
