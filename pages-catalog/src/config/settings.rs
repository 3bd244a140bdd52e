//! Configuration file deserialization.

use super::AccountKind;
use serde::Deserialize;
use std::path::PathBuf;

/// Parsed contents of `catalog.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CatalogConfig {
    /// Catalog artifact path (defaults to "apps-data.json").
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Accounts to scan, in processing order.
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,

    #[serde(default)]
    pub screenshots: ScreenshotSettings,

    #[serde(default)]
    pub gallery: GallerySettings,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            accounts: Vec::new(),
            screenshots: ScreenshotSettings::default(),
            gallery: GallerySettings::default(),
        }
    }
}

/// One GitHub account to scan.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AccountConfig {
    /// User or organization login.
    pub name: String,

    pub kind: AccountKind,

    /// Environment variable holding this account's token.
    pub token_env: String,
}

/// Headless browser settings for screenshot capture.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ScreenshotSettings {
    /// Chromium-compatible browser executable.
    pub browser: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Navigation timeout.
    pub timeout_secs: u64,
    /// Extra time given to the page after load for dynamic content.
    pub settle_ms: u64,
}

impl Default for ScreenshotSettings {
    fn default() -> Self {
        Self {
            browser: PathBuf::from("chromium"),
            width: 1200,
            height: 800,
            timeout_secs: 30,
            settle_ms: 3000,
        }
    }
}

/// Static gallery page settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GallerySettings {
    /// Rendered HTML path.
    pub output: PathBuf,
    /// Page heading and `<title>`.
    pub title: String,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("index.html"),
            title: "GitHub Pages Apps".to_string(),
        }
    }
}

pub(crate) fn default_output() -> PathBuf {
    PathBuf::from("apps-data.json")
}
