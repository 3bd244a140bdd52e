//! View models built from the catalog artifact.
//!
//! The artifact is read leniently: only the `apps` array is required, and any
//! field of an app may be missing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Card colours, assigned round-robin by position.
pub const COLOR_CLASSES: [&str; 8] = [
    "color-coral",
    "color-orange",
    "color-amber",
    "color-emerald",
    "color-blue",
    "color-indigo",
    "color-pink",
    "color-teal",
];

/// Message shown when the catalog cannot be displayed.
pub const ERROR_MESSAGE: &str =
    "The apps catalog could not be loaded. Please try again later.";

/// One app as found in the artifact.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CardSource {
    name: Option<String>,
    description: Option<String>,
    url: Option<String>,
    repository: Option<String>,
    screenshot: Option<String>,
    tags: Option<Vec<String>>,
    stars: Option<u64>,
    forks: Option<u64>,
    updated_at: Option<String>,
    contributors: Option<u64>,
    is_electron_app: Option<bool>,
    organization: Option<String>,
}

/// Template data for one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub color_class: &'static str,
    pub name: String,
    pub screenshot: Option<String>,
    pub is_electron_app: bool,
    pub organization: Option<String>,
    pub description: Option<String>,
    /// Display lines for update date, contributors and stars/forks.
    pub meta: Vec<String>,
    pub tags: Vec<String>,
    pub url: String,
    pub repository: Option<String>,
}

/// Template data for the whole page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryPage {
    pub title: String,
    pub last_updated: String,
    /// Set when the catalog could not be displayed.
    pub error: Option<String>,
    pub total_apps: usize,
    pub apps: Vec<CardView>,
}

impl GalleryPage {
    /// Builds the page from the artifact text, or the error state if it is unusable.
    #[must_use]
    pub fn from_artifact(artifact: &str, title: &str) -> Self {
        let document: Value = match serde_json::from_str(artifact) {
            Ok(document) => document,
            Err(e) => {
                warn!(error = %e, "Catalog is not valid JSON");
                return Self::error_state(title);
            }
        };

        let Some(apps) = document.get("apps").and_then(Value::as_array) else {
            warn!("Catalog has no apps array");
            return Self::error_state(title);
        };

        let cards: Vec<CardView> = apps
            .iter()
            .enumerate()
            .map(|(index, app)| {
                let source = CardSource::deserialize(app).unwrap_or_else(|e| {
                    warn!(index, error = %e, "Malformed app entry");
                    CardSource::default()
                });
                card_view(source, index)
            })
            .collect();

        let last_updated = document
            .get("lastUpdated")
            .and_then(Value::as_str)
            .map_or_else(|| "Unknown".to_string(), format_timestamp);

        Self {
            title: title.to_string(),
            last_updated,
            error: None,
            total_apps: cards.len(),
            apps: cards,
        }
    }

    /// The persistent error state shown instead of the grid.
    #[must_use]
    pub fn error_state(title: &str) -> Self {
        Self {
            title: title.to_string(),
            last_updated: "Unknown".to_string(),
            error: Some(ERROR_MESSAGE.to_string()),
            total_apps: 0,
            apps: Vec::new(),
        }
    }

    /// Returns true if the page shows the error state.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

fn card_view(source: CardSource, index: usize) -> CardView {
    let mut meta = Vec::new();

    if let Some(updated_at) = &source.updated_at {
        meta.push(format!("📅 Last updated: {}", format_date(updated_at)));
    }

    if let Some(contributors) = source.contributors {
        meta.push(format!("👥 Contributors: {contributors}"));
    }

    let stats: Vec<String> = [
        source.stars.map(|stars| format!("⭐ {stars}")),
        source.forks.map(|forks| format!("🍴 {forks}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !stats.is_empty() {
        meta.push(stats.join(" • "));
    }

    CardView {
        color_class: COLOR_CLASSES[index % COLOR_CLASSES.len()],
        name: source.name.unwrap_or_default(),
        screenshot: source.screenshot.filter(|s| !s.is_empty()),
        is_electron_app: source.is_electron_app.unwrap_or(false),
        organization: source.organization.filter(|s| !s.is_empty()),
        description: source.description.filter(|s| !s.is_empty()),
        meta,
        tags: source.tags.unwrap_or_default(),
        url: source.url.unwrap_or_default(),
        repository: source.repository.filter(|s| !s.is_empty()),
    }
}

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}

fn format_date(text: &str) -> String {
    parse_timestamp(text).map_or_else(
        || text.to_string(),
        |at| at.format("%Y-%m-%d").to_string(),
    )
}

fn format_timestamp(text: &str) -> String {
    parse_timestamp(text).map_or_else(
        || text.to_string(),
        |at| at.format("%Y-%m-%d %H:%M UTC").to_string(),
    )
}
