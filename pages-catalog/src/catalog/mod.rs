//! The catalog artifact.
//!
//! The catalog is rebuilt wholesale on every discovery run and written once,
//! at the end, over any previous version.

mod entry;
mod error;

pub use entry::AppEntry;
pub use error::CatalogError;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// The JSON document shared by discovery, screenshot capture and the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    /// When the catalog was built.
    pub last_updated: DateTime<Utc>,

    /// Number of entries in `apps`.
    pub total_apps: usize,

    /// Entries sorted by `updated_at`, most recent first.
    pub apps: Vec<AppEntry>,
}

impl Catalog {
    /// Builds a catalog from per-account contributions.
    ///
    /// Contributions are concatenated in the order given and then stably
    /// sorted by update time, newest first, so ties keep account order.
    #[must_use]
    pub fn build<I>(contributions: I, built_at: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = Vec<AppEntry>>,
    {
        let mut apps: Vec<AppEntry> = contributions.into_iter().flatten().collect();
        apps.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        Self {
            last_updated: built_at,
            total_apps: apps.len(),
            apps,
        }
    }

    /// Serializes the catalog as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Writes the catalog to `path`, replacing any previous artifact.
    ///
    /// The JSON is written to a temporary file in the same directory and then
    /// renamed over the destination.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be written.
    pub fn write(&self, path: &Path) -> Result<(), CatalogError> {
        let shown = path.display().to_string();
        let json = self.to_json().map_err(|e| CatalogError::JsonError {
            path: shown.clone(),
            source: e,
        })?;

        let io_error = |source| CatalogError::IoError {
            path: shown.clone(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(io_error)?;

        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(io_error)?;
        file.write_all(json.as_bytes()).map_err(io_error)?;
        file.flush().map_err(io_error)?;
        file.persist(path).map_err(|e| CatalogError::PersistError {
            path: shown.clone(),
            source: e,
        })?;

        info!(path = %shown, apps = self.total_apps, "Catalog written");
        Ok(())
    }

    /// Reads a catalog artifact.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be read or is not a catalog.
    pub fn read(path: &Path) -> Result<Self, CatalogError> {
        let shown = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::IoError {
            path: shown.clone(),
            source: e,
        })?;

        let catalog: Self = serde_json::from_str(&content).map_err(|e| CatalogError::JsonError {
            path: shown.clone(),
            source: e,
        })?;

        debug!(path = %shown, apps = catalog.apps.len(), "Catalog read");
        Ok(catalog)
    }
}
