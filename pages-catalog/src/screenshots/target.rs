//! Capture targets read from the catalog artifact.
//!
//! Capture only needs each app's name, URL and screenshot path, so entries are
//! read without requiring the rest of the catalog fields.

use super::ScreenshotError;
use crate::catalog::CatalogError;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// One app to capture.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CaptureTarget {
    #[serde(default)]
    pub name: String,
    pub url: String,
    /// Bitmap path relative to the capture base directory.
    pub screenshot: String,
}

#[derive(Deserialize)]
struct Artifact {
    apps: Vec<Value>,
}

/// Reads the capture targets of a catalog artifact, in catalog order.
///
/// Entries without a `url` or `screenshot` are skipped with a warning.
///
/// # Errors
///
/// Returns [`ScreenshotError::Catalog`] if the file cannot be read, is not
/// JSON or has no `apps` array.
pub fn read_targets(path: &Path) -> Result<Vec<CaptureTarget>, ScreenshotError> {
    let shown = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::IoError {
        path: shown.clone(),
        source: e,
    })?;

    let artifact: Artifact =
        serde_json::from_str(&content).map_err(|e| CatalogError::JsonError {
            path: shown.clone(),
            source: e,
        })?;

    let targets: Vec<CaptureTarget> = artifact
        .apps
        .into_iter()
        .enumerate()
        .filter_map(|(index, app)| match CaptureTarget::deserialize(app) {
            Ok(target) => Some(target),
            Err(e) => {
                warn!(index, error = %e, "Skipping app without a capture target");
                None
            }
        })
        .collect();

    debug!(path = %shown, targets = targets.len(), "Capture targets read");
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn read(content: &str) -> Result<Vec<CaptureTarget>, ScreenshotError> {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("apps-data.json");
        std::fs::write(&path, content).unwrap();
        read_targets(&path)
    }

    #[test]
    fn reads_minimal_entries() {
        let targets = read(
            r#"{"apps": [{
                "name": "tetris",
                "url": "https://someone.github.io/tetris",
                "screenshot": "screenshots/someone-tetris.png",
                "stars": 4
            }]}"#,
        )
        .unwrap();

        assert_eq!(
            targets,
            vec![CaptureTarget {
                name: "tetris".to_string(),
                url: "https://someone.github.io/tetris".to_string(),
                screenshot: "screenshots/someone-tetris.png".to_string(),
            }]
        );
    }

    #[test]
    fn skips_entries_without_url_or_path() {
        let targets = read(
            r#"{"apps": [
                {"name": "no-url", "screenshot": "screenshots/a.png"},
                {"name": "no-path", "url": "https://someone.github.io/b"},
                42,
                {"name": "ok", "url": "https://someone.github.io/c", "screenshot": "screenshots/c.png"}
            ]}"#,
        )
        .unwrap();

        let names: Vec<_> = targets.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["ok"]);
    }

    #[test]
    fn missing_apps_array_is_an_error() {
        let result = read(r#"{"lastUpdated": "2024-01-01T00:00:00Z"}"#);

        assert!(matches!(
            result,
            Err(ScreenshotError::Catalog(CatalogError::JsonError { .. }))
        ));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            read("{ not json"),
            Err(ScreenshotError::Catalog(CatalogError::JsonError { .. }))
        ));
    }
}
