//! Screenshot capture for catalog entries.
//!
//! Reads the catalog, visits each app URL with a headless browser and saves a
//! bitmap at the entry's `screenshot` path. A failed capture leaves a
//! `.failed.txt` marker next to where the bitmap would have been.

mod browser;
mod error;
mod target;

pub use browser::{check_navigation, Browser, ChromeBrowser};
pub use error::{CaptureError, ScreenshotError};
pub use target::{read_targets, CaptureTarget};

use crate::summary::{CaptureResult, CaptureSummary};
use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};
use tracing::{error, info, info_span, warn, Instrument};

/// Suffix of the marker written when a capture fails.
pub const FAILURE_MARKER_EXTENSION: &str = "failed.txt";

/// Captures screenshots for every app in a catalog file.
///
/// Paths in the catalog are resolved against `base_dir`.
///
/// # Errors
///
/// Returns [`ScreenshotError`] if the catalog cannot be read or a failure
/// marker cannot be written. Individual capture failures are not errors.
pub async fn capture_catalog(
    catalog_path: &Path,
    base_dir: &Path,
    browser: &dyn Browser,
) -> Result<CaptureSummary, ScreenshotError> {
    info!(path = %catalog_path.display(), "Starting screenshot capture");
    let targets = read_targets(catalog_path)?;
    info!(count = targets.len(), "Found apps to screenshot");

    let mut summary = CaptureSummary::default();
    for app in &targets {
        let result = capture_app(app, base_dir, browser).await?;
        summary.record_result(&result);
    }

    info!(
        captured = summary.captured,
        failed = summary.failed,
        "Screenshot capture completed"
    );
    Ok(summary)
}

/// Captures one app, writing either the bitmap or a failure marker.
///
/// # Errors
///
/// Returns [`ScreenshotError::IoError`] only if the screenshot directory or the
/// failure marker cannot be written.
pub async fn capture_app(
    app: &CaptureTarget,
    base_dir: &Path,
    browser: &dyn Browser,
) -> Result<CaptureResult, ScreenshotError> {
    let span = info_span!("screenshot", app = %app.name, url = %app.url);

    async {
        let destination = base_dir.join(&app.screenshot);
        let marker = failure_marker_path(&destination);

        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ScreenshotError::IoError {
                path: parent.display().to_string(),
                source: e,
            })?;
        }

        info!("Taking screenshot");
        match browser.capture(&app.url, &destination).await {
            Ok(()) => {
                remove_if_exists(&marker);
                info!(path = %destination.display(), "Screenshot saved");
                Ok(CaptureResult::Captured {
                    app: app.name.clone(),
                    path: destination.display().to_string(),
                })
            }
            Err(e) => {
                error!(error = %e, "Failed to take screenshot");
                remove_if_exists(&destination);
                std::fs::write(&marker, failure_marker(&e.to_string(), &app.url, Utc::now()))
                    .map_err(|source| ScreenshotError::IoError {
                        path: marker.display().to_string(),
                        source,
                    })?;
                Ok(CaptureResult::Failed {
                    app: app.name.clone(),
                    error: e.to_string(),
                })
            }
        }
    }
    .instrument(span)
    .await
}

/// Marker path for a bitmap path: `shots/app.png` becomes `shots/app.failed.txt`.
#[must_use]
pub fn failure_marker_path(bitmap: &Path) -> PathBuf {
    bitmap.with_extension(FAILURE_MARKER_EXTENSION)
}

/// Contents of a failure marker.
#[must_use]
pub fn failure_marker(message: &str, url: &str, at: DateTime<Utc>) -> String {
    format!(
        "Screenshot failed: {message}\nURL: {url}\nTimestamp: {}",
        at.to_rfc3339_opts(SecondsFormat::Millis, true)
    )
}

fn remove_if_exists(path: &Path) {
    if path.exists() {
        if let Err(e) = std::fs::remove_file(path) {
            warn!(path = %path.display(), error = %e, "Failed to remove stale file");
        }
    }
}
