//! Headless browser driver.

use super::CaptureError;
use crate::config::ScreenshotSettings;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

/// Navigates to a URL and saves a viewport bitmap.
#[async_trait]
pub trait Browser: Send + Sync {
    /// Captures `url` into the PNG file at `destination`.
    async fn capture(&self, url: &str, destination: &Path) -> Result<(), CaptureError>;
}

/// Chromium-compatible browser run as a headless subprocess per capture.
///
/// Headless Chromium renders its own error page and exits successfully when a
/// site cannot be reached, so each URL is requested once before launching.
#[derive(Debug, Clone)]
pub struct ChromeBrowser {
    client: reqwest::Client,
    binary: PathBuf,
    width: u32,
    height: u32,
    timeout: Duration,
    settle: Duration,
}

impl ChromeBrowser {
    /// Creates a driver from the screenshot settings.
    #[must_use]
    pub fn new(settings: &ScreenshotSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            binary: settings.browser.clone(),
            width: settings.width,
            height: settings.height,
            timeout: Duration::from_secs(settings.timeout_secs),
            settle: Duration::from_millis(settings.settle_ms),
        }
    }

    /// Overrides the browser executable.
    #[must_use]
    pub fn with_binary(mut self, binary: PathBuf) -> Self {
        self.binary = binary;
        self
    }

    /// Command-line arguments for one capture.
    fn arguments(&self, url: &str, destination: &Path) -> Vec<String> {
        vec![
            "--headless".to_string(),
            "--disable-gpu".to_string(),
            "--hide-scrollbars".to_string(),
            "--no-first-run".to_string(),
            format!("--window-size={},{}", self.width, self.height),
            format!("--virtual-time-budget={}", self.settle.as_millis()),
            format!("--screenshot={}", destination.display()),
            url.to_string(),
        ]
    }
}

#[async_trait]
impl Browser for ChromeBrowser {
    async fn capture(&self, url: &str, destination: &Path) -> Result<(), CaptureError> {
        check_navigation(&self.client, url, self.timeout).await?;

        debug!(url, path = %destination.display(), "Launching headless browser");

        let child = Command::new(&self.binary)
            .args(self.arguments(url, destination))
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| CaptureError::Launch {
                browser: self.binary.display().to_string(),
                source: e,
            })?;

        let output = match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| CaptureError::Launch {
                browser: self.binary.display().to_string(),
                source: e,
            })?,
            Err(_) => {
                return Err(CaptureError::Timeout {
                    timeout_secs: self.timeout.as_secs(),
                })
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CaptureError::BrowserFailed {
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        if !destination.exists() {
            return Err(CaptureError::MissingOutput {
                path: destination.display().to_string(),
            });
        }

        Ok(())
    }
}

/// Requests `url` and fails if no HTTP response comes back.
///
/// Any status counts as reachable. DNS, connection and TLS failures become
/// [`CaptureError::Navigation`].
///
/// # Errors
///
/// Returns [`CaptureError`] if the URL is invalid, unreachable or too slow.
pub async fn check_navigation(
    client: &reqwest::Client,
    url: &str,
    timeout: Duration,
) -> Result<(), CaptureError> {
    match client.get(url).timeout(timeout).send().await {
        Ok(response) => {
            debug!(url, status = %response.status(), "Page reachable");
            Ok(())
        }
        Err(e) if e.is_timeout() => Err(CaptureError::Timeout {
            timeout_secs: timeout.as_secs(),
        }),
        Err(e) => Err(CaptureError::Navigation {
            url: url.to_string(),
            message: error_chain(&e),
        }),
    }
}

// reqwest keeps the useful part (e.g. "dns error") in the source chain.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
