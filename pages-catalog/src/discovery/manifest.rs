//! Dependency manifest inspection.
//!
//! Desktop packaging is detected by looking for [`DESKTOP_DEPENDENCY`] in the
//! runtime or development dependencies of the repository's top-level
//! `package.json`.

use super::ManifestError;
use crate::github::{ContentFile, GitHubApi};
use base64::Engine;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Manifest file probed in each repository.
pub const MANIFEST_PATH: &str = "package.json";

/// Dependency that marks an app as packaged for the desktop.
pub const DESKTOP_DEPENDENCY: &str = "electron";

/// Typed view over the dependency maps of a `package.json`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    #[serde(default)]
    dependencies: Option<BTreeMap<String, Value>>,

    #[serde(default)]
    dev_dependencies: Option<BTreeMap<String, Value>>,
}

impl PackageManifest {
    /// Parses manifest JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Parse`] if the text is not a JSON object with
    /// well-formed dependency maps.
    pub fn parse(text: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decodes and parses a contents API response.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError`] if the body is missing, not base64, not UTF-8
    /// or not a valid manifest.
    pub fn from_content(file: &ContentFile) -> Result<Self, ManifestError> {
        let content = file.content.as_deref().ok_or(ManifestError::MissingContent)?;

        match file.encoding.as_deref() {
            None | Some("base64") => {}
            Some(other) => return Err(ManifestError::UnsupportedEncoding(other.to_string())),
        }

        // GitHub wraps the base64 body at 60 columns.
        let compact: String = content.split_whitespace().collect();
        let bytes = base64::engine::general_purpose::STANDARD.decode(compact)?;
        let text = String::from_utf8(bytes)?;
        Self::parse(&text)
    }

    /// Looks up a runtime dependency by exact name.
    #[must_use]
    pub fn dependency(&self, name: &str) -> Option<&Value> {
        self.dependencies.as_ref()?.get(name)
    }

    /// Looks up a development dependency by exact name.
    #[must_use]
    pub fn dev_dependency(&self, name: &str) -> Option<&Value> {
        self.dev_dependencies.as_ref()?.get(name)
    }

    /// Returns true if `name` is a runtime or development dependency.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.dependency(name).is_some() || self.dev_dependency(name).is_some()
    }
}

/// Fetches and parses the repository's manifest.
///
/// # Errors
///
/// Returns [`ManifestError`] if the manifest cannot be fetched or read.
pub async fn fetch_manifest(
    api: &dyn GitHubApi,
    owner: &str,
    repo: &str,
) -> Result<PackageManifest, ManifestError> {
    let file = api.get_content(owner, repo, MANIFEST_PATH).await?;
    PackageManifest::from_content(&file)
}

/// Returns whether the repository is packaged as a desktop app.
///
/// Any failure to obtain or read the manifest yields `false`.
pub async fn is_desktop_app(api: &dyn GitHubApi, owner: &str, repo: &str) -> bool {
    match fetch_manifest(api, owner, repo).await {
        Ok(manifest) => {
            let declared = manifest.declares(DESKTOP_DEPENDENCY);
            debug!(repo, declared, "Checked manifest for desktop packaging");
            declared
        }
        Err(e) => {
            debug!(repo, error = %e, "Manifest unavailable, assuming no desktop packaging");
            false
        }
    }
}
