//! Static gallery page rendering using Handlebars.
//!
//! The gallery is a single HTML page with one card per catalog entry. When the
//! catalog is missing or unusable the page shows an error message instead of
//! the grid.

mod error;
mod view;

pub use error::GalleryError;
pub use view::{CardView, GalleryPage, COLOR_CLASSES, ERROR_MESSAGE};

use crate::config::GallerySettings;
use handlebars::Handlebars;
use std::path::Path;
use tracing::{info, warn};

const GALLERY_TEMPLATE_NAME: &str = "gallery";
const GALLERY_TEMPLATE: &str = include_str!("gallery.hbs");

/// Outcome of rendering the gallery to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryOutcome {
    /// Cards rendered.
    pub cards: usize,
    /// Whether the error state was rendered.
    pub error_state: bool,
}

/// Creates the Handlebars registry with the gallery template.
///
/// HTML escaping stays on and strict mode catches missing variables.
///
/// # Errors
///
/// Returns an error if the embedded template does not compile.
pub fn create_handlebars_registry() -> Result<Handlebars<'static>, GalleryError> {
    let mut hbs = Handlebars::new();
    hbs.set_strict_mode(true);
    hbs.register_template_string(GALLERY_TEMPLATE_NAME, GALLERY_TEMPLATE)?;
    Ok(hbs)
}

/// Renders gallery pages.
pub struct GalleryRenderer {
    handlebars: Handlebars<'static>,
}

impl GalleryRenderer {
    /// Creates a new gallery renderer.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded template does not compile.
    pub fn new() -> Result<Self, GalleryError> {
        Ok(Self {
            handlebars: create_handlebars_registry()?,
        })
    }

    /// Renders a page to HTML.
    ///
    /// # Errors
    ///
    /// Returns an error if template rendering fails.
    pub fn render(&self, page: &GalleryPage) -> Result<String, GalleryError> {
        Ok(self.handlebars.render(GALLERY_TEMPLATE_NAME, page)?)
    }
}

/// Reads the catalog at `catalog_path` and writes the gallery page.
///
/// A missing or malformed catalog renders the error state rather than failing.
///
/// # Errors
///
/// Returns [`GalleryError`] if rendering fails or the page cannot be written.
pub fn render_gallery(
    catalog_path: &Path,
    settings: &GallerySettings,
) -> Result<GalleryOutcome, GalleryError> {
    let page = match std::fs::read_to_string(catalog_path) {
        Ok(artifact) => GalleryPage::from_artifact(&artifact, &settings.title),
        Err(e) => {
            warn!(path = %catalog_path.display(), error = %e, "Error loading apps data");
            GalleryPage::error_state(&settings.title)
        }
    };

    let html = GalleryRenderer::new()?.render(&page)?;
    let io_error = |source| GalleryError::IoError {
        path: settings.output.display().to_string(),
        source,
    };
    if let Some(parent) = settings.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
    }
    std::fs::write(&settings.output, html).map_err(io_error)?;

    info!(
        path = %settings.output.display(),
        cards = page.apps.len(),
        error_state = page.is_error(),
        "Gallery written"
    );
    Ok(GalleryOutcome {
        cards: page.apps.len(),
        error_state: page.is_error(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(artifact: &str) -> String {
        let page = GalleryPage::from_artifact(artifact, "My Apps");
        GalleryRenderer::new().unwrap().render(&page).unwrap()
    }

    #[test]
    fn template_compiles() {
        assert!(create_handlebars_registry().is_ok());
    }

    #[test]
    fn renders_card_content() {
        let html = render(
            r#"{
                "lastUpdated": "2024-07-01T12:00:00Z",
                "apps": [{
                    "name": "tetris",
                    "description": "Falling blocks",
                    "url": "https://someone.github.io/tetris",
                    "repository": "https://github.com/someone/tetris",
                    "screenshot": "screenshots/someone-tetris.png",
                    "tags": ["Game"],
                    "stars": 1,
                    "forks": 2,
                    "contributors": 0,
                    "isElectronApp": true,
                    "organization": "someone"
                }]
            }"#,
        );

        assert!(html.contains("<title>My Apps</title>"));
        assert!(html.contains("2024-07-01 12:00 UTC"));
        assert!(html.contains(r#"class="app-card color-coral""#));
        assert!(html.contains(r#"<h2 class="app-title">tetris</h2>"#));
        assert!(html.contains(r#"title="Available as Electron app""#));
        assert!(html.contains("Falling blocks"));
        assert!(html.contains("👥 Contributors: 0"));
        assert!(html.contains("⭐ 1 • 🍴 2"));
        assert!(html.contains(r#"<span class="app-tag">Game</span>"#));
        assert!(html.contains("🌐 Visit App"));
        assert!(html.contains("📁 View Source"));
        assert!(html.contains("Screenshot of tetris"));
        assert!(!html.contains("error-message"));
    }

    #[test]
    fn optional_sections_are_omitted() {
        let html = render(r#"{"apps": [{"name": "bare", "url": "https://someone.github.io/bare"}]}"#);

        assert!(html.contains("<span>Screenshot not available</span>"));
        assert!(!html.contains("electron-icon"));
        assert!(!html.contains("app-organization"));
        assert!(!html.contains("app-description"));
        assert!(!html.contains("app-tags"));
        assert!(!html.contains("View Source"));
        assert!(html.contains(r#"<span id="last-updated">Unknown</span>"#));
    }

    #[test]
    fn escapes_html_in_fields() {
        let html = render(r#"{"apps": [{"name": "<script>alert(1)</script>", "url": "https://x"}]}"#);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn renders_error_state() {
        let html = render(r#"{"totalApps": 0}"#);
        assert!(html.contains(r#"id="error-message""#));
        assert!(html.contains(ERROR_MESSAGE));
        assert!(!html.contains("apps-grid"));
    }

    #[test]
    fn render_gallery_missing_catalog_writes_error_page() {
        let temp = tempfile::TempDir::new().unwrap();
        let settings = GallerySettings {
            output: temp.path().join("index.html"),
            title: "Apps".to_string(),
        };

        let outcome = render_gallery(&temp.path().join("apps-data.json"), &settings).unwrap();

        assert!(outcome.error_state);
        assert_eq!(outcome.cards, 0);
        let html = std::fs::read_to_string(&settings.output).unwrap();
        assert!(html.contains("error-message"));
    }
}
