//! Configuration loading.
//!
//! This module parses `catalog.toml`, validates it and resolves each
//! account's credential from the environment.

mod account;
mod error;
mod settings;

pub use account::{resolve_accounts, Account, AccountKind};
pub use error::ConfigError;
pub use settings::{AccountConfig, CatalogConfig, GallerySettings, ScreenshotSettings};

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Loads and validates a configuration file.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file is missing, is not valid TOML, or
/// fails validation.
pub fn load_config(path: &Path) -> Result<CatalogConfig, ConfigError> {
    info!(path = %path.display(), "Loading configuration");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let config = parse_config(&content, path)?;
    debug!(accounts = config.accounts.len(), "Configuration loaded");
    Ok(config)
}

/// Parses and validates configuration text; `path` is used in error messages.
///
/// # Errors
///
/// Returns [`ConfigError`] if the text is not valid TOML or fails validation.
pub fn parse_config(content: &str, path: &Path) -> Result<CatalogConfig, ConfigError> {
    let config: CatalogConfig = toml::from_str(content).map_err(|e| ConfigError::TomlError {
        path: path.display().to_string(),
        source: e,
    })?;

    validate_config(&config, path)?;
    Ok(config)
}

/// Validates a parsed configuration.
fn validate_config(config: &CatalogConfig, path: &Path) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::ValidationError {
        path: path.display().to_string(),
        message,
    };

    if config.accounts.is_empty() {
        return Err(invalid("at least one account must be configured".to_string()));
    }

    let mut seen = HashSet::new();
    for account in &config.accounts {
        if account.name.trim().is_empty() {
            return Err(invalid("account name must not be empty".to_string()));
        }

        if account.name.contains('/') {
            return Err(invalid(format!(
                "account name '{}' must not contain '/'",
                account.name
            )));
        }

        if !seen.insert(account.name.to_ascii_lowercase()) {
            return Err(invalid(format!(
                "account '{}' is configured more than once",
                account.name
            )));
        }

        if account.token_env.trim().is_empty() {
            return Err(invalid(format!(
                "token-env for account '{}' must not be empty",
                account.name
            )));
        }
    }

    let screenshots = &config.screenshots;
    if screenshots.width == 0 || screenshots.height == 0 {
        return Err(invalid(
            "screenshot width and height must be greater than zero".to_string(),
        ));
    }

    if screenshots.timeout_secs == 0 {
        return Err(invalid(
            "screenshot timeout-secs must be greater than zero".to_string(),
        ));
    }

    Ok(())
}
