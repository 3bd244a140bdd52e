#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod catalog;
pub mod config;
pub mod discovery;
pub mod gallery;
pub mod github;
pub mod rate_limit;
pub mod runner;
pub mod screenshots;
pub mod summary;

pub use catalog::{AppEntry, Catalog, CatalogError};
pub use config::{
    load_config, resolve_accounts, Account, AccountConfig, AccountKind, CatalogConfig,
    ConfigError, GallerySettings, ScreenshotSettings,
};
pub use discovery::{
    discover_account, enrich_repository, list_all_repositories, DiscoveryError, EnrichError,
    PackageManifest,
};
pub use gallery::{render_gallery, GalleryError, GalleryOutcome, GalleryPage, GalleryRenderer};
pub use github::{ApiError, GitHubApi, OctocrabClient};
pub use rate_limit::{RateLimitPolicy, DEFAULT_RATE_LIMIT_WAIT};
pub use runner::{ClientFactory, Runner, RunnerConfig, RunnerError};
pub use screenshots::{
    capture_catalog, Browser, CaptureError, CaptureTarget, ChromeBrowser, ScreenshotError,
};
pub use summary::{CaptureResult, CaptureSummary, DiscoverySummary, ProcessingResult};
