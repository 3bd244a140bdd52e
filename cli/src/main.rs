//! CLI for pages-catalog.
//!
//! Discovers GitHub Pages apps, captures their screenshots and renders the
//! gallery page. Each phase is a separate subcommand that communicates with
//! the others only through the catalog file.

use clap::{Parser, Subcommand};
use pages_catalog::{
    capture_catalog, load_config, render_gallery, resolve_accounts, CaptureSummary,
    CatalogConfig, ChromeBrowser, ConfigError, DiscoverySummary, GalleryOutcome, Runner,
    RunnerConfig, RunnerError,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Pages Catalog - Build a gallery of the GitHub Pages sites of a set of accounts.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file.
    #[arg(long, global = true, default_value = "catalog.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Discover Pages-enabled repositories and write the catalog.
    Discover {
        /// Catalog output path (overrides the config file).
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Capture a screenshot of every app in the catalog.
    Screenshots {
        /// Catalog path (defaults to the configured output).
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Directory screenshot paths are resolved against.
        #[arg(long, default_value = ".")]
        base_dir: PathBuf,

        /// Browser executable (overrides the config file).
        #[arg(long, env = "PAGES_CATALOG_BROWSER")]
        browser: Option<PathBuf>,
    },

    /// Render the static gallery page from the catalog.
    Render {
        /// Catalog path (defaults to the configured output).
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// HTML output path (overrides the config file).
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Octocrab's TLS stack needs a process-wide crypto provider
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        debug!("A rustls crypto provider is already installed");
    }

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::FAILURE
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
///
/// Only `discover` requires the configuration file. The other phases fall
/// back to default settings when it does not exist.
async fn run(args: Args) -> Result<(), RunnerError> {
    match args.command {
        Command::Discover { output } => {
            let config = load_config(&args.config)?;
            let summary = discover(&config, output).await?;
            print_discovery_summary(&summary);
        }
        Command::Screenshots {
            catalog,
            base_dir,
            browser,
        } => {
            let config = load_phase_config(&args.config)?;
            let catalog = catalog.unwrap_or_else(|| config.output.clone());
            let summary = screenshots(&config, &catalog, &base_dir, browser).await?;
            print_capture_summary(&summary);
        }
        Command::Render { catalog, output } => {
            let config = load_phase_config(&args.config)?;
            let catalog = catalog.unwrap_or_else(|| config.output.clone());
            let mut settings = config.gallery.clone();
            if let Some(output) = output {
                settings.output = output;
            }
            let outcome = render_gallery(&catalog, &settings)?;
            print_gallery_outcome(&outcome, &settings.output);
        }
    }

    Ok(())
}

/// Loads the configuration for a phase that only needs its settings.
fn load_phase_config(path: &Path) -> Result<CatalogConfig, ConfigError> {
    match load_config(path) {
        Err(ConfigError::MissingFile { .. }) => {
            info!(path = %path.display(), "No configuration file, using defaults");
            Ok(CatalogConfig::default())
        }
        other => other,
    }
}

async fn discover(
    config: &CatalogConfig,
    output: Option<PathBuf>,
) -> Result<DiscoverySummary, RunnerError> {
    let accounts = resolve_accounts(&config.accounts);
    let enabled = accounts.iter().filter(|account| account.is_enabled()).count();
    info!(enabled, total = accounts.len(), "Resolved account credentials");
    let output = output.unwrap_or_else(|| config.output.clone());
    let runner = Runner::new(RunnerConfig::new(output, accounts));
    runner.run().await
}

async fn screenshots(
    config: &CatalogConfig,
    catalog: &Path,
    base_dir: &Path,
    browser: Option<PathBuf>,
) -> Result<CaptureSummary, pages_catalog::ScreenshotError> {
    let mut driver = ChromeBrowser::new(&config.screenshots);
    if let Some(binary) = browser {
        driver = driver.with_binary(binary);
    }
    capture_catalog(catalog, base_dir, &driver).await
}

/// Prints the discovery run summary.
fn print_discovery_summary(summary: &DiscoverySummary) {
    println!("\nSummary:");
    println!("  Accounts processed: {}", summary.accounts_processed);
    println!("  Accounts skipped (no token): {}", summary.accounts_skipped);
    println!("  Repositories listed: {}", summary.repositories_listed);
    println!("  Repositories with Pages: {}", summary.pages_repositories);
    println!("  Apps added: {}", summary.apps_added);
    println!("  Repositories failed: {}", summary.repositories_failed);
    if summary.has_failures() {
        println!("  Some repositories were left out; see the log for details");
    }
}

/// Prints the screenshot run summary.
fn print_capture_summary(summary: &CaptureSummary) {
    println!("\nSummary:");
    println!("  Apps attempted: {}", summary.attempted());
    println!("  Screenshots captured: {}", summary.captured);
    println!("  Screenshots failed: {}", summary.failed);
}

/// Prints where the gallery was written.
fn print_gallery_outcome(outcome: &GalleryOutcome, output: &Path) {
    println!("\nSummary:");
    println!("  Gallery: {}", output.display());
    if outcome.error_state {
        println!("  Catalog unavailable, rendered the error page");
    } else {
        println!("  Cards rendered: {}", outcome.cards);
    }
}
