//! `storelens-tui` — Terminal browser for storefront product catalogs.
//!
//! Built on [ratatui](https://ratatui.rs). The catalog is fetched once at
//! startup by a background task; everything after that is local: category
//! tabs, title search, rating and price filters, and a sortable card grid.
//!
//! Logs are written to a file (default `/tmp/storelens-tui.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and app launch.

mod action;
mod app;
mod component;
mod event;
mod fetch;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use storelens_api::CatalogClient;

use crate::app::App;

/// Terminal browser for storefront product catalogs.
#[derive(Parser, Debug)]
#[command(name = "storelens-tui", version, about)]
struct Cli {
    /// Storefront base URL
    #[arg(
        short = 'u',
        long,
        env = "STORELENS_BASE_URL",
        default_value = storelens_api::DEFAULT_BASE_URL
    )]
    base_url: String,

    /// Log file path (defaults to /tmp/storelens-tui.log)
    #[arg(long, default_value = "/tmp/storelens-tui.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that would
/// corrupt the TUI output. Returns a guard that must be held for the
/// lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("storelens_tui={log_level}")));

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("storelens-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    info!(base_url = %cli.base_url, "starting storelens-tui");

    let client = CatalogClient::new(&cli.base_url)?;
    let mut app = App::new(client);
    app.run().await?;

    Ok(())
}
