//! rTimeAudit library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! ingestion, report and export modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod ingest;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Convert => cli::commands::convert::handle(cli, cfg),
        Commands::Hours { .. } => cli::commands::hours::handle(cli, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(cli, cfg),
        Commands::Positions { .. } => cli::commands::positions::handle(cli, cfg),
        Commands::Anomalies { .. } => cli::commands::anomalies::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Diagnostics on stderr: silent unless `-v` is given or RUST_LOG is set.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => None,
        1 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    };

    let filter = match level {
        Some(l) => EnvFilter::from_default_env().add_directive(l.into()),
        None if std::env::var_os("RUST_LOG").is_some() => EnvFilter::from_default_env(),
        None => return,
    };

    // a second init (e.g. run() called twice in-process) keeps the first one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // config is loaded once; --data overrides it per command
    let cfg = Config::load()?;
    tracing::debug!(data_file = %cfg.data_file, "configuration resolved");

    dispatch(&cli, &cfg)
}
