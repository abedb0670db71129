//! structmap - Generate a Markdown map of a project's structure
//!
//! structmap provides:
//! - Path filtering shared by every pass (hidden and build/dependency directories)
//! - File/directory totals and per-extension counts
//! - A depth-bounded tree of the project layout
//! - Gradle, CMake and Node.js module detection
//! - A single Markdown document combining all of the above

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod flows;
mod scan;

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("structmap={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);
    cli::run(cli)
}
