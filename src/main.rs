//! pybuild CLI - Build, BOM and publish wrapper for Python packages
//!
//! Entry point for the pybuild command-line application.

use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pybuild::cli::output::log_fatal;
use pybuild::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over -v/-q
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().as_str().to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::io::stdout().is_terminal())
        .init();

    if let Err(e) = cli.run().await {
        log_fatal(&e);
        std::process::exit(1);
    }
}
