//! armid - CLI for Azure Resource Manager IDs
//!
//! Parses, validates, builds and repairs resource IDs using the same typed
//! parsers the provider uses when reading and persisting state.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

mod commands;
mod config;
mod error;
mod output;

use commands::Cli;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "ARMID_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable.
    let fmt_layer = if cli.log_json() {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "warn".into()))
        .with(fmt_layer)
        .init();

    if let Err(e) = cli.run() {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
