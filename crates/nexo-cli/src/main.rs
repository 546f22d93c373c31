//! Nexo CLI - Budget governance for trip plans
//!
//! Usage:
//!   nexo evaluate --file plan.json   Evaluate a plan against its budget
//!   nexo sample --output plan.json   Write a sample plan to get started
//!   nexo serve --port 3000           Start web server

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    match cli.command {
        Commands::Evaluate { file, json } => {
            commands::cmd_evaluate(&file, json, cli.engine_config.as_deref())
        }
        Commands::Sample { output } => commands::cmd_sample(output.as_deref()),
        Commands::Serve {
            port,
            host,
            no_auth,
        } => commands::cmd_serve(&host, port, no_auth, cli.engine_config.as_deref()).await,
    }
}
