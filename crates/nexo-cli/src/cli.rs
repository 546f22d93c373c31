//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Nexo - Keep trip plans inside their budget
#[derive(Parser)]
#[command(name = "nexo")]
#[command(about = "Budget governance engine for trip itineraries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Engine config override file (TOML)
    ///
    /// Absent fields keep the stock thresholds: an 80%-100% trust zone
    /// and 1.0/1.4/2.0 tier multipliers.
    #[arg(long, global = true)]
    pub engine_config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a trip plan JSON file against its budget
    Evaluate {
        /// Plan file to evaluate
        #[arg(short, long)]
        file: PathBuf,

        /// Print the full evaluation as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Write a sample trip plan to edit and evaluate
    Sample {
        /// Where to write the plan (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Start the web server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Disable authentication (for local development only)
        ///
        /// WARNING: Do not use this flag when exposing the server to a
        /// network. By default, the server requires a bearer API key from
        /// the NEXO_API_KEYS environment variable.
        #[arg(long)]
        no_auth: bool,
    },
}
