//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

pub mod analyze;
pub mod serve;

/// JsonSage - JSON structure analysis and a tiny expense ledger
#[derive(Parser)]
#[command(name = "jsonsage")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (defaults to ./jsonsage.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API server
    Serve(serve::ServeArgs),

    /// Analyze a JSON document locally
    Analyze(analyze::AnalyzeArgs),
}

impl Cli {
    pub async fn execute(self, config: Config) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Analyze(args) => analyze::execute(args),
        }
    }
}
