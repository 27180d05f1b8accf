//! Web server command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use jsonsage_web::state::AppState;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// SQLite database file
    #[arg(long)]
    pub database: Option<PathBuf>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (defaults to jsonsage.log next to the database)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl ServeArgs {
    /// Resolve the log file when `--log` is set.
    pub fn log_path(&self, config: &Config) -> Option<PathBuf> {
        if !self.log {
            return None;
        }
        self.log_file.clone().or_else(|| {
            let db = self.database.as_ref().unwrap_or(&config.database.path);
            Some(db.with_file_name("jsonsage.log"))
        })
    }
}

pub async fn execute(args: ServeArgs, config: Config) -> Result<()> {
    let host = args.host.unwrap_or(config.server.host);
    let port = args.port.unwrap_or(config.server.port);
    let db_path = args.database.unwrap_or(config.database.path);

    let pool = jsonsage_db::init_pool(&db_path)
        .with_context(|| format!("Failed to open database {}", db_path.display()))?;
    let state = AppState::new(Arc::new(pool)).with_body_limit(config.server.body_limit);

    println!();
    println!("  {} {}", "JsonSage".cyan().bold(), "API Server".bold());
    println!();
    println!("  {}       http://{}:{}/api", "API".green(), host, port);
    println!("  {}  {}", "Database".green(), db_path.display());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    jsonsage_web::run_server(state, &host, port).await?;

    Ok(())
}
