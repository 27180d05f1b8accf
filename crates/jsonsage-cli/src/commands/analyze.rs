//! Local analysis command.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;

use jsonsage_core::analysis;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// JSON file to analyze (reads stdin when omitted or "-")
    pub file: Option<PathBuf>,

    /// Print the raw result as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let input = read_input(args.file.as_ref())?;
    let value: Value = serde_json::from_str(&input).context("Invalid JSON format")?;

    let result = analysis::analyze(&value);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        output::print_analysis(&result);
    }

    Ok(())
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
