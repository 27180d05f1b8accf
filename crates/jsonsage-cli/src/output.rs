//! Terminal output formatting.

use colored::Colorize;
use jsonsage_core::analysis::model::{AnalysisResult, Structure};

/// Print an analysis result as a short colored summary.
pub fn print_analysis(result: &AnalysisResult) {
    println!("{}: {}", "Type".bold(), result.value_type.to_string().cyan());

    match &result.structure {
        Structure::Object {
            property_count,
            keys,
        } => {
            println!("{}: {}", "Properties".bold(), property_count);
            if !keys.is_empty() {
                println!("{}: {}", "Keys".bold(), keys.join(", "));
            }
        }
        Structure::Array {
            length,
            sample_types,
        } => {
            println!("{}: {}", "Length".bold(), length);
            let kinds: Vec<&str> = sample_types.iter().map(|k| k.as_str()).collect();
            if !kinds.is_empty() {
                println!("{}: {}", "Sample types".bold(), kinds.join(", "));
            }
        }
        Structure::Scalar {} => {}
    }

    if result.insights.is_empty() {
        println!("{}", "No insights.".dimmed());
        return;
    }

    println!();
    println!("{}", "Insights".bold());
    for insight in &result.insights {
        println!("  {} {}", "•".yellow(), insight);
    }
}
