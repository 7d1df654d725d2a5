//! Search command - search PubMed and list summaries

use crate::cli::output::{colors, print_output};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::SearchResultItem;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text PubMed query
    pub term: String,

    /// Only print PMIDs
    #[arg(long)]
    pub ids_only: bool,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    pub term: String,
    pub total_results: usize,
    pub results: Vec<SearchResultItem>,
}

/// Execute the search command
pub async fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let results = services.lookup.search(&args.term).await?;

    let output = SearchOutput {
        term: args.term.clone(),
        total_results: results.len(),
        results,
    };

    match format {
        OutputFormat::Human => {
            if output.results.is_empty() {
                println!("No results found for '{}'", colors::label(&args.term));
                return Ok(());
            }

            if args.ids_only {
                for item in &output.results {
                    println!("{}", item.pmid);
                }
                return Ok(());
            }

            println!(
                "Found {} result(s) for '{}':\n",
                colors::number(&output.total_results.to_string()),
                colors::label(&args.term)
            );
            for (i, item) in output.results.iter().enumerate() {
                println!(
                    "[{}] {} {}",
                    colors::rank(&(i + 1).to_string()),
                    colors::pmid(&item.pmid),
                    item.title
                );
                println!("    {}", colors::url(&item.url));
            }
        }
        OutputFormat::Json => print_output(&output, format),
    }

    Ok(())
}
