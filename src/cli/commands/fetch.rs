//! Fetch command - print the efetch XML for a PMID

use crate::cli::output::{format_bytes, print_output};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::types::RecordFormat;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the fetch command
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// PubMed identifier
    pub pmid: String,

    /// Fetch the full record instead of the abstract
    #[arg(long)]
    pub full: bool,
}

/// Fetch response (JSON format)
#[derive(Debug, Serialize)]
pub struct FetchOutput {
    pub pmid: String,
    pub format: RecordFormat,
    pub size: String,
    pub xml: String,
}

/// Execute the fetch command
pub async fn execute(
    args: FetchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let record_format = if args.full {
        RecordFormat::Full
    } else {
        RecordFormat::Abstract
    };

    let xml = services.lookup.fetch_xml(&args.pmid, record_format).await?;

    match format {
        // Raw XML so the output can be piped into other tools
        OutputFormat::Human => println!("{xml}"),
        OutputFormat::Json => {
            let output = FetchOutput {
                pmid: args.pmid.trim().to_string(),
                format: record_format,
                size: format_bytes(xml.len()),
                xml,
            };
            print_output(&output, format);
        }
    }

    Ok(())
}
