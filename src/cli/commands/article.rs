//! Article command - show parsed details for one PMID

use crate::cli::output::{colors, print_header, print_output, truncate_text};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use std::sync::Arc;

/// Arguments for the article command
#[derive(Args, Debug)]
pub struct ArticleArgs {
    /// PubMed identifier
    pub pmid: String,

    /// Print the whole abstract instead of a preview
    #[arg(long)]
    pub full_abstract: bool,
}

const ABSTRACT_PREVIEW_CHARS: usize = 600;

/// Execute the article command
pub async fn execute(
    args: ArticleArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let article = services.lookup.article(&args.pmid).await?;

    match format {
        OutputFormat::Human => {
            print_header(&article.title);
            println!();
            println!("  {} {}", colors::label("PMID:"), colors::pmid(&article.pmid));
            if let Some(journal) = &article.journal {
                println!("  {} {}", colors::label("Journal:"), journal);
            }
            if let Some(year) = &article.year {
                println!("  {} {}", colors::label("Year:"), year);
            }
            if !article.authors.is_empty() {
                println!(
                    "  {} {}",
                    colors::label("Authors:"),
                    article.authors.join(", ")
                );
            }
            println!("  {} {}", colors::label("URL:"), colors::url(&article.url));
            println!();

            match &article.abstract_text {
                Some(text) if args.full_abstract => println!("{text}"),
                Some(text) => println!("{}", truncate_text(text, ABSTRACT_PREVIEW_CHARS)),
                None => println!("{}", colors::dim("No abstract available.")),
            }
        }
        OutputFormat::Json => print_output(&article, format),
    }

    Ok(())
}
