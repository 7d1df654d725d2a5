//! PubMed CLI - command-line access to the gateway's lookups
//!
//! Runs the same search and fetch operations as the HTTP gateway,
//! directly against the E-utilities.
//!
//! # Examples
//!
//! ```bash
//! # Top 10 results for a term
//! pubmed search "crispr off-target"
//!
//! # Abstract XML for one record
//! pubmed fetch 31452104
//!
//! # Parsed article details as JSON
//! pubmed --format json article 31452104
//! ```

use clap::Parser;
use pubmed_gateway::cli::output::print_error;
use pubmed_gateway::cli::{run, Cli};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
