//! CLI adapter for the PubMed gateway
//!
//! Runs the gateway's lookup operations directly from the command line,
//! without starting the HTTP server. This module is parallel to `http/`:
//! both depend on `core/` but not on each other.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (lookup logic)  |
//!              +--------+---------+
//!                       |
//!          +------------+------------+
//!          |                         |
//!          v                         v
//! +------------------+      +------------------+
//! |      http/       |      |      cli/        |
//! | (axum adapter)   |      | (clap adapter)   |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// PubMed lookup from the command line
///
/// Search PubMed and fetch records through the same code paths the
/// gateway server uses.
#[derive(Parser, Debug)]
#[command(name = "pubmed")]
#[command(version)]
#[command(about = "PubMed E-utilities lookup", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
///
/// Command names match the HTTP endpoints where one exists.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search PubMed and list the top results
    Search(commands::SearchArgs),

    /// Print the XML record for a PMID
    Fetch(commands::FetchArgs),

    /// Show title, abstract and citation details for a PMID
    Article(commands::ArticleArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  pubmed completions bash > ~/.local/share/bash-completion/completions/pubmed
    ///   zsh:   pubmed completions zsh > ~/.zfunc/_pubmed
    ///   fish:  pubmed completions fish > ~/.config/fish/completions/pubmed.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = Config::load()?;
    let services = Arc::new(Services::new(config)?);

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format).await,
        Commands::Fetch(args) => commands::fetch::execute(args, &services, cli.format).await,
        Commands::Article(args) => commands::article::execute(args, &services, cli.format).await,
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format).await,
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
