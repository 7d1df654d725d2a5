//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    #[serde(flatten)]
    pub config: Config,
}

/// Execute the config command
pub async fn execute(
    _args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = ConfigResponse {
        config_file: XdgDirs::new().config_file().to_string_lossy().into_owned(),
        config: services.config.as_ref().clone(),
    };

    match format {
        OutputFormat::Human => {
            let config = &response.config;
            println!("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  server:");
            println!("    host: {}", config.server.host);
            println!("    port: {}", config.server.port);
            println!("  upstream:");
            println!("    base_url: {}", config.upstream.base_url);
            println!("    timeout_sec: {}", config.upstream.timeout_sec);
            println!("  search:");
            println!("    max_results: {}", config.search.max_results);
            println!("  cors:");
            println!("    allowed_origins: {:?}", config.cors.allowed_origins);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
