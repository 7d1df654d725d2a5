//! PubMed gateway HTTP server entry point
//!
//! Starts the REST API server that relays browser requests to the
//! NCBI E-utilities.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pubmed_gateway::core::config::Config;
use pubmed_gateway::core::services::Services;
use pubmed_gateway::core::xdg::XdgDirs;
use pubmed_gateway::http;

/// PubMed gateway server
#[derive(Parser, Debug)]
#[command(name = "pubmed-gateway")]
#[command(version)]
#[command(about = "CORS-enabled HTTP gateway to the PubMed E-utilities", long_about = None)]
struct Args {
    /// Configuration file (overrides XDG and ./pubmed-gateway.toml)
    #[arg(long, short = 'c', env = "PUBMED_GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, short = 'p')]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pubmed_gateway=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting PubMed gateway");
    tracing::info!("Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = match &args.config {
        Some(path) => {
            let mut config = Config::from_file(path)?;
            config.merge_env();
            config
        }
        None => {
            let xdg = XdgDirs::new();
            xdg.log_paths();
            Config::load_with_xdg(&xdg)?
        }
    };

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;
    config.log_config();

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let services = Arc::new(Services::new(config)?);
    let app = http::build_router(services)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Listening on {}", addr);
    tracing::info!("Service ready - Health check at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
