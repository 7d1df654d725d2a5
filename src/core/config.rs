//! Configuration management for the PubMed gateway.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{GatewayError, Result};
use crate::core::types::SEARCH_RESULT_CAP;
use crate::core::xdg::XdgDirs;
use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub cors: CorsConfig,
}

/// Listener configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

/// E-utilities upstream configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    /// Base URL the `*.fcgi` endpoints hang off
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Timeout for a single outbound call in seconds
    #[serde(default = "default_timeout")]
    pub timeout_sec: u64,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Identifiers requested from esearch (at most 10)
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

/// Cross-origin policy
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; `"*"` allows any origin
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_base_url() -> String {
    "https://eutils.ncbi.nlm.nih.gov/entrez/eutils".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_results() -> usize {
    SEARCH_RESULT_CAP
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_sec: default_timeout(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl CorsConfig {
    /// True when every origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| GatewayError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. PUBMED_GATEWAY_CONFIG env var
    /// 2. XDG config file (~/.config/pubmed-gateway/config.toml)
    /// 3. ./pubmed-gateway.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("PUBMED_GATEWAY_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("pubmed-gateway.toml").exists() {
                Self::from_file("pubmed-gateway.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        // Server configuration
        if let Ok(host) = env::var("PUBMED_GATEWAY_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PUBMED_GATEWAY_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        // Upstream configuration
        if let Ok(url) = env::var("PUBMED_GATEWAY_UPSTREAM_URL") {
            self.upstream.base_url = url;
        }
        if let Ok(timeout) = env::var("PUBMED_GATEWAY_TIMEOUT_SEC") {
            if let Ok(t) = timeout.parse() {
                self.upstream.timeout_sec = t;
            }
        }

        // Search configuration
        if let Ok(max_results) = env::var("PUBMED_GATEWAY_MAX_RESULTS") {
            if let Ok(n) = max_results.parse() {
                self.search.max_results = n;
            }
        }

        // CORS configuration
        if let Ok(origins) = env::var("PUBMED_GATEWAY_CORS_ORIGINS") {
            self.cors.allowed_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(GatewayError::ConfigError(
                "Port must be non-zero".to_string(),
            ));
        }

        let base_url = self.upstream.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(GatewayError::ConfigError(format!(
                "Upstream base URL must be http(s): {base_url}"
            )));
        }

        if self.upstream.timeout_sec == 0 {
            return Err(GatewayError::ConfigError(
                "Upstream timeout must be non-zero".to_string(),
            ));
        }

        if self.search.max_results == 0 || self.search.max_results > SEARCH_RESULT_CAP {
            return Err(GatewayError::ConfigError(format!(
                "Max results must be between 1 and {SEARCH_RESULT_CAP}"
            )));
        }

        if self.cors.allowed_origins.is_empty() {
            return Err(GatewayError::ConfigError(
                "At least one CORS origin is required (use \"*\" for any)".to_string(),
            ));
        }

        if !self.cors.allows_any_origin() {
            for origin in &self.cors.allowed_origins {
                HeaderValue::from_str(origin).map_err(|_| {
                    GatewayError::ConfigError(format!("Invalid CORS origin: {origin}"))
                })?;
            }
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen: {}:{}", self.server.host, self.server.port);
        tracing::info!("  Upstream: {}", self.upstream.base_url);
        tracing::info!("  Upstream timeout: {}s", self.upstream.timeout_sec);
        tracing::info!("  Max search results: {}", self.search.max_results);
        tracing::info!("  CORS origins: {:?}", self.cors.allowed_origins);
    }
}
