//! XDG Base Directory Support
//!
//! Resolves where the gateway looks for its configuration file on
//! Linux/Unix systems.

use std::env;
use std::path::PathBuf;

/// Application directory name under the XDG roots
const APP_DIR: &str = "pubmed-gateway";

/// XDG directory structure for the gateway
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. PUBMED_GATEWAY_CONFIG_DIR
    /// 2. XDG_CONFIG_HOME
    /// 3. XDG default (~/.config)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(dir) = env::var("PUBMED_GATEWAY_CONFIG_DIR") {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join(APP_DIR);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join(APP_DIR)
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Log resolved paths
    pub fn log_paths(&self) {
        tracing::info!("Config dir: {}", self.config_dir.display());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
