//! Error types and error handling for the PubMed gateway.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (HTTP status codes)
//! is handled in the respective adapter modules.

use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0} is required")]
    MissingParameter(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Failed to fetch data from NCBI: {0}")]
    UpstreamFailure(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::UpstreamFailure(err.to_string())
    }
}

impl From<quick_xml::Error> for GatewayError {
    fn from(err: quick_xml::Error) -> Self {
        GatewayError::InternalError(format!("Malformed XML from upstream: {err}"))
    }
}

impl GatewayError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(self, GatewayError::MissingParameter(_))
    }

    /// Check if the upstream API caused the failure
    pub fn is_upstream(&self) -> bool {
        matches!(self, GatewayError::UpstreamFailure(_))
    }
}
