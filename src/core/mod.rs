//! Core domain logic (protocol-agnostic)
//!
//! This module contains all lookup logic that is independent
//! of the transport (HTTP server or CLI).
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Domain data structures
//! - **xdg**: XDG directory handling
//! - **eutils**: E-utilities client and XML parsers
//! - **lookup**: fetch, search and article operations
//! - **services**: Unified service container

pub mod config;
pub mod error;
pub mod eutils;
pub mod lookup;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{GatewayError, Result};
pub use services::Services;
