//! PubMed Gateway - CORS relay for NCBI E-utilities
//!
//! A stateless HTTP service that lets browser pages query PubMed
//! without tripping over cross-origin restrictions. Requests are
//! forwarded to esearch, esummary and efetch; results come back as
//! raw XML or as small JSON documents.
//!
//! # Architecture
//!
//! The codebase is organized into three main modules:
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - config, error, types, xdg
//!   - eutils (upstream client, XML parsers)
//!   - lookup (fetch, search, article operations)
//!   - services (unified service container)
//!
//! - **http**: REST API adapter (depends on core)
//!   - router, handlers, middleware, error mapping
//!
//! - **cli**: Command-line adapter (depends on core)
//!   - commands, output

// Core domain logic (protocol-agnostic)
pub mod core;

// HTTP REST adapter
pub mod http;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{GatewayError, Result};
pub use crate::core::lookup::LookupService;
pub use crate::core::services::Services;
pub use crate::core::types::*;
