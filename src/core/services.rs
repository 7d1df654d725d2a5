//! Unified service container for the gateway
//!
//! Provides shared access to all core services.

use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::eutils::EutilsClient;
use crate::core::lookup::LookupService;
use std::sync::Arc;

/// Unified services container
///
/// The HTTP server and the CLI both use this struct for service access.
#[derive(Clone)]
pub struct Services {
    /// Lookup operations against the E-utilities upstream
    pub lookup: Arc<LookupService>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = EutilsClient::new(&config.upstream)?;
        let lookup = Arc::new(LookupService::new(client, config.search.max_results));

        Ok(Self {
            lookup,
            config: Arc::new(config),
        })
    }
}
