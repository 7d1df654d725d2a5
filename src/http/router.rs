//! Router assembly
//!
//! Builds the axum `Router` from a `Services` instance: routes, CORS
//! policy from configuration, request logging and shared state.

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::core::config::CorsConfig;
use crate::core::error::{GatewayError, Result};
use crate::core::services::Services;
use crate::http::{handlers, middleware as http_middleware};

/// CORS layer for the configured origins
///
/// `"*"` allows every origin; otherwise only the listed origins may
/// issue cross-origin GET requests.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    if config.allows_any_origin() {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| GatewayError::ConfigError(format!("Invalid CORS origin: {origin}")))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any))
}

/// Build the API router
pub fn build_router(services: Arc<Services>) -> Result<Router> {
    let cors = cors_layer(&services.config.cors)?;

    let app = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/fetch-xml", get(handlers::fetch_xml_handler))
        .route("/fetch", get(handlers::fetch_handler))
        .route("/search", get(handlers::search_handler))
        .route("/article", get(handlers::article_handler))
        .layer(middleware::from_fn(http_middleware::log_request))
        .layer(cors)
        .with_state(services);

    Ok(app)
}
