//! Per-request lookup logging
//!
//! Each gateway request is logged once, on completion, with the
//! E-utilities calls its route makes and the `pmid` or `term` it asked
//! for. Server errors log at ERROR, rejected input at WARN.

use axum::{
    body::Body,
    extract::Query,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};

use crate::core::types::QueryParams;

/// Upstream E-utilities calls behind a gateway route
pub fn upstream_calls(path: &str) -> &'static str {
    match path {
        "/fetch-xml" | "/fetch" | "/article" => "efetch",
        "/search" => "esearch+esummary",
        "/health" => "none",
        _ => "unrouted",
    }
}

/// Log route, upstream calls, lookup key, status and duration
pub async fn log_request(request: Request<Body>, next: Next) -> Response {
    let route = request.uri().path().to_string();
    let upstream = upstream_calls(&route);
    let params = Query::<QueryParams>::try_from_uri(request.uri())
        .map(|Query(params)| params)
        .unwrap_or_default();
    let start = Instant::now();

    let response = next.run(request).await;

    let duration_ms = start.elapsed().as_millis() as u64;
    let status = response.status();
    let pmid = params.first("pmid");
    let term = params.first("term");

    if status.is_server_error() {
        error!(
            route = %route,
            upstream,
            pmid,
            term,
            status = status.as_u16(),
            duration_ms,
            "Lookup failed"
        );
    } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
        warn!(
            route = %route,
            upstream,
            pmid,
            term,
            status = status.as_u16(),
            duration_ms,
            "Lookup rejected"
        );
    } else {
        info!(
            route = %route,
            upstream,
            pmid,
            term,
            status = status.as_u16(),
            duration_ms,
            "Lookup completed"
        );
    }

    response
}
