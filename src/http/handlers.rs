//! HTTP request handlers for the gateway API
//!
//! Implements handlers for the REST endpoints: health, fetch-xml,
//! fetch, search and article.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::error::GatewayError;
use crate::core::services::Services;
use crate::core::types::*;

/// Health check handler
///
/// Returns server status and version information.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Abstract XML handler (`GET /fetch-xml?pmid=`)
///
/// Query parameters are read with [`QueryParams::first`], so a repeated
/// `pmid` uses its first value. Relays the efetch abstract record verbatim as `application/xml`.
///
/// # Errors
///
/// - `MissingParameter`: `pmid` absent or blank
/// - `UpstreamFailure`: efetch failed or returned non-2xx
pub async fn fetch_xml_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<QueryParams>,
) -> Result<Response, GatewayError> {
    let xml = services.lookup.fetch_abstract(params.first("pmid")).await?;
    Ok(xml_response(xml))
}

/// Full record XML handler (`GET /fetch?pmid=`)
///
/// Same contract as [`fetch_xml_handler`] with the full record.
pub async fn fetch_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<QueryParams>,
) -> Result<Response, GatewayError> {
    let xml = services.lookup.fetch_full(params.first("pmid")).await?;
    Ok(xml_response(xml))
}

/// Search handler (`GET /search?term=`)
///
/// Returns up to 10 `{pmid, title, url}` items in relevance order;
/// an empty array when nothing matches.
///
/// # Errors
///
/// - `MissingParameter`: `term` absent or blank
/// - `UpstreamFailure`: esearch or esummary failed
/// - `InternalError`: upstream XML could not be parsed
pub async fn search_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<Vec<SearchResultItem>>, GatewayError> {
    let items = services.lookup.search(params.first("term")).await?;
    Ok(Json(items))
}

/// Article details handler (`GET /article?pmid=`)
///
/// Journal articles and book chapters are both parsed; a PMID with no
/// record is `NotFound`.
pub async fn article_handler(
    State(services): State<Arc<Services>>,
    Query(params): Query<QueryParams>,
) -> Result<Json<ArticleDetails>, GatewayError> {
    let article = services.lookup.article(params.first("pmid")).await?;
    Ok(Json(article))
}

fn xml_response(xml: String) -> Response {
    ([(header::CONTENT_TYPE, "application/xml")], xml).into_response()
}
