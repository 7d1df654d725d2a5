//! HTTP mapping for gateway errors
//!
//! Converts `GatewayError` into a status code and a JSON body so
//! handlers can return `Result<_, GatewayError>` directly.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::core::error::GatewayError;

/// Convert error to appropriate HTTP status code
pub fn status_code(err: &GatewayError) -> StatusCode {
    match err {
        GatewayError::MissingParameter(_) => StatusCode::BAD_REQUEST,
        GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
        GatewayError::UpstreamFailure(_)
        | GatewayError::InternalError(_)
        | GatewayError::ConfigError(_)
        | GatewayError::IoError(_)
        | GatewayError::SerdeError(_)
        | GatewayError::TomlError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = status_code(&self);
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "Request error");
        }

        let body = Json(json!({
            "error": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
