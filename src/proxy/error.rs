//! Error types and response handling for the catalog proxy.
//!
//! Provides HTTP status code mapping and JSON error response generation.

use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors that can occur while serving the catalog.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Failed to connect to the upstream fruit API
    #[error("Connection failed to '{url}': {source}")]
    ConnectionError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Upstream did not answer within the request timeout
    #[error("Request timeout after {duration}s")]
    RequestTimeout { duration: u64 },

    /// Upstream returned an error response
    #[error("Failed to fetch fruits: {status} {message}")]
    UpstreamError { status: u16, message: String },

    /// Upstream answered 2xx with something that is not JSON
    #[error("Upstream returned invalid JSON: {0}")]
    InvalidUpstreamBody(String),

    /// Could not bind the listening socket
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Server I/O failure
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProxyError {
    /// Map error variant to appropriate HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::ConnectionError { .. } => StatusCode::BAD_GATEWAY,
            ProxyError::RequestTimeout { .. } => StatusCode::GATEWAY_TIMEOUT,
            // Only error statuses are passed through; anything else upstream
            // sent without a 2xx is a gateway failure.
            ProxyError::UpstreamError { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|code| code.is_client_error() || code.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            ProxyError::InvalidUpstreamBody(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Bind { .. } | ProxyError::Io(_) | ProxyError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get error type string for JSON responses
    pub fn error_type(&self) -> &'static str {
        match self {
            ProxyError::ConnectionError { .. } => "connection_error",
            ProxyError::RequestTimeout { .. } => "request_timeout",
            ProxyError::UpstreamError { .. } => "upstream_error",
            ProxyError::InvalidUpstreamBody(_) => "invalid_upstream_body",
            ProxyError::Bind { .. } => "bind_error",
            ProxyError::Io(_) => "io_error",
            ProxyError::Internal(_) => "internal_error",
        }
    }
}

/// Builder for standardized error responses
pub struct ErrorResponse;

impl ErrorResponse {
    /// JSON error body with the caller's CORS origin echoed back.
    pub fn from_error(err: &ProxyError, request_id: &str, allow_origin: HeaderValue) -> Response {
        let body = serde_json::json!({
            "error": {
                "type": err.error_type(),
                "message": err.to_string(),
                "request_id": request_id
            }
        });

        (
            err.status_code(),
            [
                (CONTENT_TYPE, HeaderValue::from_static("application/json")),
                (ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin),
            ],
            body.to_string(),
        )
            .into_response()
    }
}
