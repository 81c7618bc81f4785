use std::sync::Arc;

use axum::extract::State;
use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, ORIGIN};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use uuid::Uuid;

use crate::proxy::error::ErrorResponse;
use crate::proxy::upstream::UpstreamClient;

#[derive(Clone)]
pub struct RouterEngine {
    upstream: Arc<UpstreamClient>,
}

impl RouterEngine {
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            upstream: Arc::new(upstream),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

pub fn build_router(engine: RouterEngine) -> Router {
    Router::new()
        .route("/api/fruits", get(fruits_handler))
        .route("/health", get(health_handler))
        .with_state(engine)
}

async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        service: "fruitjar",
    })
}

/// Forward the catalog request upstream with the API key, echoing the
/// caller's origin both upstream and in the CORS header.
async fn fruits_handler(State(engine): State<RouterEngine>, headers: HeaderMap) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let caller_origin = headers
        .get(ORIGIN)
        .filter(|value| !value.is_empty())
        .cloned();

    let upstream_origin = caller_origin
        .as_ref()
        .and_then(|value| value.to_str().ok())
        .unwrap_or(engine.upstream.default_origin())
        .to_string();
    let allow_origin = caller_origin.unwrap_or_else(|| HeaderValue::from_static("*"));

    tracing::debug!(request_id = %request_id, origin = %upstream_origin, "Catalog request");

    match engine.upstream.fetch_fruits(&upstream_origin).await {
        Ok(body) => {
            tracing::info!(request_id = %request_id, bytes = body.len(), "Catalog served");
            (
                StatusCode::OK,
                [
                    (CONTENT_TYPE, HeaderValue::from_static("application/json")),
                    (ACCESS_CONTROL_ALLOW_ORIGIN, allow_origin),
                ],
                body,
            )
                .into_response()
        }
        Err(err) => {
            tracing::warn!(request_id = %request_id, error = %err, "Catalog request failed");
            ErrorResponse::from_error(&err, &request_id, allow_origin)
        }
    }
}
