use std::time::Duration;

use axum::body::Bytes;
use reqwest::Client;
use serde::de::IgnoredAny;
use tokio::time::timeout;

use crate::config::UpstreamConfig;
use crate::proxy::error::ProxyError;

/// Header carrying the upstream API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Client for the third-party fruit API. Holds the API key so callers
/// of the proxy never see it.
pub struct UpstreamClient {
    client: Client,
    fruits_url: String,
    api_key: String,
    default_origin: String,
    request_timeout: Duration,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, ProxyError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(|e| ProxyError::Internal(format!("Failed to build upstream client: {}", e)))?;

        Ok(Self {
            client,
            fruits_url: config.fruits_url(),
            api_key: config.api_key.clone(),
            default_origin: config.default_origin.clone(),
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    /// Origin used when the caller did not send one.
    pub fn default_origin(&self) -> &str {
        &self.default_origin
    }

    /// Fetch the raw catalog body on behalf of `origin`.
    ///
    /// The body is checked to be JSON and returned byte for byte.
    pub async fn fetch_fruits(&self, origin: &str) -> Result<Bytes, ProxyError> {
        match timeout(self.request_timeout, self.do_fetch(origin)).await {
            Ok(result) => result,
            Err(_) => Err(ProxyError::RequestTimeout {
                duration: self.request_timeout.as_secs(),
            }),
        }
    }

    async fn do_fetch(&self, origin: &str) -> Result<Bytes, ProxyError> {
        let upstream_resp = self
            .client
            .get(&self.fruits_url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(reqwest::header::ORIGIN, origin)
            .send()
            .await
            .map_err(|e| ProxyError::ConnectionError {
                url: self.fruits_url.clone(),
                source: e,
            })?;

        let status = upstream_resp.status();
        if !status.is_success() {
            return Err(ProxyError::UpstreamError {
                status: status.as_u16(),
                message: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = upstream_resp
            .bytes()
            .await
            .map_err(|e| ProxyError::Internal(format!("Failed to read response body: {}", e)))?;

        serde_json::from_slice::<IgnoredAny>(&body)
            .map_err(|e| ProxyError::InvalidUpstreamBody(e.to_string()))?;

        Ok(body)
    }
}
