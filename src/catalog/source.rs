use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;

use super::error::CatalogError;
use super::model::Fruit;

/// Anything that can produce the full fruit catalog.
///
/// A single call is a single attempt; retries and caching live in
/// [`CatalogService`](super::CatalogService).
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Vec<Fruit>, CatalogError>;
}

/// Fetches the catalog over HTTP with a plain GET.
pub struct HttpCatalogSource {
    client: Client,
    endpoint: String,
    headers: HeaderMap,
}

impl HttpCatalogSource {
    pub fn new(
        endpoint: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let endpoint = endpoint.into();
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .build()
            .map_err(|e| CatalogError::Network {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        Ok(Self {
            client,
            endpoint,
            headers: HeaderMap::new(),
        })
    }

    /// Send `name: value` with every request. Invalid header text is ignored
    /// with a warning.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.headers.insert(name, value);
            }
            _ => tracing::warn!(header = name, "Ignoring invalid catalog request header"),
        }
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_catalog(&self) -> Result<Vec<Fruit>, CatalogError> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching fruit catalog");

        let response = self
            .client
            .get(&self.endpoint)
            .headers(self.headers.clone())
            .send()
            .await
            .map_err(|e| CatalogError::Network {
                endpoint: self.endpoint.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| CatalogError::Network {
            endpoint: self.endpoint.clone(),
            source: e,
        })?;

        serde_json::from_slice(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}
