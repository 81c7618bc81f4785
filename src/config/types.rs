use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub proxy: ProxyConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Third-party fruit API the proxy forwards to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Scheme + host of the fruit API, without the `/api/fruits` path.
    #[serde(default = "default_upstream_base_url")]
    pub base_url: String,
    /// Sent as `x-api-key`. Never handed to catalog consumers.
    #[serde(default = "default_api_key")]
    pub api_key: String,
    /// Origin sent upstream when the caller did not provide one.
    #[serde(default = "default_origin")]
    pub default_origin: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Local catalog proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Bind address for the proxy server (host:port).
    #[serde(default = "default_proxy_bind_addr")]
    pub bind_addr: String,
}

/// How the browser and `list` command fetch the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Full URL of the catalog, normally the local proxy.
    #[serde(default = "default_catalog_endpoint")]
    pub endpoint: String,
    /// Total fetch attempts, first one included (default: 3).
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base backoff in milliseconds, doubled per retry (default: 1000).
    #[serde(default = "default_retry_backoff_base_ms")]
    pub retry_backoff_base_ms: u64,
    /// Upper bound for a single backoff (default: 30000).
    #[serde(default = "default_retry_backoff_max_ms")]
    pub retry_backoff_max_ms: u64,
    /// How long a fetched catalog stays fresh (default: 300).
    #[serde(default = "default_stale_time")]
    pub stale_time_seconds: u64,
}

fn default_upstream_base_url() -> String {
    "https://fruity-proxy.vercel.app".to_string()
}

fn default_api_key() -> String {
    "fruit-api-challenge-2025".to_string()
}

fn default_origin() -> String {
    "http://localhost:5173".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_proxy_bind_addr() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_catalog_endpoint() -> String {
    "http://127.0.0.1:8080/api/fruits".to_string()
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_backoff_base_ms() -> u64 {
    1000
}

fn default_retry_backoff_max_ms() -> u64 {
    30_000
}

fn default_stale_time() -> u64 {
    300
}

impl UpstreamConfig {
    /// The upstream catalog URL.
    pub fn fruits_url(&self) -> String {
        format!("{}/api/fruits", self.base_url.trim_end_matches('/'))
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_base_url(),
            api_key: default_api_key(),
            default_origin: default_origin(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_proxy_bind_addr(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: default_catalog_endpoint(),
            max_attempts: default_max_attempts(),
            retry_backoff_base_ms: default_retry_backoff_base_ms(),
            retry_backoff_max_ms: default_retry_backoff_max_ms(),
            stale_time_seconds: default_stale_time(),
        }
    }
}
