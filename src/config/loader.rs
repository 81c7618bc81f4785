use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use crate::catalog::RetryPolicy;
use crate::config::types::Config;

/// Overrides the origin sent upstream when callers send none.
pub const ORIGIN_ENV_VAR: &str = "FRUITJAR_ORIGIN";
/// Overrides the upstream API key.
pub const API_KEY_ENV_VAR: &str = "FRUITJAR_API_KEY";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Values taken from the environment after the file is parsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    pub origin: Option<String>,
    pub api_key: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        let read = |key: &str| std::env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            origin: read(ORIGIN_ENV_VAR),
            api_key: read(API_KEY_ENV_VAR),
        }
    }
}

impl Config {
    /// `~/.config/fruitjar/config.toml` or the platform equivalent,
    /// falling back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("fruitjar").join("config.toml")
    }

    /// Load from the default path, then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`, then apply environment overrides.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with(path, EnvOverrides::from_env())
    }

    /// Load from `path` with the given overrides. A missing file yields the
    /// defaults.
    pub fn load_with(path: &Path, overrides: EnvOverrides) -> Result<Self, ConfigError> {
        let config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Config::default()
        };

        let config = config.with_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: EnvOverrides) -> Self {
        if let Some(origin) = overrides.origin {
            self.upstream.default_origin = origin;
        }
        if let Some(api_key) = overrides.api_key {
            self.upstream.api_key = api_key;
        }
        self
    }

    /// Checks:
    /// - The upstream base URL is set
    /// - The proxy bind address is a socket address
    /// - The catalog endpoint is an http(s) URL
    /// - At least one fetch attempt and a non-zero stale time
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fail = |message: String| Err(ConfigError::ValidationError { message });

        if self.upstream.base_url.trim().is_empty() {
            return fail("upstream.base_url must not be empty".to_string());
        }

        if self.proxy.bind_addr.parse::<SocketAddr>().is_err() {
            return fail(format!(
                "Invalid proxy bind address '{}'",
                self.proxy.bind_addr
            ));
        }

        let endpoint = &self.catalog.endpoint;
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return fail(format!("Catalog endpoint '{}' is not an http(s) URL", endpoint));
        }

        if self.catalog.max_attempts == 0 {
            return fail("catalog.max_attempts must be at least 1".to_string());
        }

        if self.catalog.stale_time_seconds == 0 {
            return fail("catalog.stale_time_seconds must be at least 1".to_string());
        }

        Ok(())
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.catalog.max_attempts,
            backoff_base: Duration::from_millis(self.catalog.retry_backoff_base_ms),
            backoff_max: Duration::from_millis(self.catalog.retry_backoff_max_ms),
        }
    }

    pub fn stale_time(&self) -> Duration {
        Duration::from_secs(self.catalog.stale_time_seconds)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.timeout_seconds as u64)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream.connect_timeout_seconds as u64)
    }
}
