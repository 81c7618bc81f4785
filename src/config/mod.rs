//! Configuration: TOML file, defaults and environment overrides.

mod loader;
mod types;

pub use loader::{ConfigError, EnvOverrides, API_KEY_ENV_VAR, ORIGIN_ENV_VAR};
pub use types::{CatalogConfig, Config, ProxyConfig, UpstreamConfig};
