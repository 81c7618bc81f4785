use thiserror::Error;

/// Errors produced while fetching the fruit catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced an HTTP response.
    #[error("Failed to reach catalog at '{endpoint}': {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The catalog answered with a non-2xx status.
    #[error("Failed to fetch fruits: {status} {reason}")]
    Status { status: u16, reason: String },

    /// The body was not a JSON array of fruits.
    #[error("Failed to decode catalog: {0}")]
    Decode(String),
}

impl CatalogError {
    /// HTTP status of the failed response, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            CatalogError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 4xx responses. Those are never retried.
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|status| (400..500).contains(&status))
    }
}
