//! Cache-with-expiry and retry loop around a [`CatalogSource`].

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use super::error::CatalogError;
use super::model::Fruit;
use super::retry::RetryPolicy;
use super::source::CatalogSource;

/// Default validity window of a fetched catalog.
pub const DEFAULT_STALE_TIME: Duration = Duration::from_secs(5 * 60);

struct CachedCatalog {
    fruits: Arc<Vec<Fruit>>,
    fetched_at: Instant,
}

/// Serves the catalog from memory while it is fresh and refetches it,
/// with retries, once it goes stale.
pub struct CatalogService<S> {
    source: S,
    policy: RetryPolicy,
    stale_time: Duration,
    cache: Mutex<Option<CachedCatalog>>,
}

impl<S: CatalogSource> CatalogService<S> {
    pub fn new(source: S, policy: RetryPolicy, stale_time: Duration) -> Self {
        Self {
            source,
            policy,
            stale_time,
            cache: Mutex::new(None),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// The catalog, from cache when younger than the stale time.
    pub async fn catalog(&self) -> Result<Arc<Vec<Fruit>>, CatalogError> {
        if let Some(fruits) = self.fresh() {
            tracing::debug!(count = fruits.len(), "Catalog cache hit");
            return Ok(fruits);
        }
        self.refresh().await
    }

    /// Fetch unconditionally. On failure the previous cache entry is kept.
    pub async fn refresh(&self) -> Result<Arc<Vec<Fruit>>, CatalogError> {
        let fruits = Arc::new(self.fetch_with_retry().await?);
        *self.cache.lock() = Some(CachedCatalog {
            fruits: Arc::clone(&fruits),
            fetched_at: Instant::now(),
        });
        tracing::info!(count = fruits.len(), "Fruit catalog loaded");
        Ok(fruits)
    }

    /// Last successfully fetched catalog, fresh or not.
    pub fn cached(&self) -> Option<Arc<Vec<Fruit>>> {
        self.cache.lock().as_ref().map(|entry| Arc::clone(&entry.fruits))
    }

    /// True when nothing is cached or the cached catalog has expired.
    pub fn is_stale(&self) -> bool {
        self.fresh().is_none()
    }

    fn fresh(&self) -> Option<Arc<Vec<Fruit>>> {
        self.cache
            .lock()
            .as_ref()
            .filter(|entry| entry.fetched_at.elapsed() < self.stale_time)
            .map(|entry| Arc::clone(&entry.fruits))
    }

    async fn fetch_with_retry(&self) -> Result<Vec<Fruit>, CatalogError> {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match self.source.fetch_catalog().await {
                Ok(fruits) => return Ok(fruits),
                Err(err) if self.policy.should_retry(attempts, &err) => {
                    let delay = self.policy.backoff(attempts);
                    tracing::warn!(
                        attempt = attempts,
                        max_attempts = self.policy.max_attempts,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "Catalog fetch failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    tracing::warn!(attempt = attempts, error = %err, "Catalog fetch failed");
                    return Err(err);
                }
            }
        }
    }
}
