use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::catalog::{CatalogService, CatalogSource};
use crate::ui::events::AppEvent;

/// Runs catalog fetches on the tokio runtime and reports the outcome to
/// the UI loop. At most one fetch is in flight.
pub struct CatalogFetcher<S> {
    service: Arc<CatalogService<S>>,
    runtime: Handle,
    events: Sender<AppEvent>,
    in_flight: Arc<AtomicBool>,
}

impl<S: CatalogSource + 'static> CatalogFetcher<S> {
    pub fn new(service: Arc<CatalogService<S>>, runtime: Handle, events: Sender<AppEvent>) -> Self {
        Self {
            service,
            runtime,
            events,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Start a fetch. `force` bypasses the cache.
    ///
    /// Returns false when a fetch is already running.
    pub fn load(&self, force: bool) -> bool {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return false;
        }

        let service = Arc::clone(&self.service);
        let events = self.events.clone();
        let in_flight = Arc::clone(&self.in_flight);
        self.runtime.spawn(async move {
            let result = if force {
                service.refresh().await
            } else {
                service.catalog().await
            };
            in_flight.store(false, Ordering::SeqCst);
            let _ = events.send(AppEvent::CatalogLoaded(result.map_err(|e| e.to_string())));
        });
        true
    }
}
