//! Terminal front-end: catalog on the left, jar on the right.

pub mod app;
pub mod catalog;
pub mod events;
pub mod fetcher;
pub mod render;
pub mod terminal_guard;
pub mod theme;

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::runtime::Handle;

use crate::catalog::{CatalogService, CatalogSource};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetcher::CatalogFetcher;
use crate::ui::terminal_guard::setup_terminal;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Run the UI until the user quits. Blocks the calling thread; catalog
/// fetches are spawned on `runtime`.
pub fn run<S: CatalogSource + 'static>(
    service: Arc<CatalogService<S>>,
    stale_time: Duration,
    runtime: Handle,
) -> anyhow::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(TICK_RATE);
    let fetcher = CatalogFetcher::new(service, runtime, events.sender());
    let mut app = App::new(stale_time);
    fetcher.load(false);

    loop {
        terminal.draw(|frame| render::draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next()? {
            AppEvent::Key(key) => app.on_key(key),
            AppEvent::Tick => {
                if app.on_tick(Instant::now()) {
                    tracing::debug!("Catalog stale, revalidating");
                    fetcher.load(false);
                }
            }
            AppEvent::Resize(cols, rows) => tracing::trace!(cols, rows, "Terminal resized"),
            AppEvent::CatalogLoaded(result) => app.on_catalog_loaded(result),
        }

        if app.take_refresh_request() && fetcher.load(true) {
            app.begin_refresh();
        }
    }

    drop(guard);
    Ok(())
}
