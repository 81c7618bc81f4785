//! Catalog panel view state: search query, grouping, layout and cursor.

mod intent;
mod reducer;
mod state;

pub use intent::CatalogViewIntent;
pub use reducer::CatalogViewReducer;
pub use state::{CatalogProjection, CatalogRow, CatalogViewState, ViewType};
