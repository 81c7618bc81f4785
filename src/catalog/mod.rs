//! Fruit catalog: records, search/grouping and the fetch pipeline.
//!
//! ```text
//! HttpCatalogSource ──→ CatalogService (retry + 5 min cache) ──→ filter_fruits ──→ group_fruits
//! ```

mod error;
mod filter;
mod model;
mod retry;
mod service;
mod source;

pub use error::CatalogError;
pub use filter::{
    filter_fruits, group_fruits, groups_to_json, CatalogSummary, FruitGroup, GroupBy,
    UnknownGroupKey, ALL_FRUITS_GROUP,
};
pub use model::{Fruit, Nutritions};
pub use retry::RetryPolicy;
pub use service::{CatalogService, DEFAULT_STALE_TIME};
pub use source::{CatalogSource, HttpCatalogSource};
