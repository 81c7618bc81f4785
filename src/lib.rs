//! Fruit nutrition browser.
//!
//! - [`catalog`]: fruit records, search and grouping, fetching with retry
//!   and a five minute cache
//! - [`jar`]: the user's picked fruits with quantities and running totals
//! - [`proxy`]: HTTP service that forwards catalog requests upstream with
//!   the API key injected server-side
//! - [`ui`]: terminal front-end over the catalog and the jar

pub mod catalog;
pub mod config;
pub mod jar;
pub mod logging;
pub mod mvi;
pub mod proxy;
pub mod ui;
