//! The catalog proxy: serves `GET /api/fruits` by forwarding to the
//! third-party fruit API with the API key injected server-side.

pub mod error;
pub mod router;
pub mod server;
pub mod shutdown;
pub mod upstream;

pub use error::{ErrorResponse, ProxyError};
pub use server::{ProxyHandle, ProxyServer};
pub use upstream::{UpstreamClient, API_KEY_HEADER};
