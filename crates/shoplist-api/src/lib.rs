// shoplist-api: Async Rust client for the shopping-list JSON API

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

pub use client::ApiClient;
pub use error::Error;
pub use models::{ItemRecord, ListRecord, RecordId};
pub use transport::TransportConfig;

/// Public mock server the service is normally reached through.
pub const DEFAULT_BASE_URL: &str =
    "https://my-json-server.typicode.com/PacktPublishing/React-Projects-Second-Edition";
