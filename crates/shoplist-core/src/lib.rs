//! Reactive data layer between `shoplist-api` and UI consumers.
//!
//! - **[`ShopClient`]**: Session facade owning one [`ListsStore`] and one
//!   [`ItemsStore`]. Views issue [`Command`]s through
//!   [`execute()`](ShopClient::execute) and read or subscribe to snapshots.
//!
//! - **Stores** ([`store`]): Minimal cache-and-reducer units. Each holds a
//!   collection plus `loading` / `error` flags behind a `tokio::sync::watch`
//!   channel; transitions are pure `apply(state, event) -> state` functions
//!   run under a single writer.
//!
//! - **[`StateStream<S>`]**: Subscription handle exposing `current()` /
//!   `latest()` / `changed()` and a `Stream` adapter.
//!
//! - **Domain model** ([`model`]): [`List`], [`Item`], [`NewItem`] and the
//!   [`EntityId`] accepting both service-seeded integers and client UUIDs.

pub mod client;
pub mod command;
pub mod config;
pub mod convert;
pub mod error;
pub mod model;
pub mod store;
pub mod stream;

// ── Primary re-exports ──────────────────────────────────────────────
pub use client::ShopClient;
pub use command::{Command, CommandResult};
pub use config::{ClientConfig, ResponseOrdering};
pub use error::CoreError;
pub use model::{EntityId, Item, List, NewItem};
pub use store::{ItemsEvent, ItemsState, ItemsStore, ListsEvent, ListsState, ListsStore};
pub use stream::{StateStream, StateWatchStream};
