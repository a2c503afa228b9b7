// ── Client facade ──
//
// Owns the API client and both stores for one session. Views hold a
// `ShopClient`, issue `Command`s and subscribe to store snapshots.

use std::sync::Arc;

use shoplist_api::{ApiClient, TransportConfig};
use tracing::debug;

use crate::command::{Command, CommandResult};
use crate::config::ClientConfig;
use crate::error::CoreError;
use crate::model::{EntityId, Item, NewItem};
use crate::store::{ItemsState, ItemsStore, ListsState, ListsStore};
use crate::stream::StateStream;

/// The main entry point for consumers.
///
/// Cheaply cloneable via `Arc<ShopClientInner>`. All clones share the
/// same two stores, so every subscriber sees the same transitions.
#[derive(Clone)]
pub struct ShopClient {
    inner: Arc<ShopClientInner>,
}

struct ShopClientInner {
    config: ClientConfig,
    lists: ListsStore,
    items: ItemsStore,
}

impl ShopClient {
    /// Build the HTTP client and fresh stores. Does no I/O.
    pub fn new(config: ClientConfig) -> Result<Self, CoreError> {
        let transport = TransportConfig::default().with_timeout(config.timeout);
        let api = ApiClient::new(config.base_url.clone(), &transport)?;
        Ok(Self::with_api(config, api))
    }

    /// Wrap an existing `ApiClient` (e.g. one built around a custom
    /// `reqwest::Client`).
    pub fn with_api(config: ClientConfig, api: ApiClient) -> Self {
        let api = Arc::new(api);
        let lists = ListsStore::new(Arc::clone(&api), config.ordering);
        let items = ItemsStore::new(api, config.ordering);
        Self {
            inner: Arc::new(ShopClientInner {
                config,
                lists,
                items,
            }),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    pub fn lists_store(&self) -> &ListsStore {
        &self.inner.lists
    }

    pub fn items_store(&self) -> &ItemsStore {
        &self.inner.items
    }

    // ── Snapshots & subscriptions ────────────────────────────────

    pub fn lists(&self) -> Arc<ListsState> {
        self.inner.lists.snapshot()
    }

    pub fn items(&self) -> Arc<ItemsState> {
        self.inner.items.snapshot()
    }

    pub fn subscribe_lists(&self) -> StateStream<ListsState> {
        self.inner.lists.subscribe()
    }

    pub fn subscribe_items(&self) -> StateStream<ItemsState> {
        self.inner.items.subscribe()
    }

    // ── Commands ─────────────────────────────────────────────────

    /// Route a command to the owning store.
    pub async fn execute(&self, command: Command) -> Result<CommandResult, CoreError> {
        debug!(?command, "executing command");
        match command {
            Command::FetchLists => {
                self.inner.lists.fetch_lists().await;
                Ok(CommandResult::Lists(self.lists()))
            }
            Command::FetchList { list_id } => {
                self.inner.lists.fetch_list(&list_id).await;
                Ok(CommandResult::Lists(self.lists()))
            }
            Command::FetchItems { list_id } => {
                self.inner.items.fetch_items(&list_id).await;
                Ok(CommandResult::Items(self.items()))
            }
            Command::AddItem(new_item) => self.add_item(new_item).await.map(CommandResult::ItemAdded),
            Command::OpenList { list_id } => {
                self.open_list(&list_id).await;
                Ok(CommandResult::ListDetail {
                    lists: self.lists(),
                    items: self.items(),
                })
            }
        }
    }

    /// Shorthand for `Command::AddItem`.
    pub async fn add_item(&self, new_item: NewItem) -> Result<Option<Item>, CoreError> {
        self.inner.items.add_item(new_item).await
    }

    /// Load the detail view for `list_id`. Items are fetched only when the
    /// items store holds none, so a cached collection from another list
    /// is kept until the caller refreshes it explicitly.
    async fn open_list(&self, list_id: &EntityId) {
        let detail = self.inner.lists.fetch_list(list_id);
        if self.items().items.is_empty() {
            tokio::join!(detail, self.inner.items.fetch_items(list_id));
        } else {
            debug!(%list_id, "items already cached, skipping items fetch");
            detail.await;
        }
    }
}
