// ── Items store ──
//
// Caches the items of one list at a time and appends items created
// through `add_item`. The store is not keyed by list: a fetch for another
// list simply replaces the collection.

use std::sync::Arc;

use shoplist_api::{ApiClient, ItemRecord, RecordId};
use tracing::{debug, trace, warn};

use super::cell::StateCell;
use super::gate::{RequestGate, Ticket};
use crate::config::ResponseOrdering;
use crate::error::CoreError;
use crate::model::{EntityId, Item, NewItem};
use crate::stream::StateStream;

/// Snapshot of the items store.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemsState {
    /// Items in fetch-then-append order.
    pub items: Vec<Item>,
    /// `true` until the first success or error transition.
    pub loading: bool,
    /// Last read error, empty after a successful fetch.
    pub error: String,
    /// Last failed `add_item`, cleared by the next successful one.
    /// Kept apart from `error` so a write failure never hides the items.
    pub write_error: Option<String>,
}

impl Default for ItemsState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            error: String::new(),
            write_error: None,
        }
    }
}

/// Completed operations that drive `ItemsState` transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemsEvent {
    ItemsLoaded(Vec<Item>),
    ItemsFailed(String),
    ItemAdded(Item),
    AddFailed(String),
}

impl ItemsState {
    /// Pure reducer: the state that follows `self` after `event`.
    pub fn apply(&self, event: ItemsEvent) -> Self {
        match event {
            ItemsEvent::ItemsLoaded(items) => Self {
                items,
                loading: false,
                error: String::new(),
                ..self.clone()
            },
            ItemsEvent::ItemsFailed(error) => Self {
                items: Vec::new(),
                loading: false,
                error,
                ..self.clone()
            },
            ItemsEvent::ItemAdded(item) => {
                let mut items = self.items.clone();
                items.push(item);
                Self {
                    items,
                    loading: false,
                    write_error: None,
                    ..self.clone()
                }
            }
            ItemsEvent::AddFailed(message) => Self {
                write_error: Some(message),
                ..self.clone()
            },
        }
    }
}

/// Shared handle to the items store. Cheap to clone.
#[derive(Clone)]
pub struct ItemsStore {
    inner: Arc<ItemsInner>,
}

struct ItemsInner {
    api: Arc<ApiClient>,
    state: StateCell<ItemsState>,
    reads: RequestGate,
}

impl ItemsStore {
    pub fn new(api: Arc<ApiClient>, ordering: ResponseOrdering) -> Self {
        Self {
            inner: Arc::new(ItemsInner {
                api,
                state: StateCell::new(ItemsState::default()),
                reads: RequestGate::new(ordering),
            }),
        }
    }

    pub fn snapshot(&self) -> Arc<ItemsState> {
        self.inner.state.snapshot()
    }

    pub fn subscribe(&self) -> StateStream<ItemsState> {
        self.inner.state.subscribe()
    }

    /// Fetch the items of `list_id`, replacing the cached collection.
    ///
    /// Failures are not returned; they land in `ItemsState::error`.
    pub async fn fetch_items(&self, list_id: &EntityId) {
        let ticket = self.inner.reads.issue();
        let event = match self.inner.api.list_items(&RecordId::from(list_id)).await {
            Ok(Some(records)) => {
                ItemsEvent::ItemsLoaded(records.into_iter().map(Item::from).collect())
            }
            Ok(None) => {
                debug!(%list_id, "items response was null, leaving state untouched");
                return;
            }
            Err(e) => {
                let err = CoreError::from(e);
                warn!(%list_id, error = %err, "failed to fetch items");
                ItemsEvent::ItemsFailed(err.to_string())
            }
        };
        self.settle(Some(ticket), event);
    }

    /// Create an item on the service and append it locally.
    ///
    /// The appended value is the locally built item, not the service's
    /// echo. A failed write leaves `items`, `loading` and `error` as they
    /// were; it is recorded only in `write_error` and returned to the
    /// caller. `Ok(None)` means the service answered `null` and nothing
    /// was appended.
    pub async fn add_item(&self, new_item: NewItem) -> Result<Option<Item>, CoreError> {
        let item = new_item.into_item(EntityId::generate());
        let record = ItemRecord::from(&item);

        match self.inner.api.create_item(&record).await {
            Ok(Some(echo)) => {
                trace!(%echo, "create item echoed");
                self.settle(None, ItemsEvent::ItemAdded(item.clone()));
                Ok(Some(item))
            }
            Ok(None) => {
                debug!(id = %item.id, "create item response was null, nothing appended");
                Ok(None)
            }
            Err(e) => {
                let err = CoreError::from(e);
                warn!(id = %item.id, error = %err, "failed to add item, collection unchanged");
                self.settle(None, ItemsEvent::AddFailed(err.to_string()));
                Err(err)
            }
        }
    }

    /// Apply `event`. Reads carry a ticket and may be discarded as stale;
    /// writes always apply.
    fn settle(&self, ticket: Option<Ticket>, event: ItemsEvent) {
        trace!(?event, "items transition");
        let gate = &self.inner.reads;
        let applied = self.inner.state.transition(|state| {
            ticket
                .is_none_or(|t| gate.admits(t))
                .then(|| state.apply(event))
        });
        if !applied {
            debug!("discarding superseded items response");
        }
    }
}
