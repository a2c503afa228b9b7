// ── Lists store ──
//
// Caches the collection of shopping lists plus the detail of the list
// currently being viewed.

use std::sync::Arc;

use shoplist_api::{ApiClient, RecordId};
use tracing::{debug, trace, warn};

use super::cell::StateCell;
use super::gate::{RequestGate, Ticket};
use crate::config::ResponseOrdering;
use crate::error::CoreError;
use crate::model::{EntityId, List};
use crate::stream::StateStream;

/// Snapshot of the lists store.
#[derive(Debug, Clone, PartialEq)]
pub struct ListsState {
    /// Lists in fetch order.
    pub lists: Vec<List>,
    /// Detail of the list last fetched with `fetch_list`.
    pub current: Option<List>,
    /// `true` until the first success or error transition.
    pub loading: bool,
    /// Last collection read error, empty after a successful `fetch_lists`.
    pub error: String,
    /// Last detail read error, empty after a successful `fetch_list`.
    pub detail_error: String,
}

impl Default for ListsState {
    fn default() -> Self {
        Self {
            lists: Vec::new(),
            current: None,
            loading: true,
            error: String::new(),
            detail_error: String::new(),
        }
    }
}

/// Completed operations that drive `ListsState` transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum ListsEvent {
    ListsLoaded(Vec<List>),
    ListsFailed(String),
    ListLoaded(List),
    ListFailed(String),
}

impl ListsState {
    /// Pure reducer: the state that follows `self` after `event`.
    pub fn apply(&self, event: ListsEvent) -> Self {
        match event {
            ListsEvent::ListsLoaded(lists) => Self {
                lists,
                loading: false,
                error: String::new(),
                ..self.clone()
            },
            ListsEvent::ListsFailed(error) => Self {
                lists: Vec::new(),
                loading: false,
                error,
                ..self.clone()
            },
            ListsEvent::ListLoaded(list) => Self {
                current: Some(list),
                loading: false,
                detail_error: String::new(),
                ..self.clone()
            },
            ListsEvent::ListFailed(detail_error) => Self {
                current: None,
                loading: false,
                detail_error,
                ..self.clone()
            },
        }
    }
}

/// Shared handle to the lists store. Cheap to clone.
#[derive(Clone)]
pub struct ListsStore {
    inner: Arc<ListsInner>,
}

struct ListsInner {
    api: Arc<ApiClient>,
    state: StateCell<ListsState>,
    collection_reads: RequestGate,
    detail_reads: RequestGate,
}

impl ListsStore {
    pub fn new(api: Arc<ApiClient>, ordering: ResponseOrdering) -> Self {
        Self {
            inner: Arc::new(ListsInner {
                api,
                state: StateCell::new(ListsState::default()),
                collection_reads: RequestGate::new(ordering),
                detail_reads: RequestGate::new(ordering),
            }),
        }
    }

    pub fn snapshot(&self) -> Arc<ListsState> {
        self.inner.state.snapshot()
    }

    pub fn subscribe(&self) -> StateStream<ListsState> {
        self.inner.state.subscribe()
    }

    /// Fetch every list, replacing the cached collection.
    ///
    /// Failures are not returned; they land in `ListsState::error`.
    pub async fn fetch_lists(&self) {
        let ticket = self.inner.collection_reads.issue();
        let event = match self.inner.api.list_lists().await {
            Ok(Some(records)) => {
                ListsEvent::ListsLoaded(records.into_iter().map(List::from).collect())
            }
            Ok(None) => {
                debug!("lists response was null, leaving state untouched");
                return;
            }
            Err(e) => {
                let err = CoreError::from(e);
                warn!(error = %err, "failed to fetch lists");
                ListsEvent::ListsFailed(err.to_string())
            }
        };
        self.settle(&self.inner.collection_reads, ticket, event);
    }

    /// Fetch a single list's detail into `ListsState::current`.
    ///
    /// Failures land in `ListsState::detail_error`; `error` belongs to
    /// the collection read and is left alone.
    pub async fn fetch_list(&self, list_id: &EntityId) {
        let ticket = self.inner.detail_reads.issue();
        let event = match self.inner.api.get_list(&RecordId::from(list_id)).await {
            Ok(Some(record)) => ListsEvent::ListLoaded(List::from(record)),
            Ok(None) => {
                debug!(%list_id, "list response was null, leaving state untouched");
                return;
            }
            Err(e) => {
                let err = CoreError::from(e);
                warn!(%list_id, error = %err, "failed to fetch list");
                ListsEvent::ListFailed(err.to_string())
            }
        };
        self.settle(&self.inner.detail_reads, ticket, event);
    }

    fn settle(&self, gate: &RequestGate, ticket: Ticket, event: ListsEvent) {
        trace!(?event, "lists transition");
        let applied = self
            .inner
            .state
            .transition(|state| gate.admits(ticket).then(|| state.apply(event)));
        if !applied {
            debug!("discarding superseded lists response");
        }
    }
}
