// ── Command API ──
//
// Everything a view can ask of the stores goes through `Command`.
// Stores never fetch on their own; the view layer decides when.

use std::sync::Arc;

use crate::model::{EntityId, Item, NewItem};
use crate::store::{ItemsState, ListsState};

/// Operations a view issues against a [`ShopClient`](crate::ShopClient).
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Refresh the collection of lists.
    FetchLists,
    /// Load one list's detail.
    FetchList { list_id: EntityId },
    /// Refresh the items of a list.
    FetchItems { list_id: EntityId },
    /// Create an item and append it.
    AddItem(NewItem),
    /// Enter a list's detail view: load the list and, if no items are
    /// cached yet, its items.
    OpenList { list_id: EntityId },
}

/// Result of a command execution.
///
/// Read commands return the post-transition snapshot; read failures are
/// reported inside it (`error`), not as `Err`.
#[derive(Debug)]
pub enum CommandResult {
    Lists(Arc<ListsState>),
    Items(Arc<ItemsState>),
    ListDetail {
        lists: Arc<ListsState>,
        items: Arc<ItemsState>,
    },
    ItemAdded(Option<Item>),
}
