// ── Reactive stores ──
//
// Cache-and-reducer units over the service, with push-based change
// notification.

mod cell;
mod gate;
mod items;
mod lists;

pub use items::{ItemsEvent, ItemsState, ItemsStore};
pub use lists::{ListsEvent, ListsState, ListsStore};
