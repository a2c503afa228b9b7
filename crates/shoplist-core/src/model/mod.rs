// ── Domain model ──
//
// Canonical types handed to consumers. Wire shapes live in
// `shoplist-api`; `crate::convert` bridges the two.

pub mod entity_id;
pub mod item;
pub mod list;

pub use entity_id::EntityId;
pub use item::{Item, NewItem};
pub use list::List;
