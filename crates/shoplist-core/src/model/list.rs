use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::EntityId;

/// A shopping list. Owned by the service; the client only caches it.
///
/// Fields beyond `id` and `title` are opaque and carried in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: EntityId,
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
