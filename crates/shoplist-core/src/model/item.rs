use serde::{Deserialize, Serialize};

use super::EntityId;

/// An item on a shopping list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: EntityId,
    pub list_id: EntityId,
    pub title: String,
    pub quantity: f64,
    pub price: f64,
}

/// Fields for a new item. Not validated here; the caller owns input checks.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub list_id: EntityId,
    pub title: String,
    pub quantity: f64,
    pub price: f64,
}

impl NewItem {
    /// Attach an identifier, producing the record that gets submitted
    /// and, on success, appended to the local collection.
    pub fn into_item(self, id: EntityId) -> Item {
        Item {
            id,
            list_id: self.list_id,
            title: self.title,
            quantity: self.quantity,
            price: self.price,
        }
    }
}
