// ── API-to-domain conversions ──
//
// Bridges raw `shoplist_api` wire records into canonical domain types.

use shoplist_api::{ItemRecord, ListRecord, RecordId};

use crate::model::{EntityId, Item, List};

impl From<RecordId> for EntityId {
    fn from(id: RecordId) -> Self {
        match id {
            RecordId::Number(n) => EntityId::Numeric(n),
            // Service text ids are opaque: never coerced to numbers.
            RecordId::Text(s) => EntityId::text_or_uuid(s),
        }
    }
}

impl From<&EntityId> for RecordId {
    fn from(id: &EntityId) -> Self {
        match id {
            EntityId::Numeric(n) => RecordId::Number(*n),
            other => RecordId::Text(other.to_string()),
        }
    }
}

impl From<ListRecord> for List {
    fn from(r: ListRecord) -> Self {
        Self {
            id: r.id.into(),
            title: r.title,
            extra: r.extra,
        }
    }
}

impl From<ItemRecord> for Item {
    fn from(r: ItemRecord) -> Self {
        Self {
            id: r.id.into(),
            list_id: r.list_id.into(),
            title: r.title,
            quantity: r.quantity,
            price: r.price,
        }
    }
}

impl From<&Item> for ItemRecord {
    fn from(item: &Item) -> Self {
        Self {
            id: RecordId::from(&item.id),
            list_id: RecordId::from(&item.list_id),
            title: item.title.clone(),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::Map;

    #[test]
    fn numeric_record_id_stays_numeric() {
        assert_eq!(EntityId::from(RecordId::Number(3)), EntityId::Numeric(3));
        assert_eq!(RecordId::from(&EntityId::Numeric(3)), RecordId::Number(3));
    }

    #[test]
    fn numeric_looking_text_id_round_trips_as_text() {
        let id = EntityId::from(RecordId::Text("007".into()));
        assert_eq!(id, EntityId::Text("007".into()));
        assert_eq!(RecordId::from(&id), RecordId::Text("007".into()));
        assert_eq!(serde_json::to_value(&id).unwrap(), serde_json::json!("007"));
    }

    #[test]
    fn uuid_entity_id_serializes_as_text() {
        let id = EntityId::generate();
        assert_eq!(RecordId::from(&id), RecordId::Text(id.to_string()));
    }

    #[test]
    fn list_record_converts_with_extra_fields() {
        let mut extra = Map::new();
        extra.insert("color".into(), "green".into());
        let list = List::from(ListRecord {
            id: RecordId::Number(1),
            title: "Groceries".into(),
            extra: extra.clone(),
        });
        assert_eq!(list.id, EntityId::Numeric(1));
        assert_eq!(list.extra, extra);
    }

    #[test]
    fn item_round_trips_through_record() {
        let item = Item {
            id: EntityId::generate(),
            list_id: EntityId::Numeric(1),
            title: "Milk".into(),
            quantity: 2.0,
            price: 3.5,
        };
        let back = Item::from(ItemRecord::from(&item));
        assert_eq!(back, item);
    }
}
