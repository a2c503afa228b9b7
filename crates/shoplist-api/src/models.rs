// Wire models for the shopping-list API.
//
// These mirror the JSON exactly. Domain types with richer identifiers
// live in `shoplist-core`; this crate only moves bytes.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw record identifier. The mock API seeds numeric ids, while records
/// created by clients may carry string ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

/// A shopping list as returned by `GET /lists` and `GET /lists/{id}`.
///
/// Fields other than `id` and `title` are kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListRecord {
    pub id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An item, both as returned by `GET /lists/{id}/items` and as the
/// request body of `POST /items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    pub id: RecordId,
    pub list_id: RecordId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub quantity: f64,
    #[serde(default)]
    pub price: f64,
}
