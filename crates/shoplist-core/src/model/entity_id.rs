// ── Record identity ──
//
// The service seeds integer ids; records created by this client carry
// UUID v4 ids. `EntityId` accepts both and displays them transparently.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Canonical identifier for a list or an item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Numeric(i64),
    Uuid(Uuid),
    Text(String),
}

impl EntityId {
    /// Fresh collision-resistant identifier for a client-created record.
    pub fn generate() -> Self {
        Self::Uuid(Uuid::new_v4())
    }

    /// `Uuid` when `s` is a canonical lowercase hyphenated UUID, else `Text`.
    pub(crate) fn text_or_uuid(s: String) -> Self {
        match Uuid::parse_str(&s) {
            Ok(u) if u.to_string() == s => Self::Uuid(u),
            _ => Self::Text(s),
        }
    }

    pub fn as_numeric(&self) -> Option<i64> {
        match self {
            Self::Numeric(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<&Uuid> {
        match self {
            Self::Uuid(u) => Some(u),
            _ => None,
        }
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_owned()))
    }
}

impl From<i64> for EntityId {
    fn from(n: i64) -> Self {
        Self::Numeric(n)
    }
}

impl From<Uuid> for EntityId {
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

/// Parses user input. Text becomes `Numeric` or `Uuid` only when it is
/// that value's canonical spelling, so `"007"` stays `Text`.
impl From<String> for EntityId {
    fn from(s: String) -> Self {
        match s.parse::<i64>() {
            Ok(n) if n.to_string() == s => Self::Numeric(n),
            _ => Self::text_or_uuid(s),
        }
    }
}

impl From<&str> for EntityId {
    fn from(s: &str) -> Self {
        Self::from(s.to_owned())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn entity_id_from_numeric_string() {
        let id: EntityId = "42".parse().unwrap();
        assert_eq!(id.as_numeric(), Some(42));
    }

    #[test]
    fn entity_id_from_uuid_string() {
        let id = EntityId::from("550e8400-e29b-41d4-a716-446655440000");
        assert!(id.as_uuid().is_some());
    }

    #[test]
    fn entity_id_falls_back_to_text() {
        let id = EntityId::from("groceries");
        assert_eq!(id, EntityId::Text("groceries".into()));
        assert_eq!(id.to_string(), "groceries");
    }

    #[test]
    fn zero_padded_digits_stay_text() {
        let id = EntityId::from("007");
        assert_eq!(id, EntityId::Text("007".into()));
        assert_eq!(id.to_string(), "007");
    }

    #[test]
    fn uppercase_uuid_stays_text() {
        let id = EntityId::from("550E8400-E29B-41D4-A716-446655440000");
        assert!(id.as_uuid().is_none());
        assert_eq!(id.to_string(), "550E8400-E29B-41D4-A716-446655440000");
    }

    #[test]
    fn generated_ids_are_uuids_and_distinct() {
        let a = EntityId::generate();
        let b = EntityId::generate();
        assert!(a.as_uuid().is_some());
        assert_ne!(a, b);
    }

    #[test]
    fn entity_id_serde_is_transparent() {
        let n: EntityId = serde_json::from_str("10").unwrap();
        assert_eq!(n, EntityId::Numeric(10));
        assert_eq!(serde_json::to_string(&n).unwrap(), "10");

        let u: EntityId =
            serde_json::from_str("\"550e8400-e29b-41d4-a716-446655440000\"").unwrap();
        assert!(u.as_uuid().is_some());
    }
}
