use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog item as stored in memory, on disk, and on the wire.
///
/// Field names are camelCase in JSON so the backing file and the HTTP
/// payloads share one encoding. Records written by older tooling may
/// lack fields; the serde defaults fill those in (empty strings, zero
/// price, epoch timestamps) so comparisons stay total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default = "epoch")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "epoch")]
    pub updated_at: DateTime<Utc>,
}

fn epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

/// Client-supplied item fields for create and update requests.
///
/// Any `id` or timestamp keys in the payload are ignored; identity and
/// clock handling belong to the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
}

impl ItemDraft {
    pub fn new(name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_round_trips_through_json() {
        let item = Item {
            id: 7,
            name: "Lamp".into(),
            description: "Desk lamp".into(),
            price: 19.5,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&item).unwrap();
        let parsed: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(item, parsed);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let item = Item {
            id: 1,
            name: "x".into(),
            description: String::new(),
            price: 0.0,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"updatedAt\""));
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let item: Item = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(item.name, "");
        assert_eq!(item.description, "");
        assert_eq!(item.price, 0.0);
        assert_eq!(item.created_at, DateTime::UNIX_EPOCH);
    }

    #[test]
    fn draft_ignores_unknown_keys() {
        let draft: ItemDraft =
            serde_json::from_str(r#"{"id": 99, "name": "Mug", "price": 4.0}"#).unwrap();
        assert_eq!(draft.name, "Mug");
        assert_eq!(draft.price, 4.0);
    }
}
