//! Frontend Models
//!
//! Data structures shared with the backend over the bridge.

use std::collections::HashMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Opaque identifier of a queued gathering item
pub type ItemId = u64;

/// One entry of the gathering list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatheringItem {
    pub id: ItemId,
    pub name: String,
    pub job: String,
    pub level: i32,
    pub quantity: i64,
}

/// Per-item record sent to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatheringRecord {
    pub need: i64,
    pub complete: i64,
    pub num_per_min: i64,
    pub job: String,
    pub level: i32,
}

impl From<&GatheringItem> for GatheringRecord {
    fn from(item: &GatheringItem) -> Self {
        Self {
            need: item.quantity,
            complete: 0,
            num_per_min: 0,
            job: item.job.clone(),
            level: item.level,
        }
    }
}

/// Name-keyed snapshot of the gathering list.
///
/// Keys keep the position of their first occurrence; a repeated name
/// overwrites the earlier record. Serializes as a plain map in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GatheringPayload {
    entries: Vec<(String, GatheringRecord)>,
}

impl GatheringPayload {
    pub fn from_items(items: &[GatheringItem]) -> Self {
        let mut entries: Vec<(String, GatheringRecord)> = Vec::with_capacity(items.len());
        let mut index: HashMap<&str, usize> = HashMap::new();
        for item in items {
            let record = GatheringRecord::from(item);
            match index.get(item.name.as_str()) {
                Some(&pos) => entries[pos].1 = record,
                None => {
                    index.insert(item.name.as_str(), entries.len());
                    entries.push((item.name.clone(), record));
                }
            }
        }
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&GatheringRecord> {
        self.entries.iter().find(|(key, _)| key == name).map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for GatheringPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

/// Response of `update_gathering_items`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Catalog entry returned by `get_gathering_items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub value: String,
    pub label: String,
    pub job: String,
    pub level: i32,
}

/// Progress record returned by `get_gathering_progress`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
    #[serde(default)]
    pub need: i64,
    #[serde(default)]
    pub complete: i64,
    #[serde(default)]
    pub num_per_min: f64,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub level: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: ItemId, name: &str, quantity: i64) -> GatheringItem {
        GatheringItem {
            id,
            name: name.to_string(),
            job: "Miner".to_string(),
            level: 5,
            quantity,
        }
    }

    #[test]
    fn test_payload_records() {
        let payload = GatheringPayload::from_items(&[item(1, "Copper Ore", 12), item(2, "Muddy Water", 3)]);

        assert_eq!(payload.len(), 2);
        let copper = payload.get("Copper Ore").unwrap();
        assert_eq!(copper.need, 12);
        assert_eq!(copper.complete, 0);
        assert_eq!(copper.num_per_min, 0);
        assert_eq!(copper.job, "Miner");
        assert_eq!(copper.level, 5);
    }

    #[test]
    fn test_payload_duplicate_name_last_write_wins() {
        let payload = GatheringPayload::from_items(&[
            item(1, "Copper Ore", 12),
            item(2, "Muddy Water", 3),
            item(3, "Copper Ore", 40),
        ]);

        assert_eq!(payload.len(), 2);
        assert_eq!(payload.get("Copper Ore").unwrap().need, 40);
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.find("Copper Ore").unwrap() < json.find("Muddy Water").unwrap());
    }

    #[test]
    fn test_payload_serializes_as_object_in_list_order() {
        let payload = GatheringPayload::from_items(&[item(1, "Tin Ore", 2), item(2, "Bone Chip", 1)]);
        let json = serde_json::to_string(&payload).unwrap();

        assert_eq!(
            json,
            r#"{"Tin Ore":{"need":2,"complete":0,"num_per_min":0,"job":"Miner","level":5},"Bone Chip":{"need":1,"complete":0,"num_per_min":0,"job":"Miner","level":5}}"#
        );
    }

    #[test]
    fn test_empty_payload() {
        let payload = GatheringPayload::from_items(&[]);
        assert!(payload.is_empty());
        assert_eq!(serde_json::to_string(&payload).unwrap(), "{}");
    }

    #[test]
    fn test_bridge_response_without_message() {
        let response: BridgeResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(response.success);
        assert_eq!(response.message, None);
    }
}
