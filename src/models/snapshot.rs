use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::Item;

// ---------------------------------------------------------------------------
// Snapshot — Persisted form of the whole list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub items: Vec<Item>,
    #[serde(default)]
    pub next_id: u64,
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub version: String,
}
