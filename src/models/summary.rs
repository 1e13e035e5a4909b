use serde::{Deserialize, Serialize};

use super::item::Item;

// ---------------------------------------------------------------------------
// ListSummary — Aggregated counts and costs for a set of items
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSummary {
    pub item_count: usize,
    pub bought_count: usize,
    pub pending_count: usize,
    pub total_cost: f64,
    pub bought_cost: f64,
    pub pending_cost: f64,
}

impl ListSummary {
    pub fn from_items<'a>(items: impl IntoIterator<Item = &'a Item>) -> Self {
        items.into_iter().fold(Self::default(), |mut acc, item| {
            acc.item_count += 1;
            acc.total_cost += item.total_price;
            if item.bought {
                acc.bought_count += 1;
                acc.bought_cost += item.total_price;
            } else {
                acc.pending_count += 1;
                acc.pending_cost += item.total_price;
            }
            acc
        })
    }
}
