//! Read-only queries over the items held by a [`ListStore`].
//!
//! Everything here is in-memory filtering; results keep insertion order.

use crate::models::{Item, ListSummary};
use crate::queries::filter::{ItemFilter, ItemStatus};
use crate::store::{self, ListStore};

// ---------------------------------------------------------------------------
// ItemQuery
// ---------------------------------------------------------------------------

/// Query interface borrowing a [`ListStore`].
pub struct ItemQuery<'a> {
    store: &'a ListStore,
}

impl<'a> ItemQuery<'a> {
    /// Create a new `ItemQuery` bound to the given store.
    pub fn new(store: &'a ListStore) -> Self {
        Self { store }
    }

    /// Borrow every item matching `filter`.
    pub fn iter<'f>(&self, filter: &'f ItemFilter) -> impl Iterator<Item = &'a Item> + 'f
    where
        'a: 'f,
    {
        let matches = filter.matcher();
        self.store.items().iter().filter(move |item| matches(*item))
    }

    /// List items matching `filter`, cloned for rendering.
    pub fn list(&self, filter: &ItemFilter) -> Vec<Item> {
        self.iter(filter).cloned().collect()
    }

    /// Search item names and comments (case-insensitive substring).
    pub fn search(&self, term: &str) -> Vec<Item> {
        self.list(&ItemFilter::new().search(term))
    }

    pub fn by_category(&self, category: &str) -> Vec<Item> {
        self.list(&ItemFilter::new().category(category))
    }

    pub fn with_status(&self, status: ItemStatus) -> Vec<Item> {
        self.list(&ItemFilter::new().status(status))
    }

    pub fn count(&self, filter: &ItemFilter) -> usize {
        self.iter(filter).count()
    }

    /// Sum of `total_price` over the matching items. Not rounded.
    pub fn total_cost(&self, filter: &ItemFilter) -> f64 {
        store::total_cost(self.iter(filter))
    }

    pub fn summary(&self, filter: &ItemFilter) -> ListSummary {
        ListSummary::from_items(self.iter(filter))
    }

    /// Distinct categories present in the list, in first-seen order.
    pub fn categories_in_use(&self) -> Vec<&'a str> {
        let mut seen: Vec<&'a str> = Vec::new();
        for item in self.store.items() {
            if !seen.contains(&item.category.as_str()) {
                seen.push(item.category.as_str());
            }
        }
        seen
    }
}
