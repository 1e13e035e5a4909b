//! Predicate set used to narrow the item list.

use crate::config;
use crate::models::Item;

// ---------------------------------------------------------------------------
// ItemStatus
// ---------------------------------------------------------------------------

/// Purchase status used to narrow a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStatus {
    Bought,
    Pending,
}

impl ItemStatus {
    pub fn matches(self, item: &Item) -> bool {
        match self {
            ItemStatus::Bought => item.bought,
            ItemStatus::Pending => !item.bought,
        }
    }
}

// ---------------------------------------------------------------------------
// ItemFilter
// ---------------------------------------------------------------------------

/// Filters applied by [`ListStore::query`](crate::store::ListStore::query).
///
/// All fields are optional. When `None`, the corresponding predicate is
/// skipped; an item must satisfy every predicate that is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Exact category name. `"all"` behaves like `None`.
    pub category: Option<String>,
    /// Case-insensitive substring matched against item name or comment.
    pub search_term: Option<String>,
    pub status: Option<ItemStatus>,
}

impl ItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn status(mut self, status: ItemStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Return a matcher with the search term normalized once up front.
    pub fn matcher(&self) -> impl Fn(&Item) -> bool + '_ {
        let category = self
            .category
            .as_deref()
            .filter(|c| *c != config::ALL_CATEGORIES);
        let term = self
            .search_term
            .as_deref()
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());
        let status = self.status;

        move |item: &Item| {
            if let Some(c) = category {
                if item.category != c {
                    return false;
                }
            }
            if let Some(t) = &term {
                let hit = item.item_name.to_lowercase().contains(t.as_str())
                    || item.comment.to_lowercase().contains(t.as_str());
                if !hit {
                    return false;
                }
            }
            if let Some(s) = status {
                if !s.matches(item) {
                    return false;
                }
            }
            true
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        (self.matcher())(item)
    }
}
