//! In-memory grocery list state.
//!
//! [`ListStore`] owns the ordered item collection and the id counter. It
//! validates caller drafts, derives per-unit and total prices, and answers
//! filter/aggregate queries. It performs no I/O: persisting a [`Snapshot`]
//! is the caller's job.
//!
//! Every operation is all-or-nothing: when a call returns an error the
//! collection and the id counter are exactly as they were before the call.

use std::collections::HashSet;

use chrono::{Local, NaiveDate, Utc};
use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config;
use crate::error::{GroceryError, Result};
use crate::models::{Item, ItemDraft, ListSummary, PriceType, Snapshot};
use crate::queries::{ItemFilter, ItemQuery};

/// Sum of `total_price` over `items`. Returns `0.0` for no items.
pub fn total_cost<'a>(items: impl IntoIterator<Item = &'a Item>) -> f64 {
    items.into_iter().map(|item| item.total_price).sum()
}

/// Draft fields after validation and trimming.
struct ValidDraft {
    category: String,
    item_name: String,
    quantity: f64,
    unit: String,
    price_type: PriceType,
    price_input: f64,
    comment: String,
}

impl ValidDraft {
    fn into_item(self, id: u64, date_added: NaiveDate, bought: bool) -> Item {
        let (price_per_unit, total_price) = self.price_type.derive(self.price_input, self.quantity);
        Item {
            id,
            category: self.category,
            item_name: self.item_name,
            quantity: self.quantity,
            unit: self.unit,
            price_type: self.price_type,
            price_input: self.price_input,
            price_per_unit,
            total_price,
            comment: self.comment,
            bought,
            date_added,
        }
    }
}

// ---------------------------------------------------------------------------
// ListStore
// ---------------------------------------------------------------------------

/// Ordered grocery item collection with id assignment and price derivation.
#[derive(Debug, Clone)]
pub struct ListStore {
    items: Vec<Item>,
    next_id: u64,
    catalog: Catalog,
}

impl Default for ListStore {
    fn default() -> Self {
        Self::new(Catalog::default())
    }
}

impl ListStore {
    /// Create an empty store validating units against `catalog`.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            items: Vec::new(),
            next_id: config::INITIAL_ID,
            catalog,
        }
    }

    // -- Accessors ---------------------------------------------------------

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next added item will receive.
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Borrowing query interface over this store.
    pub fn items_query(&self) -> ItemQuery<'_> {
        ItemQuery::new(self)
    }

    // -- Validation --------------------------------------------------------

    fn validate(&self, draft: &ItemDraft) -> Result<ValidDraft> {
        let category = draft.category.trim();
        if category.is_empty() {
            return Err(GroceryError::validation("category", "Please select a category"));
        }

        let item_name = draft.item_name.trim();
        if item_name.is_empty() {
            return Err(GroceryError::validation(
                "itemName",
                "Please select or enter an item name",
            ));
        }

        if !draft.quantity.is_finite() || draft.quantity <= 0.0 {
            return Err(GroceryError::validation(
                "quantity",
                format!("Quantity must be a positive number, got {}", draft.quantity),
            ));
        }

        let unit = draft.unit.trim();
        if unit.is_empty() {
            return Err(GroceryError::validation("unit", "Please select a unit"));
        }
        if !self.catalog.is_known_unit(unit) {
            return Err(GroceryError::validation(
                "unit",
                format!("Unknown unit '{}'", unit),
            ));
        }

        if !draft.price_input.is_finite() || draft.price_input < 0.0 {
            return Err(GroceryError::validation(
                "priceInput",
                format!("Price must be zero or more, got {}", draft.price_input),
            ));
        }

        Ok(ValidDraft {
            category: category.to_string(),
            item_name: item_name.to_string(),
            quantity: draft.quantity,
            unit: unit.to_string(),
            price_type: draft.price_type,
            price_input: draft.price_input,
            comment: draft.comment.trim().to_string(),
        })
    }

    fn position(&self, id: u64) -> Result<usize> {
        self.items
            .iter()
            .position(|item| item.id == id)
            .ok_or(GroceryError::NotFound { id })
    }

    // -- Mutations ---------------------------------------------------------

    /// Validate `draft`, derive its prices and append it dated today.
    ///
    /// Duplicate `(category, item name)` pairs are accepted; use
    /// [`find_duplicate`](Self::find_duplicate) first if the caller wants to
    /// ask for confirmation.
    pub fn add_item(&mut self, draft: &ItemDraft) -> Result<Item> {
        self.add_item_on(draft, Local::now().date_naive())
    }

    /// Same as [`add_item`](Self::add_item) with an explicit creation date.
    pub fn add_item_on(&mut self, draft: &ItemDraft, date_added: NaiveDate) -> Result<Item> {
        let valid = self.validate(draft)?;
        let id = self.next_id;
        let following = id.checked_add(1).ok_or(GroceryError::IdsExhausted)?;
        let item = valid.into_item(id, date_added, false);
        self.next_id = following;
        self.items.push(item.clone());
        debug!(id, name = %item.item_name, total = item.total_price, "Added item");
        Ok(item)
    }

    /// Replace the item `id` with a re-validated draft.
    ///
    /// The id, position, `date_added` and `bought` flag are kept.
    pub fn update_item(&mut self, id: u64, draft: &ItemDraft) -> Result<Item> {
        let pos = self.position(id)?;
        let valid = self.validate(draft)?;
        let existing = &self.items[pos];
        let item = valid.into_item(id, existing.date_added, existing.bought);
        self.items[pos] = item.clone();
        debug!(id, name = %item.item_name, "Updated item");
        Ok(item)
    }

    /// Remove the item `id`, returning it.
    pub fn remove_item(&mut self, id: u64) -> Result<Item> {
        let pos = self.position(id)?;
        let item = self.items.remove(pos);
        debug!(id, "Removed item");
        Ok(item)
    }

    /// Flip the bought flag of item `id`. Prices are left untouched.
    pub fn toggle_bought(&mut self, id: u64) -> Result<Item> {
        let pos = self.position(id)?;
        let item = &mut self.items[pos];
        item.bought = !item.bought;
        debug!(id, bought = item.bought, "Toggled bought");
        Ok(item.clone())
    }

    /// Remove every item and reset the id counter.
    pub fn clear_all(&mut self) {
        let removed = self.items.len();
        self.items.clear();
        self.next_id = config::INITIAL_ID;
        info!(removed, "Cleared grocery list");
    }

    /// Mark every pending item as bought. Returns how many items changed.
    pub fn mark_all_bought(&mut self) -> usize {
        let mut changed = 0;
        for item in self.items.iter_mut().filter(|item| !item.bought) {
            item.bought = true;
            changed += 1;
        }
        debug!(changed, "Marked all items bought");
        changed
    }

    // -- Queries -----------------------------------------------------------

    /// First item in `category` whose name equals `item_name` ignoring case.
    pub fn find_duplicate(&self, category: &str, item_name: &str) -> Option<&Item> {
        let category = category.trim();
        let name = item_name.trim().to_lowercase();
        self.items
            .iter()
            .find(|item| item.category == category && item.item_name.to_lowercase() == name)
    }

    /// Number of items not yet bought.
    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|item| !item.bought).count()
    }

    /// Items matching every predicate of `filter`, in insertion order.
    pub fn query(&self, filter: &ItemFilter) -> Vec<Item> {
        self.items_query().list(filter)
    }

    /// Sum of `total_price` over the whole collection.
    pub fn total_cost(&self) -> f64 {
        total_cost(&self.items)
    }

    pub fn summary(&self) -> ListSummary {
        ListSummary::from_items(&self.items)
    }

    // -- Snapshots ---------------------------------------------------------

    /// Capture the current state for persistence.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            items: self.items.clone(),
            next_id: self.next_id,
            last_updated: Utc::now(),
            version: config::APP_VERSION.to_string(),
        }
    }

    /// Replace the whole collection with a persisted snapshot.
    ///
    /// Every id must be non-zero and unique, and every item must satisfy the
    /// quantity/price constraints. The id counter becomes at least one more
    /// than the largest restored id, whatever the snapshot claims; a counter
    /// that would leave no id to hand out is rejected.
    pub fn restore(&mut self, snapshot: Snapshot) -> Result<()> {
        let mut seen = HashSet::with_capacity(snapshot.items.len());
        for item in &snapshot.items {
            if item.id == 0 {
                return Err(GroceryError::InvalidSnapshot(format!(
                    "item '{}' has no id",
                    item.item_name
                )));
            }
            if !seen.insert(item.id) {
                return Err(GroceryError::InvalidSnapshot(format!(
                    "duplicate id {}",
                    item.id
                )));
            }
            if !item.quantity.is_finite() || item.quantity <= 0.0 {
                return Err(GroceryError::InvalidSnapshot(format!(
                    "item {} has invalid quantity {}",
                    item.id, item.quantity
                )));
            }
            if !item.price_input.is_finite() || item.price_input < 0.0 {
                return Err(GroceryError::InvalidSnapshot(format!(
                    "item {} has invalid price {}",
                    item.id, item.price_input
                )));
            }
        }

        let max_id = snapshot.items.iter().map(|item| item.id).max().unwrap_or(0);
        let next_id = max_id
            .checked_add(1)
            .map(|after_max| snapshot.next_id.max(after_max).max(config::INITIAL_ID))
            .filter(|next| next.checked_add(1).is_some())
            .ok_or_else(|| {
                GroceryError::InvalidSnapshot(format!(
                    "id counter {} leaves no room for new items",
                    snapshot.next_id.max(max_id)
                ))
            })?;
        if next_id != snapshot.next_id {
            debug!(
                stored = snapshot.next_id,
                repaired = next_id,
                "Repaired id counter from snapshot"
            );
        }

        self.items = snapshot
            .items
            .into_iter()
            .map(|mut item| {
                let (ppu, total) = item.price_type.derive(item.price_input, item.quantity);
                item.price_per_unit = ppu;
                item.total_price = total;
                item
            })
            .collect();
        self.next_id = next_id;
        info!(items = self.items.len(), next_id, "Restored grocery list");
        Ok(())
    }
}
