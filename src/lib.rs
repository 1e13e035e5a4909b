//! Grocery list library for Rust.
//!
//! Keeps an ordered list of grocery items with derived per-unit and total
//! prices, answers filter/search/aggregate queries, persists the list as a
//! JSON snapshot, and exports it as CSV.
//!
//! # Quick start
//!
//! ```no_run
//! use grocery_list::{GroceryList, ItemDraft, ItemFilter, PriceType};
//!
//! let mut list = GroceryList::builder().build().unwrap();
//!
//! let draft = ItemDraft::new("Fruits", "Apple", 2.0, "kg", PriceType::PerUnit, 50.0);
//! if list.find_duplicate(&draft.category, &draft.item_name).is_none() {
//!     list.add_item(&draft).unwrap();
//! }
//!
//! let apples = list.query(&ItemFilter::new().search("app"));
//! println!("{} item(s), total {:.2}", apples.len(), list.total_cost());
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod queries;
pub mod storage;
pub mod store;

pub use catalog::Catalog;
pub use error::{GroceryError, Result};
pub use models::{Item, ItemDraft, ListSummary, PriceType, Snapshot};
pub use queries::{ItemFilter, ItemQuery, ItemStatus};
pub use storage::{FileStorage, KeyValueStore, MemoryStorage, PersistenceAdapter};
pub use store::ListStore;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use tracing::{info, warn};

// ---------------------------------------------------------------------------
// GroceryListBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`GroceryList`].
///
/// Use [`GroceryList::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](GroceryListBuilder::build).
#[derive(Default)]
pub struct GroceryListBuilder {
    storage_dir: Option<PathBuf>,
    storage: Option<Box<dyn KeyValueStore>>,
    storage_key: Option<String>,
    catalog: Option<Catalog>,
}

impl GroceryListBuilder {
    /// Store the list as JSON files in `path`.
    ///
    /// If neither this nor [`in_memory`](Self::in_memory) nor
    /// [`storage`](Self::storage) is set, the platform data directory is used
    /// (e.g. `~/.local/share/grocery-list` on Linux).
    pub fn storage_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.storage_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Keep the list in memory only.
    pub fn in_memory(self) -> Self {
        self.storage(Box::new(MemoryStorage::new()))
    }

    /// Use a caller-provided key-value store.
    pub fn storage(mut self, storage: Box<dyn KeyValueStore>) -> Self {
        self.storage = Some(storage);
        self
    }

    /// Key of the snapshot slot. Defaults to `groceryListItems`.
    pub fn storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// Category/unit vocabulary. Defaults to [`Catalog::default()`].
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Build the list, restoring any previously saved snapshot.
    ///
    /// A malformed or inconsistent snapshot is logged and ignored; the list
    /// then starts empty.
    pub fn build(self) -> Result<GroceryList> {
        let storage = match self.storage {
            Some(storage) => storage,
            None => {
                let dir = self.storage_dir.unwrap_or_else(config::default_storage_dir);
                Box::new(FileStorage::new(dir)?)
            }
        };
        let key = self
            .storage_key
            .unwrap_or_else(|| config::STORAGE_KEY.to_string());
        let adapter = PersistenceAdapter::with_key(storage, key);

        let mut store = ListStore::new(self.catalog.unwrap_or_default());
        if let Some(snapshot) = adapter.load() {
            if let Err(e) = store.restore(snapshot) {
                warn!(error = %e, "Discarding stored grocery list");
            }
        }

        Ok(GroceryList {
            store,
            adapter,
            storage_error: None,
        })
    }
}

// ---------------------------------------------------------------------------
// GroceryList
// ---------------------------------------------------------------------------

/// A persisted grocery list.
///
/// Wraps a [`ListStore`] and a [`PersistenceAdapter`]. Every mutating call
/// saves a fresh snapshot afterwards. A failed save does not fail the call:
/// the in-memory list stays authoritative and the error is kept for
/// [`take_storage_error`](Self::take_storage_error).
///
/// Created via [`GroceryList::builder()`].
pub struct GroceryList {
    store: ListStore,
    adapter: PersistenceAdapter,
    storage_error: Option<GroceryError>,
}

impl GroceryList {
    /// Create a new builder for configuring the list.
    pub fn builder() -> GroceryListBuilder {
        GroceryListBuilder::default()
    }

    // -- Persistence -------------------------------------------------------

    /// Save the current state, returning any storage error.
    pub fn save(&mut self) -> Result<()> {
        self.adapter.save(&self.store.snapshot())
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            warn!(error = %e, "Changes may not survive a reload");
            self.storage_error = Some(e);
        }
    }

    /// Return the error from the most recent failed automatic save, once.
    pub fn take_storage_error(&mut self) -> Option<GroceryError> {
        self.storage_error.take()
    }

    // -- Mutations ---------------------------------------------------------

    /// Add an item. See [`ListStore::add_item`].
    pub fn add_item(&mut self, draft: &ItemDraft) -> Result<Item> {
        let item = self.store.add_item(draft)?;
        self.persist();
        Ok(item)
    }

    /// Replace an item's fields. See [`ListStore::update_item`].
    pub fn update_item(&mut self, id: u64, draft: &ItemDraft) -> Result<Item> {
        let item = self.store.update_item(id, draft)?;
        self.persist();
        Ok(item)
    }

    pub fn remove_item(&mut self, id: u64) -> Result<Item> {
        let item = self.store.remove_item(id)?;
        self.persist();
        Ok(item)
    }

    pub fn toggle_bought(&mut self, id: u64) -> Result<Item> {
        let item = self.store.toggle_bought(id)?;
        self.persist();
        Ok(item)
    }

    /// Remove every item and reset ids to start at 1 again.
    pub fn clear_all(&mut self) {
        self.store.clear_all();
        self.persist();
    }

    /// Mark every pending item bought; returns how many changed.
    pub fn mark_all_bought(&mut self) -> usize {
        let changed = self.store.mark_all_bought();
        if changed > 0 {
            self.persist();
        }
        changed
    }

    // -- Queries -----------------------------------------------------------

    pub fn find_duplicate(&self, category: &str, item_name: &str) -> Option<&Item> {
        self.store.find_duplicate(category, item_name)
    }

    pub fn pending_count(&self) -> usize {
        self.store.pending_count()
    }

    pub fn query(&self, filter: &ItemFilter) -> Vec<Item> {
        self.store.query(filter)
    }

    /// Access the item query interface.
    pub fn items(&self) -> ItemQuery<'_> {
        self.store.items_query()
    }

    pub fn total_cost(&self) -> f64 {
        self.store.total_cost()
    }

    pub fn summary(&self) -> ListSummary {
        self.store.summary()
    }

    /// Return a reference to the underlying [`ListStore`].
    pub fn store(&self) -> &ListStore {
        &self.store
    }

    // -- Export ------------------------------------------------------------

    /// Render the whole list as CSV.
    ///
    /// Fails with [`GroceryError::InvalidArgument`] when the list is empty.
    pub fn export_csv(&self) -> Result<String> {
        if self.store.is_empty() {
            return Err(GroceryError::InvalidArgument("No items to export".to_string()));
        }
        Ok(export::to_csv(self.store.items(), self.store.catalog()))
    }

    /// Write the CSV export into `dir` under today's dated file name.
    pub fn write_csv<P: AsRef<Path>>(&self, dir: P) -> Result<PathBuf> {
        let csv = self.export_csv()?;
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        let path = dir.join(export::export_file_name(Local::now().date_naive()));
        fs::write(&path, csv)?;
        info!(path = %path.display(), items = self.store.len(), "Exported grocery list");
        Ok(path)
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for GroceryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GroceryList(items={}, pending={}, total={:.2}, key={})",
            self.store.len(),
            self.store.pending_count(),
            self.store.total_cost(),
            self.adapter.key()
        )
    }
}
