//! Shared test fixtures for the grocery list integration tests.
//!
//! Provides `sample_store()` with a small fixed list, a few draft
//! constructors and `init_tracing()` for log output under `RUST_LOG`.

#![allow(dead_code)]

use chrono::NaiveDate;
use grocery_list::{ItemDraft, ListStore, PriceType};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn apple() -> ItemDraft {
    ItemDraft::new("Fruits", "Apple", 2.0, "kg", PriceType::PerUnit, 50.0)
}

pub fn mango() -> ItemDraft {
    ItemDraft::new("Fruits", "Mango", 6.0, "pcs", PriceType::Net, 240.0).comment("ripe ones")
}

pub fn milk() -> ItemDraft {
    ItemDraft::new("Dairy", "Milk", 2.0, "l", PriceType::Net, 90.0)
}

pub fn bread() -> ItemDraft {
    ItemDraft::new("Bakery", "Bread", 1.0, "pack", PriceType::PerUnit, 45.5)
        .comment("whole wheat, for apple toast")
}

/// A store holding Apple (1), Mango (2), Milk (3, bought) and Bread (4),
/// all dated 2024-03-01.
pub fn sample_store() -> ListStore {
    let mut store = ListStore::default();
    let day = date(2024, 3, 1);
    for draft in [apple(), mango(), milk(), bread()] {
        store.add_item_on(&draft, day).unwrap();
    }
    store.toggle_bought(3).unwrap();
    store
}

/// Install a test subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "expected {} ≈ {}", a, b);
}
