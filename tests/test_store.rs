//! ListStore mutation, derivation and snapshot tests.

mod common;

use common::{apple, assert_close, date, milk, sample_store};
use grocery_list::{GroceryError, Item, ItemDraft, ListStore, PriceType, Snapshot};

// ---------------------------------------------------------------------------
// add_item / derivation
// ---------------------------------------------------------------------------

#[test]
fn add_per_unit_item_derives_total() {
    let mut store = ListStore::default();
    let item = store.add_item(&apple()).unwrap();
    assert_eq!(item.id, 1);
    assert_close(item.price_per_unit, 50.0);
    assert_close(item.total_price, 100.0);
    assert!(!item.bought);
}

#[test]
fn add_net_item_derives_per_unit() {
    let mut store = ListStore::default();
    let item = store.add_item(&milk()).unwrap();
    assert_close(item.price_per_unit, 45.0);
    assert_close(item.total_price, 90.0);
}

#[test]
fn derived_prices_are_consistent_for_awkward_values() {
    let mut store = ListStore::default();
    let drafts = [
        ItemDraft::new("Pantry", "Rice", 3.0, "kg", PriceType::Net, 100.0),
        ItemDraft::new("Pantry", "Dal", 0.35, "kg", PriceType::PerUnit, 129.99),
        ItemDraft::new("Snacks", "Nuts", 7.0, "g", PriceType::Net, 0.0),
        ItemDraft::new("Beverages", "Tea", 0.1, "kg", PriceType::Net, 33.3),
    ];
    for draft in &drafts {
        let item = store.add_item(draft).unwrap();
        assert!(item.prices_consistent(), "inconsistent: {:?}", item);
    }
}

#[test]
fn add_trims_text_fields() {
    let mut store = ListStore::default();
    let draft = ItemDraft::new("  Fruits ", "  Kiwi  ", 1.0, " pcs ", PriceType::PerUnit, 10.0)
        .comment("  green  ");
    let item = store.add_item(&draft).unwrap();
    assert_eq!(item.category, "Fruits");
    assert_eq!(item.item_name, "Kiwi");
    assert_eq!(item.unit, "pcs");
    assert_eq!(item.comment, "green");
}

#[test]
fn add_item_on_uses_given_date() {
    let mut store = ListStore::default();
    let item = store.add_item_on(&apple(), date(2023, 12, 31)).unwrap();
    assert_eq!(item.date_added, date(2023, 12, 31));
}

#[test]
fn add_accepts_custom_category_and_zero_price() {
    let mut store = ListStore::default();
    let draft = ItemDraft::new("Garden", "Seeds", 1.0, "pack", PriceType::PerUnit, 0.0);
    let item = store.add_item(&draft).unwrap();
    assert_eq!(item.category, "Garden");
    assert_close(item.total_price, 0.0);
}

#[test]
fn add_allows_duplicates() {
    let mut store = ListStore::default();
    store.add_item(&apple()).unwrap();
    store.add_item(&apple()).unwrap();
    assert_eq!(store.len(), 2);
}

// ---------------------------------------------------------------------------
// validation
// ---------------------------------------------------------------------------

fn expect_validation(draft: ItemDraft, expected_field: &str) {
    let mut store = sample_store();
    let before = store.items().to_vec();
    let next_id = store.next_id();

    match store.add_item(&draft) {
        Err(GroceryError::Validation { field, .. }) => assert_eq!(field, expected_field),
        other => panic!("expected validation error on {}, got {:?}", expected_field, other),
    }
    assert_eq!(store.items(), before.as_slice());
    assert_eq!(store.next_id(), next_id);
}

#[test]
fn rejects_empty_category() {
    expect_validation(
        ItemDraft::new("", "Apple", 1.0, "kg", PriceType::PerUnit, 1.0),
        "category",
    );
}

#[test]
fn rejects_blank_item_name() {
    expect_validation(
        ItemDraft::new("Fruits", "   ", 1.0, "kg", PriceType::PerUnit, 1.0),
        "itemName",
    );
}

#[test]
fn rejects_non_positive_quantity() {
    expect_validation(
        ItemDraft::new("Fruits", "Apple", 0.0, "kg", PriceType::Net, 1.0),
        "quantity",
    );
    expect_validation(
        ItemDraft::new("Fruits", "Apple", -2.0, "kg", PriceType::PerUnit, 1.0),
        "quantity",
    );
    expect_validation(
        ItemDraft::new("Fruits", "Apple", f64::NAN, "kg", PriceType::PerUnit, 1.0),
        "quantity",
    );
}

#[test]
fn rejects_missing_or_unknown_unit() {
    expect_validation(
        ItemDraft::new("Fruits", "Apple", 1.0, "", PriceType::PerUnit, 1.0),
        "unit",
    );
    expect_validation(
        ItemDraft::new("Fruits", "Apple", 1.0, "crate", PriceType::PerUnit, 1.0),
        "unit",
    );
}

#[test]
fn rejects_negative_or_infinite_price() {
    expect_validation(
        ItemDraft::new("Fruits", "Apple", 1.0, "kg", PriceType::PerUnit, -0.5),
        "priceInput",
    );
    expect_validation(
        ItemDraft::new("Fruits", "Apple", 1.0, "kg", PriceType::Net, f64::INFINITY),
        "priceInput",
    );
}

#[test]
fn validation_reports_first_failing_field() {
    expect_validation(
        ItemDraft::new("", "", 0.0, "", PriceType::PerUnit, -1.0),
        "category",
    );
}

// ---------------------------------------------------------------------------
// ids
// ---------------------------------------------------------------------------

#[test]
fn ids_are_unique_and_increasing() {
    let mut store = ListStore::default();
    let mut last = 0;
    for _ in 0..5 {
        let id = store.add_item(&apple()).unwrap().id;
        assert!(id > last);
        last = id;
    }
    store.remove_item(5).unwrap();
    let id = store.add_item(&apple()).unwrap().id;
    assert_eq!(id, 6);
}

#[test]
fn clear_all_resets_counter() {
    let mut store = sample_store();
    store.clear_all();
    assert!(store.is_empty());
    assert_eq!(store.next_id(), 1);
    assert_eq!(store.add_item(&apple()).unwrap().id, 1);
}

// ---------------------------------------------------------------------------
// update / remove / toggle
// ---------------------------------------------------------------------------

#[test]
fn update_rederives_and_preserves_identity() {
    let mut store = sample_store();
    let original = store.get(3).unwrap().clone();

    let draft = ItemDraft::new("Dairy", "Milk", 4.0, "l", PriceType::PerUnit, 30.0);
    let updated = store.update_item(3, &draft).unwrap();

    assert_eq!(updated.id, 3);
    assert_eq!(updated.date_added, original.date_added);
    assert_eq!(updated.bought, original.bought);
    assert_close(updated.price_per_unit, 30.0);
    assert_close(updated.total_price, 120.0);
    assert_eq!(store.items()[2], updated);
}

#[test]
fn update_unknown_id_is_not_found() {
    let mut store = sample_store();
    let err = store.update_item(99, &apple()).unwrap_err();
    assert!(matches!(err, GroceryError::NotFound { id: 99 }));
}

#[test]
fn update_with_invalid_draft_leaves_item_unchanged() {
    let mut store = sample_store();
    let before = store.get(1).unwrap().clone();
    let draft = ItemDraft::new("Fruits", "Apple", 0.0, "kg", PriceType::PerUnit, 50.0);
    assert!(store.update_item(1, &draft).is_err());
    assert_eq!(store.get(1).unwrap(), &before);
}

#[test]
fn add_then_remove_restores_collection() {
    let mut store = sample_store();
    let before: Vec<Item> = store.items().to_vec();

    let added = store.add_item(&apple()).unwrap();
    let removed = store.remove_item(added.id).unwrap();

    assert_eq!(removed, added);
    assert_eq!(store.items(), before.as_slice());
}

#[test]
fn remove_unknown_id_is_not_found() {
    let mut store = sample_store();
    assert!(matches!(
        store.remove_item(42),
        Err(GroceryError::NotFound { id: 42 })
    ));
    assert_eq!(store.len(), 4);
}

#[test]
fn toggle_bought_is_its_own_inverse() {
    let mut store = sample_store();
    let original = store.get(2).unwrap().clone();

    let once = store.toggle_bought(2).unwrap();
    assert_eq!(once.bought, !original.bought);
    assert_close(once.total_price, original.total_price);

    let twice = store.toggle_bought(2).unwrap();
    assert_eq!(twice, original);
}

#[test]
fn toggle_unknown_id_is_not_found() {
    let mut store = ListStore::default();
    assert!(matches!(
        store.toggle_bought(1),
        Err(GroceryError::NotFound { id: 1 })
    ));
}

#[test]
fn mark_all_bought_counts_changes_and_is_idempotent() {
    let mut store = sample_store();
    assert_eq!(store.pending_count(), 3);
    assert_eq!(store.mark_all_bought(), 3);
    assert_eq!(store.pending_count(), 0);
    assert_eq!(store.mark_all_bought(), 0);
}

// ---------------------------------------------------------------------------
// duplicates / totals
// ---------------------------------------------------------------------------

#[test]
fn find_duplicate_ignores_name_case() {
    let store = sample_store();
    let dup = store.find_duplicate("Fruits", "aPPLE").unwrap();
    assert_eq!(dup.id, 1);
    assert!(store.find_duplicate("Dairy", "Apple").is_none());
    assert!(store.find_duplicate("Fruits", "Banana").is_none());
}

#[test]
fn find_duplicate_trims_category() {
    let mut store = ListStore::default();
    let draft = ItemDraft::new(" Fruits ", "Apple ", 1.0, "kg", PriceType::PerUnit, 50.0);
    let added = store.add_item(&draft).unwrap();

    let dup = store.find_duplicate(&draft.category, &draft.item_name).unwrap();
    assert_eq!(dup.id, added.id);
}

#[test]
fn total_cost_sums_item_totals() {
    let store = sample_store();
    let expected: f64 = store.items().iter().map(|i| i.total_price).sum();
    assert_close(store.total_cost(), expected);
    assert_close(store.total_cost(), 100.0 + 240.0 + 90.0 + 45.5);
}

#[test]
fn total_cost_of_empty_store_is_zero() {
    assert_eq!(ListStore::default().total_cost(), 0.0);
    assert_eq!(grocery_list::store::total_cost(std::iter::empty()), 0.0);
}

#[test]
fn summary_splits_bought_and_pending() {
    let summary = sample_store().summary();
    assert_eq!(summary.item_count, 4);
    assert_eq!(summary.bought_count, 1);
    assert_eq!(summary.pending_count, 3);
    assert_close(summary.bought_cost, 90.0);
    assert_close(summary.pending_cost, 385.5);
    assert_close(summary.total_cost, 475.5);
}

// ---------------------------------------------------------------------------
// snapshot / restore
// ---------------------------------------------------------------------------

fn snapshot_from(value: serde_json::Value) -> Snapshot {
    serde_json::from_value(value).unwrap()
}

fn stored_item(id: u64, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "category": "Fruits",
        "itemName": name,
        "quantity": 2.0,
        "unit": "kg",
        "priceType": "perUnit",
        "priceInput": 50.0,
        "pricePerUnit": 50.0,
        "totalPrice": 100.0,
        "comment": "",
        "bought": false,
        "dateAdded": "2024-03-01"
    })
}

#[test]
fn snapshot_carries_items_counter_and_version() {
    let store = sample_store();
    let snapshot = store.snapshot();
    assert_eq!(snapshot.items, store.items());
    assert_eq!(snapshot.next_id, 5);
    assert_eq!(snapshot.version, "1.0.0");
}

#[test]
fn restore_repairs_stale_counter() {
    let mut store = ListStore::default();
    store
        .restore(snapshot_from(serde_json::json!({
            "items": [stored_item(5, "Apple")],
            "nextId": 1,
            "lastUpdated": "2024-03-01T10:00:00Z",
            "version": "1.0.0"
        })))
        .unwrap();
    assert!(store.next_id() >= 6);
    assert_eq!(store.add_item(&apple()).unwrap().id, 6);
}

#[test]
fn restore_keeps_larger_stored_counter() {
    let mut store = ListStore::default();
    store
        .restore(snapshot_from(serde_json::json!({
            "items": [stored_item(2, "Apple")],
            "nextId": 10,
            "lastUpdated": "2024-03-01T10:00:00Z",
            "version": "1.0.0"
        })))
        .unwrap();
    assert_eq!(store.next_id(), 10);
}

#[test]
fn restore_rejects_duplicate_ids_without_touching_state() {
    let mut store = sample_store();
    let before = store.items().to_vec();
    let err = store
        .restore(snapshot_from(serde_json::json!({
            "items": [stored_item(3, "Apple"), stored_item(3, "Mango")],
            "nextId": 4,
            "lastUpdated": "2024-03-01T10:00:00Z",
            "version": "1.0.0"
        })))
        .unwrap_err();
    assert!(matches!(err, GroceryError::InvalidSnapshot(_)));
    assert_eq!(store.items(), before.as_slice());
    assert_eq!(store.next_id(), 5);
}

#[test]
fn restore_rejects_zero_id_and_bad_quantity() {
    let mut store = ListStore::default();
    let zero = snapshot_from(serde_json::json!({
        "items": [stored_item(0, "Apple")],
        "nextId": 1,
        "lastUpdated": "2024-03-01T10:00:00Z",
        "version": "1.0.0"
    }));
    assert!(store.restore(zero).is_err());

    let mut bad = stored_item(1, "Apple");
    bad["quantity"] = serde_json::json!(0.0);
    let bad_qty = snapshot_from(serde_json::json!({
        "items": [bad],
        "nextId": 2,
        "lastUpdated": "2024-03-01T10:00:00Z",
        "version": "1.0.0"
    }));
    assert!(store.restore(bad_qty).is_err());
    assert!(store.is_empty());
}

#[test]
fn restore_rederives_prices() {
    let mut store = ListStore::default();
    let mut drifted = stored_item(1, "Apple");
    drifted["totalPrice"] = serde_json::json!(7.0);
    store
        .restore(snapshot_from(serde_json::json!({
            "items": [drifted],
            "nextId": 2,
            "lastUpdated": "2024-03-01T10:00:00Z",
            "version": "1.0.0"
        })))
        .unwrap();
    assert_close(store.get(1).unwrap().total_price, 100.0);
}

#[test]
fn restore_empty_snapshot_starts_at_one() {
    let mut store = sample_store();
    store
        .restore(snapshot_from(serde_json::json!({
            "items": [],
            "nextId": 0,
            "lastUpdated": "2024-03-01T10:00:00Z",
            "version": "1.0.0"
        })))
        .unwrap();
    assert!(store.is_empty());
    assert_eq!(store.next_id(), 1);
}

#[test]
fn snapshot_round_trips_through_restore() {
    let original = sample_store();
    let mut restored = ListStore::default();
    restored.restore(original.snapshot()).unwrap();
    assert_eq!(restored.items(), original.items());
    assert_eq!(restored.next_id(), original.next_id());
}

#[test]
fn restore_rejects_item_id_at_u64_max() {
    let mut store = sample_store();
    let err = store
        .restore(snapshot_from(serde_json::json!({
            "items": [stored_item(u64::MAX, "Apple")],
            "nextId": 1,
            "lastUpdated": "2024-03-01T10:00:00Z",
            "version": "1.0.0"
        })))
        .unwrap_err();
    assert!(matches!(err, GroceryError::InvalidSnapshot(_)));
    assert_eq!(store.len(), 4);
    assert_eq!(store.next_id(), 5);
}

#[test]
fn restore_rejects_exhausted_counter() {
    let mut store = ListStore::default();
    let err = store
        .restore(snapshot_from(serde_json::json!({
            "items": [stored_item(1, "Apple")],
            "nextId": u64::MAX,
            "lastUpdated": "2024-03-01T10:00:00Z",
            "version": "1.0.0"
        })))
        .unwrap_err();
    assert!(matches!(err, GroceryError::InvalidSnapshot(_)));
    assert!(store.is_empty());
    assert_eq!(store.next_id(), 1);
}

#[test]
fn add_stops_when_ids_run_out() {
    let mut store = ListStore::default();
    store
        .restore(snapshot_from(serde_json::json!({
            "items": [],
            "nextId": u64::MAX - 1,
            "lastUpdated": "2024-03-01T10:00:00Z",
            "version": "1.0.0"
        })))
        .unwrap();

    let last = store.add_item(&apple()).unwrap();
    assert_eq!(last.id, u64::MAX - 1);
    assert_eq!(store.next_id(), u64::MAX);

    let err = store.add_item(&apple()).unwrap_err();
    assert!(matches!(err, GroceryError::IdsExhausted));
    assert_eq!(store.len(), 1);
    assert_eq!(store.next_id(), u64::MAX);
}
