//! Integration tests for invcore
//!
//! These tests run against file-backed databases in temporary folders.

use std::sync::Arc;
use std::thread;
use std::time::Duration;
use invcore::{InventoryError, InventoryService, InventoryStore, Item, ItemForm, ItemInput, StoreConfig};
use tempfile::TempDir;

/// Open a file-backed store in a fresh temp folder
fn setup_service() -> (InventoryService, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = InventoryStore::open(&StoreConfig::in_folder(temp_dir.path())).unwrap();
    (InventoryService::new(Arc::new(store)), temp_dir)
}

#[test]
fn test_apple_scenario() {
    let (service, _temp_dir) = setup_service();
    let items = service.subscribe_items().unwrap();
    assert!(items.try_recv().unwrap().is_empty());

    let apple = service.add_item(ItemInput::new("Apple", 10, 1.5)).unwrap();
    assert_eq!(apple.id, 1);
    assert_eq!(items.try_recv().unwrap()[0].quantity, 10);

    let err = service.add_item(ItemInput::new("Apple", 5, 2.0)).unwrap_err();
    assert!(matches!(err, InventoryError::DuplicateName(_)));
    let all = service.store().get_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].quantity, 10);
    assert!(items.try_recv().is_none());

    service.update_item(&Item { quantity: 7, price: 1.8, ..apple.clone() }).unwrap();
    let found = service.store().find_by_name("Apple").unwrap().unwrap();
    assert_eq!(found.quantity, 7);
    assert_eq!(found.price, 1.8);
    assert_eq!(items.try_recv().unwrap()[0].quantity, 7);

    service.remove_item(&found).unwrap();
    assert!(items.try_recv().unwrap().is_empty());
}

#[test]
fn test_data_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::in_folder(temp_dir.path());

    {
        let store = InventoryStore::open(&config).unwrap();
        store.insert(ItemInput::new("Banana", 6, 0.25)).unwrap();
        store.insert(ItemInput::new("Orange", 9, 0.7)).unwrap();
        store.close().unwrap();
    }

    let store = InventoryStore::open(&config).unwrap();
    let names: Vec<String> = store.get_all().unwrap().into_iter().map(|i| i.name).collect();
    assert_eq!(names, vec!["Banana", "Orange"]);

    let next = store.insert(ItemInput::new("Grapes", 1, 3.0)).unwrap();
    assert_eq!(next.id, 3);
}

#[test]
fn test_version_mismatch_wipes_data() {
    let temp_dir = TempDir::new().unwrap();
    let config = StoreConfig::in_folder(temp_dir.path());

    {
        let store = InventoryStore::open(&config).unwrap();
        store.insert(ItemInput::new("Banana", 6, 0.25)).unwrap();
    }

    {
        let conn = rusqlite::Connection::open(config.database_path()).unwrap();
        conn.pragma_update(None, "user_version", 2).unwrap();
    }

    let store = InventoryStore::open(&config).unwrap();
    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_subscriber_sees_mutations_from_other_threads_in_order() {
    let (service, _temp_dir) = setup_service();
    let items = service.subscribe_items().unwrap();
    items.try_recv().unwrap();

    let writer = {
        let service = service.clone();
        thread::spawn(move || {
            for n in 1..=50 {
                service.add_item(ItemInput::new(format!("Item {n}"), n, 1.0)).unwrap();
            }
        })
    };

    // snapshots may be skipped but never go backwards
    let mut sizes = Vec::new();
    while sizes.last() != Some(&50) {
        let snapshot = items.recv_timeout(Duration::from_secs(5)).unwrap();
        for (index, item) in snapshot.iter().enumerate() {
            assert_eq!(item.id, index as i64 + 1);
        }
        sizes.push(snapshot.len());
    }
    writer.join().unwrap();

    assert!(sizes.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_iterating_subscription_ends_on_close() {
    let (service, _temp_dir) = setup_service();
    let items = service.subscribe_items().unwrap();

    let reader = thread::spawn(move || items.iter().last());

    service.add_item(ItemInput::new("Melon", 1, 3.0)).unwrap();
    service.add_item(ItemInput::new("Fig", 8, 0.4)).unwrap();
    service.store().close().unwrap();

    let last = reader.join().unwrap().unwrap();
    let names: Vec<&str> = last.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Melon", "Fig"]);
}

#[test]
fn test_unsubscribed_view_stops_receiving() {
    let (service, _temp_dir) = setup_service();
    let first = service.subscribe_items().unwrap();
    let second = service.subscribe_items().unwrap();

    first.unsubscribe();
    service.add_item(ItemInput::new("Lemon", 2, 0.8)).unwrap();

    assert_eq!(service.store().subscriber_count(), 1);
    assert_eq!(second.latest().unwrap().len(), 1);
}

#[test]
fn test_concurrent_adds_may_duplicate() {
    // check-then-insert is not atomic; only the count bounds are asserted
    let (service, _temp_dir) = setup_service();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = service.clone();
            thread::spawn(move || service.add_item(ItemInput::new("Kiwi", 1, 0.5)))
        })
        .collect();
    for handle in handles {
        let _ = handle.join().unwrap();
    }

    let count = service.store().count().unwrap();
    assert!((1..=4).contains(&count));
}

#[test]
fn test_form_to_listing_flow() {
    let (service, _temp_dir) = setup_service();
    let mut form = ItemForm::new("Strawberry", "20", "0.15");

    let item = service.submit_form(&form).unwrap();
    form.clear();
    assert_eq!(form, ItemForm::default());
    assert_eq!(invcore::image_for(&item.name), "strawberry");

    service.update_item(&item.with_edits("18", "oops")).unwrap();
    let stored = service.store().get(item.id).unwrap().unwrap();
    assert_eq!(stored.quantity, 18);
    assert_eq!(stored.price, 0.15);

    // the lenient path turns blank numbers into zero, which validation rejects
    let lenient = ItemForm::new("Avocado", "", "1.0").to_input();
    let err = service.add_item(lenient).unwrap_err();
    assert!(err.is_rejection());
}

#[test]
fn test_store_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("inventory.json");
    let folder = temp_dir.path().join("data");
    std::fs::write(
        &config_path,
        serde_json::json!({ "folder": folder, "filename": "stock.db" }).to_string(),
    ).unwrap();

    let config = StoreConfig::from_file(&config_path).unwrap();
    let store = InventoryStore::open(&config).unwrap();
    store.insert(ItemInput::new("Pineapple", 2, 4.0)).unwrap();

    assert!(folder.join("stock.db").exists());
}
