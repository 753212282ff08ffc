//! Durability across process restarts, simulated by closing the store and
//! reopening the same file.

use grocery_db::{DbConfig, ItemStore, StoreConfig};
use tempfile::TempDir;

async fn open(dir: &TempDir) -> ItemStore {
    ItemStore::open(
        DbConfig::new(dir.path().join("grocery.db")),
        StoreConfig::default(),
    )
    .await
    .expect("open store")
}

#[tokio::test]
async fn mutations_survive_reopen_in_insertion_order() {
    let dir = TempDir::new().expect("tempdir");

    let (milk_id, eggs_id) = {
        let store = open(&dir).await;
        let milk = store.add("Milk").await.expect("add milk");
        let eggs = store.add("Eggs").await.expect("add eggs");
        store.add("Bread").await.expect("add bread");
        store.toggle_completed(&eggs.id).await.expect("toggle eggs");
        store.close().await;
        (milk.id, eggs.id)
    };

    let store = open(&dir).await;
    let items = store.list_all().await.expect("list");
    let titles: Vec<_> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Milk", "Eggs", "Bread"]);
    assert_eq!(items[0].id, milk_id);
    assert_eq!(items[1].id, eggs_id);
    assert!(items[1].is_completed);
    assert!(!items[0].is_completed);
}

#[tokio::test]
async fn deletes_are_permanent_across_reopen() {
    let dir = TempDir::new().expect("tempdir");

    let milk_id = {
        let store = open(&dir).await;
        let milk = store.add("Milk").await.expect("add milk");
        store.add("Eggs").await.expect("add eggs");
        store.delete(&milk.id).await.expect("delete milk");
        store.close().await;
        milk.id
    };

    let store = open(&dir).await;
    let items = store.list_all().await.expect("list");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].title, "Eggs");
    assert!(store.delete(&milk_id).await.unwrap_err().is_not_found());

    // A new item after reopen still sorts after every survivor.
    let cheese = store.add("Cheese").await.expect("add cheese");
    assert!(cheese.position > items[0].position);
}

#[tokio::test]
async fn essentials_persist() {
    let dir = TempDir::new().expect("tempdir");

    let seeded = {
        let store = open(&dir).await;
        let seeded = store.seed_essentials().await.expect("seed");
        store.close().await;
        seeded
    };

    let store = open(&dir).await;
    assert_eq!(store.list_all().await.expect("list"), seeded);
}

#[tokio::test]
async fn creates_missing_parent_directories() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("nested").join("deeper").join("grocery.db");

    let store = ItemStore::open(DbConfig::new(&path), StoreConfig::default())
        .await
        .expect("open store");
    store.add("Milk").await.expect("add");
    store.close().await;

    assert!(path.exists(), "database file should exist: {}", path.display());
}
