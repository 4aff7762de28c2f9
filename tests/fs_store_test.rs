use std::fs;
use tempfile::TempDir;
use wares::model::{Item, ItemDraft};
use wares::store::fs::FileStore;
use wares::store::ItemStore;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path().join("items.json")).unwrap();
    (dir, store)
}

#[test]
fn test_open_establishes_file_and_parent_dirs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deep").join("items.json");
    let store = FileStore::open(&path).unwrap();

    assert!(path.exists());
    let on_disk: Vec<Item> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(on_disk.is_empty());
    assert!(store.find_all().unwrap().is_empty());
}

#[test]
fn test_round_trip_reload_preserves_items_and_order() {
    let (dir, store) = setup();
    let path = dir.path().join("items.json");

    for n in 1..=5 {
        store
            .create(ItemDraft::new(format!("Item {n}"), format!("desc {n}"), n as f64))
            .unwrap();
    }
    let before = store.find_all().unwrap();
    drop(store);

    let reopened = FileStore::open(&path).unwrap();
    let after = reopened.find_all().unwrap();
    assert_eq!(before, after);

    // A fresh id must be strictly greater than any id seen before.
    let max_id = before.iter().map(|i| i.id).max().unwrap();
    let fresh = reopened.create(ItemDraft::new("Fresh", "", 0.0)).unwrap();
    assert!(fresh.id > max_id);
}

#[test]
fn test_counter_reseeds_from_max_id_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("items.json");
    let seeded = r#"[
        {"id": 3, "name": "C", "description": "", "price": 3.0,
         "createdAt": "2024-01-03T00:00:00Z", "updatedAt": "2024-01-03T00:00:00Z"},
        {"id": 17, "name": "Q", "description": "", "price": 17.0,
         "createdAt": "2024-01-17T00:00:00Z", "updatedAt": "2024-01-17T00:00:00Z"}
    ]"#;
    fs::write(&path, seeded).unwrap();

    let store = FileStore::open(&path).unwrap();
    let created = store.create(ItemDraft::new("R", "", 0.0)).unwrap();
    assert_eq!(created.id, 18);
}

#[test]
fn test_mutations_flush_before_returning() {
    let (_dir, store) = setup();
    let path = store.path().to_path_buf();

    let created = store.create(ItemDraft::new("Mug", "ceramic", 4.0)).unwrap();
    let on_disk: Vec<Item> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk.len(), 1);
    assert_eq!(on_disk[0].name, "Mug");

    store
        .update(created.id, ItemDraft::new("Mug v2", "ceramic", 5.0))
        .unwrap()
        .unwrap();
    let on_disk: Vec<Item> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk[0].name, "Mug v2");

    assert!(store.delete_by_id(created.id).unwrap());
    let on_disk: Vec<Item> = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert!(on_disk.is_empty());
}

#[test]
fn test_delete_of_missing_id_leaves_file_untouched() {
    let (_dir, store) = setup();
    let path = store.path().to_path_buf();

    store.create(ItemDraft::new("Keep", "", 1.0)).unwrap();
    let before = fs::read(&path).unwrap();

    assert!(!store.delete_by_id(999).unwrap());
    let after = fs::read(&path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_no_tmp_artifacts_left_behind() {
    let (dir, store) = setup();

    let a = store.create(ItemDraft::new("A", "", 1.0)).unwrap();
    store.update(a.id, ItemDraft::new("A2", "", 2.0)).unwrap();
    store.delete_by_id(a.id).unwrap();

    for entry in fs::read_dir(dir.path()).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {name}");
    }
}

#[test]
fn test_find_all_returns_a_detached_snapshot() {
    let (_dir, store) = setup();
    store.create(ItemDraft::new("A", "", 1.0)).unwrap();

    let mut snapshot = store.find_all().unwrap();
    snapshot[0].name = "tampered".to_string();
    snapshot.clear();

    let fresh = store.find_all().unwrap();
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].name, "A");
}
