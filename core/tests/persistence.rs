use website_switcher_core::{
    KeyValueStore, MemoryStore, Point, PositionStore, StoredPosition, ViewportClass,
    POSITION_STORAGE_KEY,
};

#[test]
fn save_then_load_returns_saved_position() {
    let backend = MemoryStore::new();
    let store = PositionStore::new(&backend);
    let saved = StoredPosition::from_point(Point::new(240.0, 96.5));
    store
        .save(ViewportClass::Desktop, saved.clone())
        .expect("save succeeds");
    assert_eq!(store.load().get(ViewportClass::Desktop), Some(&saved));
}

#[test]
fn saving_one_class_preserves_the_other() {
    let backend = MemoryStore::with_item(
        POSITION_STORAGE_KEY,
        r#"{"desktop":{"left":"10px","top":"20px"}}"#,
    );
    let store = PositionStore::new(&backend);
    store
        .save(
            ViewportClass::Mobile,
            StoredPosition::from_point(Point::new(5.0, 6.0)),
        )
        .expect("save succeeds");

    let record = store.load();
    let desktop = record.get(ViewportClass::Desktop).expect("desktop kept");
    assert_eq!(desktop.left, "10px");
    assert_eq!(desktop.top, "20px");
    let mobile = record.get(ViewportClass::Mobile).expect("mobile written");
    assert_eq!(mobile.to_point(), Some(Point::new(5.0, 6.0)));
}

#[test]
fn corrupted_value_loads_as_empty() {
    let backend = MemoryStore::with_item(POSITION_STORAGE_KEY, "{not json");
    let store = PositionStore::new(&backend);
    assert!(store.load().is_empty());
}

#[test]
fn corrupted_value_is_replaced_on_save() {
    let backend = MemoryStore::with_item(POSITION_STORAGE_KEY, "[1,2,3]");
    let store = PositionStore::new(&backend);
    store
        .save(
            ViewportClass::Desktop,
            StoredPosition::from_point(Point::new(0.0, 0.0)),
        )
        .expect("save succeeds");
    let raw = backend
        .get_item(POSITION_STORAGE_KEY)
        .expect("read")
        .expect("stored");
    assert_eq!(raw, r#"{"desktop":{"left":"0px","top":"0px"}}"#);
}

#[test]
fn last_save_wins_across_instances() {
    let backend = MemoryStore::new();
    let first = PositionStore::new(&backend);
    let second = PositionStore::new(&backend);
    first
        .save(
            ViewportClass::Desktop,
            StoredPosition::from_point(Point::new(1.0, 1.0)),
        )
        .expect("save");
    second
        .save(
            ViewportClass::Desktop,
            StoredPosition::from_point(Point::new(2.0, 2.0)),
        )
        .expect("save");
    let stored = first.load();
    assert_eq!(
        stored.get(ViewportClass::Desktop).and_then(StoredPosition::to_point),
        Some(Point::new(2.0, 2.0))
    );
}

#[test]
fn custom_key_is_isolated() {
    let backend = MemoryStore::new();
    let custom = PositionStore::with_key(&backend, "switcherTest");
    custom
        .save(
            ViewportClass::Mobile,
            StoredPosition::from_point(Point::new(3.0, 3.0)),
        )
        .expect("save");
    assert!(PositionStore::new(&backend).load().is_empty());
    assert!(!custom.load().is_empty());
}

#[test]
fn malformed_entry_does_not_erase_the_other_class() {
    let backend = MemoryStore::with_item(
        POSITION_STORAGE_KEY,
        r#"{"desktop":{"left":"10px"},"mobile":{"left":"5px","top":"6px"}}"#,
    );
    let store = PositionStore::new(&backend);
    let before = store.load();
    assert!(before.get(ViewportClass::Desktop).is_none());
    assert_eq!(
        before.get(ViewportClass::Mobile).and_then(StoredPosition::to_point),
        Some(Point::new(5.0, 6.0))
    );

    store
        .save(
            ViewportClass::Desktop,
            StoredPosition::from_point(Point::new(1.0, 2.0)),
        )
        .expect("save succeeds");
    let raw = backend
        .get_item(POSITION_STORAGE_KEY)
        .expect("read")
        .expect("stored");
    assert_eq!(
        raw,
        r#"{"desktop":{"left":"1px","top":"2px"},"mobile":{"left":"5px","top":"6px"}}"#
    );
}
