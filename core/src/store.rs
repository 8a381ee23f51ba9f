use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StoreError;
use crate::position::{PositionRecord, StoredPosition, POSITION_STORAGE_KEY};
use crate::viewport::ViewportClass;

/// String key-value backend, shaped after the browser's `Storage`.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }
}

/// Reads and writes the shared position record. There is no locking: two
/// saves racing each other keep whichever landed last.
pub struct PositionStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> PositionStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, POSITION_STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
        }
    }

    pub fn load(&self) -> PositionRecord {
        match self.backend.get_item(&self.key) {
            Ok(Some(raw)) => PositionRecord::parse(&raw),
            _ => PositionRecord::default(),
        }
    }

    pub fn save(&self, class: ViewportClass, position: StoredPosition) -> Result<(), StoreError> {
        let mut record = self.load();
        record.set(class, position);
        let raw = serde_json::to_string(&record).map_err(StoreError::Encode)?;
        self.backend.set_item(&self.key, &raw)
    }
}
