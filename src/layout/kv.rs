//! Key-value backends
//!
//! The dashboard never touches browser storage directly. Everything goes
//! through [`KeyValueStore`], which the UI implements over
//! `window.localStorage` and tests implement with [`MemoryStore`].

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::error::StoreResult;

/// Synchronous string key-value storage with `localStorage` semantics
pub trait KeyValueStore {
    /// Read a value; `Ok(None)` when the key is absent
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove_item(&self, key: &str) -> StoreResult<()>;

    /// All keys currently present
    fn keys(&self) -> StoreResult<Vec<String>>;
}

/// In-memory store, ordered by key
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: pre-populate an entry
    pub fn with_item(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.borrow_mut().insert(key.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.entries.borrow().keys().cloned().collect())
    }
}
