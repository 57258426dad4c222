//! Browser Storage
//!
//! [`KeyValueStore`] over `window.localStorage`.

use skyboard::{KeyValueStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;
use web_sys::Storage;

pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    /// Bind to the window's storage; every call fails when it is missing
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            web_sys::console::warn_1(&"localStorage unavailable; layout and timezone will not persist".into());
        }
        Self { storage }
    }

    fn storage(&self) -> StoreResult<&Storage> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not available".to_string()))
    }
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(js_error(e)))
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::WriteRejected {
                key: key.to_string(),
                reason: js_error(e),
            })
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        self.storage()?
            .remove_item(key)
            .map_err(|e| StoreError::WriteRejected {
                key: key.to_string(),
                reason: js_error(e),
            })
    }

    fn keys(&self) -> StoreResult<Vec<String>> {
        let storage = self.storage()?;
        let len = storage
            .length()
            .map_err(|e| StoreError::Unavailable(js_error(e)))?;

        let mut keys = Vec::with_capacity(len as usize);
        for index in 0..len {
            if let Some(key) = storage
                .key(index)
                .map_err(|e| StoreError::Unavailable(js_error(e)))?
            {
                keys.push(key);
            }
        }
        Ok(keys)
    }
}
