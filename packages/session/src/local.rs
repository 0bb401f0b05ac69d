//! # Browser `localStorage` store — web persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It
//! wraps `window.localStorage` through [`web_sys::Storage`], so persisted
//! session fields survive page reloads.
//!
//! The storage handle is looked up on every call rather than cached: `Storage`
//! is not `Send`, and the lookup is a cheap property read. A missing window or
//! a browser that refuses storage access (private mode, blocked cookies)
//! surfaces as [`StorageError::Unavailable`].

use wasm_bindgen::JsValue;
use web_sys::Storage;

use crate::error::StorageError;
use crate::storage::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Result<Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no global window".to_string()))?;
        window
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))
    }
}

fn js_error(value: JsValue) -> StorageError {
    StorageError::Unavailable(format!("{value:?}"))
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(js_error)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(js_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage()?.remove_item(key).map_err(js_error)
    }
}
