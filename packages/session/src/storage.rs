//! Durable key-value storage seen by the session store.
//!
//! The interface follows the browser's `localStorage`: string keys, string
//! values, synchronous calls. Implementations live in sibling modules
//! ([`crate::MemoryStore`], [`crate::FileStore`], and `LocalStorage` on web).

use crate::error::StorageError;

/// Synchronous string key-value store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
