//! Repository Layer - Core Traits
//!
//! The key-value contract the local store is written against. The browser
//! binds it to `window.localStorage`; tests use [`super::MemoryStore`].

use crate::error::StoreResult;

/// Synchronous string key-value storage
pub trait KeyValueStore {
    /// Raw value stored under `key`, `None` when absent
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }
}
