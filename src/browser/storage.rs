//! localStorage backend

use crm_core::error::{StoreError, StoreResult};
use crm_core::repository::KeyValueStore;

use super::js_error;

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> StoreResult<web_sys::Storage> {
        let window = web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".into()))?;
        window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_error(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".into()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        Self::storage()?.get_item(key).map_err(|e| StoreError::Read {
            key: key.to_string(),
            message: js_error(&e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::storage()?.set_item(key, value).map_err(|e| StoreError::Write {
            key: key.to_string(),
            message: js_error(&e),
        })
    }
}
