//! Local Store
//!
//! Whole-collection JSON persistence over a [`KeyValueStore`]. Reads fall
//! back to a default and writes never fail the caller: both paths log and
//! carry on, leaving the in-memory collection authoritative for the session.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::traits::KeyValueStore;

#[derive(Debug, Clone)]
pub struct LocalStore<S> {
    backend: S,
}

impl<S: KeyValueStore> LocalStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Deserialized value under `key`, or `fallback` when absent or corrupt.
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(err) => {
                log::warn!("[STORE] {}; using default", err);
                return fallback;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("[STORE] corrupt value under '{}': {}; using default", key, err);
                fallback
            }
        }
    }

    /// Serializes `value` and stores it under `key`. Failures are logged only.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(err) => {
                log::error!("[STORE] failed to serialize '{}': {}", key, err);
                return;
            }
        };
        if let Err(err) = self.backend.set_item(key, &json) {
            log::error!("[STORE] write failed: {}", err);
        }
    }
}
