//! CRM Repository
//!
//! Typed access to the three persisted collections under their fixed keys.

use super::local_store::LocalStore;
use super::traits::KeyValueStore;
use crate::config::StorageKeys;
use crate::domain::{Lead, TaskBoard, VoiceNote};

#[derive(Debug, Clone)]
pub struct CrmRepository<S> {
    store: LocalStore<S>,
    keys: StorageKeys,
}

impl<S: KeyValueStore> CrmRepository<S> {
    pub fn new(backend: S, keys: StorageKeys) -> Self {
        Self {
            store: LocalStore::new(backend),
            keys,
        }
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    pub fn backend(&self) -> &S {
        self.store.backend()
    }

    pub fn load_leads(&self) -> Vec<Lead> {
        self.store.read(&self.keys.leads, Vec::new())
    }

    pub fn save_leads(&self, leads: &[Lead]) {
        self.store.write(&self.keys.leads, leads);
    }

    /// Stored board, or the demo board when nothing usable is stored
    pub fn load_board(&self) -> TaskBoard {
        self.store.read(&self.keys.tasks, TaskBoard::default())
    }

    pub fn save_board(&self, board: &TaskBoard) {
        self.store.write(&self.keys.tasks, board);
    }

    pub fn load_voices(&self) -> Vec<VoiceNote> {
        self.store.read(&self.keys.voices, Vec::new())
    }

    pub fn save_voices(&self, voices: &[VoiceNote]) {
        self.store.write(&self.keys.voices, voices);
    }
}
