//! Global Collection Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the three
//! persisted collections. Every helper computes the next collection value,
//! writes it through the repository and then replaces the field. A failed
//! write is logged by the repository and the field still takes the new value.

use leptos::prelude::*;
use reactive_stores::Store;

use crm_core::domain::{self, Bucket, Lead, TaskBoard, ValidLead, VoiceNote};
use crm_core::repository::{CrmRepository, KeyValueStore};

use crate::browser::BrowserStorage;

/// Collections shown by the dashboard
#[derive(Clone, Debug, Default, Store)]
pub struct CrmState {
    /// Newest first
    pub leads: Vec<Lead>,
    pub board: TaskBoard,
    /// Newest first
    pub voices: Vec<VoiceNote>,
}

/// Type alias for the store
pub type CrmStore = Store<CrmState>;

/// Repository bound to the browser's localStorage
pub type Repo = CrmRepository<BrowserStorage>;

// ========================
// Store Helper Functions
// ========================

/// Replace every collection with what storage holds
pub fn store_load<S: KeyValueStore>(store: &CrmStore, repo: &CrmRepository<S>) {
    store.leads().set(repo.load_leads());
    store.board().set(repo.load_board());
    store.voices().set(repo.load_voices());
}

pub fn store_leads(store: &CrmStore) -> Vec<Lead> {
    store.leads().get()
}

pub fn store_lead_count(store: &CrmStore) -> usize {
    store.leads().with(Vec::len)
}

pub fn store_lead_count_untracked(store: &CrmStore) -> usize {
    store.leads().with_untracked(Vec::len)
}

pub fn store_add_lead<S: KeyValueStore>(store: &CrmStore, repo: &CrmRepository<S>, input: ValidLead, now_ms: i64) {
    let updated = store.leads().with_untracked(|leads| domain::add_lead(leads, input, now_ms));
    repo.save_leads(&updated);
    store.leads().set(updated);
}

pub fn store_delete_lead<S: KeyValueStore>(store: &CrmStore, repo: &CrmRepository<S>, id: &str) {
    let updated = store.leads().with_untracked(|leads| domain::delete_lead(leads, id));
    repo.save_leads(&updated);
    store.leads().set(updated);
}

pub fn store_bucket(store: &CrmStore, bucket: Bucket) -> Vec<String> {
    store.board().with(|board| board.bucket(bucket).to_vec())
}

/// Adds to the head of Todo; `false` for a blank label
pub fn store_add_task<S: KeyValueStore>(store: &CrmStore, repo: &CrmRepository<S>, label: &str) -> bool {
    let mut board = store.board().get_untracked();
    if !board.add_task(label) {
        return false;
    }
    repo.save_board(&board);
    store.board().set(board);
    true
}

pub fn store_move_task<S: KeyValueStore>(store: &CrmStore, repo: &CrmRepository<S>, from: Bucket, to: Bucket, index: usize) {
    let mut board = store.board().get_untracked();
    if !board.move_task(from, to, index) {
        return;
    }
    repo.save_board(&board);
    store.board().set(board);
}

pub fn store_voices(store: &CrmStore) -> Vec<VoiceNote> {
    store.voices().get()
}

pub fn store_voice_count_untracked(store: &CrmStore) -> usize {
    store.voices().with_untracked(Vec::len)
}

pub fn store_add_voice<S: KeyValueStore>(store: &CrmStore, repo: &CrmRepository<S>, note: VoiceNote) {
    let updated = store.voices().with_untracked(|voices| domain::add_voice(voices, note));
    repo.save_voices(&updated);
    store.voices().set(updated);
}

pub fn store_delete_voice<S: KeyValueStore>(store: &CrmStore, repo: &CrmRepository<S>, id: &str) {
    let updated = store.voices().with_untracked(|voices| domain::delete_voice(voices, id));
    repo.save_voices(&updated);
    store.voices().set(updated);
}
