//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use reactive_stores::Store;

use crm_core::domain::{filter_leads, Bucket, Lead, ValidLead, VoiceNote};
use crm_core::CrmConfig;

use crate::browser::now_ms;
use crate::store::{self, CrmState, CrmStore, Repo};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: CrmStore,
    repo: StoredValue<Repo>,
    config: StoredValue<CrmConfig>,
    /// Committed header search query
    pub search: RwSignal<String>,
}

impl AppContext {
    pub fn new(repo: Repo, config: CrmConfig) -> Self {
        Self {
            store: Store::new(CrmState::default()),
            repo: StoredValue::new(repo),
            config: StoredValue::new(config),
            search: RwSignal::new(String::new()),
        }
    }

    pub fn config(&self) -> CrmConfig {
        self.config.get_value()
    }

    /// Mount-time read of all three collections
    pub fn load(&self) {
        self.repo.with_value(|repo| store::store_load(&self.store, repo));
        log::info!(
            "[APP] loaded {} leads, {} voice notes",
            store::store_lead_count_untracked(&self.store),
            store::store_voice_count_untracked(&self.store)
        );
    }

    // Leads

    pub fn lead_count(&self) -> usize {
        store::store_lead_count(&self.store)
    }

    pub fn lead_count_untracked(&self) -> usize {
        store::store_lead_count_untracked(&self.store)
    }

    /// Leads matching the committed search query
    pub fn visible_leads(&self) -> Vec<Lead> {
        let query = self.search.get();
        filter_leads(&store::store_leads(&self.store), &query)
    }

    pub fn add_lead(&self, input: ValidLead) {
        self.repo.with_value(|repo| store::store_add_lead(&self.store, repo, input, now_ms()));
    }

    pub fn delete_lead(&self, id: &str) {
        self.repo.with_value(|repo| store::store_delete_lead(&self.store, repo, id));
    }

    // Tasks

    pub fn bucket(&self, bucket: Bucket) -> Vec<String> {
        store::store_bucket(&self.store, bucket)
    }

    pub fn add_task(&self, label: &str) -> bool {
        self.repo.with_value(|repo| store::store_add_task(&self.store, repo, label))
    }

    pub fn move_task(&self, from: Bucket, to: Bucket, index: usize) {
        log::debug!("[BOARD] move {:?}[{}] -> {:?}", from, index, to);
        self.repo.with_value(|repo| store::store_move_task(&self.store, repo, from, to, index));
    }

    // Voice notes

    pub fn voices(&self) -> Vec<VoiceNote> {
        store::store_voices(&self.store)
    }

    pub fn voice_count_untracked(&self) -> usize {
        store::store_voice_count_untracked(&self.store)
    }

    pub fn add_voice(&self, note: VoiceNote) {
        self.repo.with_value(|repo| store::store_add_voice(&self.store, repo, note));
    }

    pub fn delete_voice(&self, id: &str) {
        self.repo.with_value(|repo| store::store_delete_voice(&self.store, repo, id));
    }
}

/// Get the app context provided by `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
