//! Repository Layer
//!
//! Persistence of the leads, tasks and voice-note collections.

mod crm_repo;
mod local_store;
mod memory;
mod traits;

pub use crm_repo::CrmRepository;
pub use local_store::LocalStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;

#[cfg(test)]
mod tests;
