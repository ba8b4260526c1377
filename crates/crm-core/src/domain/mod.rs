//! Domain Layer
//!
//! Records and the pure operations that produce the next collection value.
//! This layer never touches storage.

mod entity;
mod lead;
mod task;
mod voice_note;

pub use entity::{remove_by_id, DomainError, DomainResult, Entity};
pub use lead::{add_lead, delete_lead, filter_leads, Lead, NewLead, ValidLead, DEFAULT_STATUS};
pub use task::{Bucket, TaskBoard};
pub use voice_note::{add_voice, delete_voice, format_elapsed, AudioClip, VoiceNote};
