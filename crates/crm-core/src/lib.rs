//! Ocean CRM Core
//!
//! Layered like the UI consumes it:
//! - domain: leads, task board, voice notes and their pure operations
//! - repository: key-value persistence of the three collections
//! - capture: recorder-agnostic voice capture lifecycle
//! - assistant: canned chat transcript

pub mod assistant;
pub mod capture;
pub mod config;
pub mod domain;
pub mod error;
pub mod repository;

pub use config::{CrmConfig, StorageKeys};
pub use error::{CaptureError, StoreError};
