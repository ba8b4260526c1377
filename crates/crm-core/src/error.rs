//! Error types for storage and audio capture.
//!
//! Neither kind is fatal: the store swallows its errors after logging them
//! and capture errors end up as inline notices in the UI.

use thiserror::Error;

/// Failures reported by a key-value backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Storage is not reachable at all (no window, storage disabled).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Backend refused to read a key.
    #[error("failed to read '{key}': {message}")]
    Read { key: String, message: String },

    /// Backend refused to persist a key (quota exceeded, private mode...).
    #[error("failed to write '{key}': {message}")]
    Write { key: String, message: String },
}

/// Failures reported while driving a microphone recorder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The platform has no microphone API or the user denied access.
    #[error("microphone not available: {0}")]
    PermissionDenied(String),

    /// The recorder could not start capturing.
    #[error("failed to start recording: {0}")]
    Start(String),

    /// The recorder could not stop or finalize the captured audio.
    #[error("failed to finalize recording: {0}")]
    Finalize(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
pub type CaptureResult<T> = Result<T, CaptureError>;
