//! Browser Bindings
//!
//! Platform services behind the core traits: localStorage, MediaRecorder,
//! clipboard, clock.

mod clipboard;
mod media;
mod storage;
mod time;

use wasm_bindgen::JsValue;

pub use clipboard::{alert, write_clipboard_text};
pub use media::BrowserRecorder;
pub use storage::BrowserStorage;
pub use time::{format_local_time, now_ms};

/// Best-effort text for a thrown JS value
pub(crate) fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
