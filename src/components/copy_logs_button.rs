//! Copy Logs Button Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;

/// Copies the rolling log buffer to the clipboard
#[component]
pub fn CopyLogsButton() -> impl IntoView {
    let copy_logs = move |_| {
        let Some(logger) = rolling_logger::global() else {
            browser::alert("Logging is not initialized");
            return;
        };
        let text = logger.dump();
        spawn_local(async move {
            match browser::write_clipboard_text(&text).await {
                Ok(()) => browser::alert("Copied recent logs"),
                Err(e) => log::warn!("[APP] clipboard write failed: {}", e),
            }
        });
    };

    view! {
        <button class="btn btn-ghost footer-btn" on:click=copy_logs>"Copy logs"</button>
    }
}
