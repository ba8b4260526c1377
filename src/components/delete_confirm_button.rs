//! Delete Confirm Button Component
//!
//! Two-step delete used by the lead and voice note rows in place of a
//! blocking `confirm()` dialog.

use leptos::prelude::*;

/// Delete trigger that asks `prompt` before running `on_confirm`.
///
/// `label` defaults to "Delete". The prompt row offers ✓ (delete) and ✗
/// (keep); either choice folds back to the trigger.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] prompt: String,
    #[prop(optional, into)] label: Option<String>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let confirming = RwSignal::new(false);
    let label = label.unwrap_or_else(|| "Delete".to_string());

    let arm = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        confirming.set(true);
    };
    let answer = move |ev: web_sys::MouseEvent, delete: bool| {
        ev.stop_propagation();
        confirming.set(false);
        if delete {
            on_confirm.run(());
        }
    };

    move || {
        if confirming.get() {
            view! {
                <span class="delete-confirm">
                    <span class="delete-confirm-text">{prompt.clone()}</span>
                    <button class="confirm-btn" title="Delete" on:click=move |ev| answer(ev, true)>"✓"</button>
                    <button class="cancel-btn" title="Keep" on:click=move |ev| answer(ev, false)>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button class=button_class.clone() on:click=arm>{label.clone()}</button>
            }
            .into_any()
        }
    }
}
