//! Header Bar Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Brand, page chip and the lead search box.
///
/// Typing only edits a draft; the query is committed by the Search button
/// or Enter.
#[component]
pub fn HeaderBar() -> impl IntoView {
    let ctx = use_app_context();
    let (draft, set_draft) = signal(String::new());

    let commit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.search.set(draft.get_untracked());
    };

    view! {
        <header class="header-bar">
            <div class="brand">
                <span class="brand-name">"OCEAN CRM"</span>
                <span class="chip">"Dashboard"</span>
            </div>
            <form class="search-form" on:submit=commit>
                <input
                    type="search"
                    placeholder="Search leads, properties…"
                    prop:value=move || draft.get()
                    on:input=move |ev| set_draft.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-secondary">"Search"</button>
            </form>
        </header>
    }
}
