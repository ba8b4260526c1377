//! Lead List Component
//!
//! Saved leads, newest first, narrowed by the header search.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crm_core::domain::Lead;

use crate::browser;
use crate::components::{DeleteConfirmButton, NewLeadForm};
use crate::context::use_app_context;

#[component]
pub fn LeadList() -> impl IntoView {
    let ctx = use_app_context();
    let (adding, set_adding) = signal(false);

    let empty_message = move || {
        if ctx.lead_count() == 0 {
            "No leads yet — add one."
        } else {
            "No leads match your search."
        }
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title">"Leads"</h3>
            </div>
            <div class="card-content">
                <div class="lead-toolbar">
                    <span class="muted">"Saved leads (local)"</span>
                    <button class="btn btn-secondary" on:click=move |_| set_adding.update(|v| *v = !*v)>
                        "+ New Lead"
                    </button>
                </div>
                <Show when=move || adding.get()>
                    <NewLeadForm on_done=move |_| set_adding.set(false) />
                </Show>
                <Show
                    when=move || !ctx.visible_leads().is_empty()
                    fallback=move || view! { <div class="empty-state">{empty_message}</div> }
                >
                    <ul class="lead-list">
                        <For
                            each=move || ctx.visible_leads()
                            key=|lead| lead.id.clone()
                            children=move |lead| view! { <LeadRow lead=lead /> }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn LeadRow(lead: Lead) -> impl IntoView {
    let ctx = use_app_context();
    let id = lead.id.clone();

    let copy = {
        let lead = lead.clone();
        move |_| {
            let json = match serde_json::to_string(&lead) {
                Ok(json) => json,
                Err(e) => {
                    log::error!("[LEADS] failed to serialize {}: {}", lead.id, e);
                    return;
                }
            };
            spawn_local(async move {
                match browser::write_clipboard_text(&json).await {
                    Ok(()) => browser::alert("Copied lead JSON"),
                    Err(e) => log::warn!("[LEADS] clipboard write failed: {}", e),
                }
            });
        }
    };

    view! {
        <li class="lead-row">
            <div class="lead-info">
                <div class="lead-name">{lead.name.clone()}</div>
                <div class="lead-contact">{lead.contact_line()}</div>
            </div>
            <div class="lead-actions">
                <button class="btn btn-light" on:click=copy>"Copy"</button>
                <DeleteConfirmButton
                    button_class="btn btn-danger"
                    prompt="Delete lead?"
                    on_confirm=move |_| ctx.delete_lead(&id)
                />
            </div>
        </li>
    }
}
