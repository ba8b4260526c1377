//! Saved Voice Notes Component

use leptos::prelude::*;

use crate::browser::format_local_time;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;

#[component]
pub fn VoiceList() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="card">
            <div class="card-header">
                <h3 class="card-title">"Voice Notes (saved)"</h3>
            </div>
            <div class="card-content scroll-list">
                <Show when=move || ctx.voices().is_empty()>
                    <div class="empty-message">"No voice notes saved yet."</div>
                </Show>
                <For
                    each=move || ctx.voices()
                    key=|note| note.id.clone()
                    children=move |note| {
                        let id = note.id.clone();
                        view! {
                            <div class="list-row">
                                <div>
                                    <div class="row-title">{note.label.clone()}</div>
                                    <div class="row-meta">
                                        {format!("{} • {}s", format_local_time(note.created_at), note.duration)}
                                    </div>
                                </div>
                                <div class="row-actions">
                                    <audio controls src=note.data.clone()></audio>
                                    <DeleteConfirmButton
                                        button_class="icon-btn"
                                        label="🗑"
                                        prompt="Delete voice note?"
                                        on_confirm=move |_| ctx.delete_voice(&id)
                                    />
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
