//! New Task Form Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Inline form that adds a task to the head of Todo
#[component]
pub fn NewTaskForm(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let (label, set_label) = signal(String::new());

    let add_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if ctx.add_task(&label.get_untracked()) {
            set_label.set(String::new());
            on_done.run(());
        }
    };

    view! {
        <form class="inline-form" on:submit=add_task>
            <input
                type="text"
                placeholder="New task"
                prop:value=move || label.get()
                on:input=move |ev| set_label.set(event_target_value(&ev))
            />
            <button type="submit" class="btn">"Add"</button>
            <button type="button" class="btn btn-ghost" on:click=move |_| on_done.run(())>"Cancel"</button>
        </form>
    }
}
