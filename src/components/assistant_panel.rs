//! AI Assistant Panel
//!
//! Chat transcript backed by the canned assistant; the reply arrives after a
//! fixed delay.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crm_core::assistant::Assistant;

use crate::context::use_app_context;

#[component]
pub fn AssistantPanel() -> impl IntoView {
    let ctx = use_app_context();
    let delay_ms = ctx.config().assistant_delay.as_millis() as u32;

    let (assistant, set_assistant) = signal(Assistant::new());
    let (query, set_query) = signal(String::new());

    let send = move |_| {
        let text = query.get_untracked();
        let mut accepted = false;
        set_assistant.update(|a| accepted = a.ask(&text));
        if !accepted {
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            let lead_count = ctx.lead_count_untracked();
            set_assistant.update(|a| a.reply(lead_count));
            set_query.set(String::new());
        });
    };

    let messages = move || {
        assistant.with(|a| a.transcript().iter().cloned().enumerate().collect::<Vec<_>>())
    };

    view! {
        <div class="card">
            <div class="card-header assistant-header">
                <span class="assistant-icon">"🤖"</span>
                <h3 class="card-title">"AI Assistant"</h3>
            </div>
            <div class="card-content">
                <div class="transcript">
                    <For
                        each=messages
                        key=|(i, _)| *i
                        children=move |(_, message)| {
                            let side = if message.is_user() { "message user" } else { "message assistant" };
                            view! {
                                <div class=side>
                                    <div class="bubble">
                                        {message.content.lines().map(|line| view! { <p>{line.to_string()}</p> }).collect_view()}
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
                <div class="assistant-input">
                    <textarea
                        placeholder="Ask anything… e.g., 'Draft a follow-up for Rohini Central Mall lead'"
                        prop:value=move || query.get()
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn" disabled=move || assistant.with(Assistant::is_busy) on:click=send>
                        {move || if assistant.with(Assistant::is_busy) { "Thinking…" } else { "Send ›" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
