//! New Lead Form Component
//!
//! Explicit name/phone/email inputs. Only the name is required.

use leptos::prelude::*;

use crm_core::domain::NewLead;

use crate::context::use_app_context;

#[component]
pub fn NewLeadForm(#[prop(into)] on_done: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let create_lead = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let input = NewLead {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
        };
        match input.validate() {
            Ok(lead) => {
                ctx.add_lead(lead);
                set_name.set(String::new());
                set_phone.set(String::new());
                set_email.set(String::new());
                set_error.set(None);
                on_done.run(());
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <form class="lead-form" on:submit=create_lead>
            <input
                type="text"
                placeholder="Lead name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                type="tel"
                placeholder="Phone"
                prop:value=move || phone.get()
                on:input=move |ev| set_phone.set(event_target_value(&ev))
            />
            <input
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            {move || error.get().map(|msg| view! { <div class="form-error">{msg}</div> })}
            <div class="form-actions">
                <button type="submit" class="btn">"Save Lead"</button>
                <button type="button" class="btn btn-ghost" on:click=move |_| on_done.run(())>"Cancel"</button>
            </div>
        </form>
    }
}
