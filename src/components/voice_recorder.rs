//! Voice Recorder Component
//!
//! Record/stop controls, elapsed timer and the save/reset actions for the
//! finished clip.
//!
//! The capture session lives in a local slot. Async steps take it out and
//! put it back when done, so clicks landing mid-step find an empty slot and
//! do nothing.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use leptos::task::spawn_local;

use crm_core::capture::{CaptureSession, CaptureView, Permission};
use crm_core::domain::format_elapsed;

use crate::browser::{self, BrowserRecorder};
use crate::context::use_app_context;

type Session = CaptureSession<BrowserRecorder>;
type SessionSlot = StoredValue<Option<Session>, LocalStorage>;

fn take_session(slot: SessionSlot) -> Option<Session> {
    let mut taken = None;
    slot.update_value(|session| taken = session.take());
    taken
}

fn put_back(slot: SessionSlot, session: Session, set_view: WriteSignal<CaptureView>) {
    set_view.set(session.view());
    slot.set_value(Some(session));
}

#[component]
pub fn VoiceRecorder() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let tick_ms = config.capture_tick.as_millis() as u32;

    let slot: SessionSlot = StoredValue::new_local(Some(CaptureSession::new(BrowserRecorder::new(config.audio_mime))));
    let ticker = StoredValue::new_local(None::<Interval>);
    let (capture, set_capture) = signal(CaptureView::default());
    let (error, set_error) = signal(None::<String>);

    // Permission is probed once, at mount
    spawn_local(async move {
        if let Some(mut session) = take_session(slot) {
            session.probe_permission().await;
            put_back(slot, session, set_capture);
        }
    });

    let start = move |_| {
        spawn_local(async move {
            let Some(mut session) = take_session(slot) else { return };
            set_error.set(None);
            let started = session.start().await;
            put_back(slot, session, set_capture);
            match started {
                Ok(()) => {
                    let interval = Interval::new(tick_ms, move || {
                        slot.update_value(|session| {
                            if let Some(session) = session.as_mut() {
                                session.tick();
                                set_capture.set(session.view());
                            }
                        });
                    });
                    ticker.set_value(Some(interval));
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    let stop = move |_| {
        // Dropping the interval cancels it
        ticker.set_value(None);
        spawn_local(async move {
            let Some(mut session) = take_session(slot) else { return };
            if let Err(err) = session.stop().await {
                set_error.set(Some(err.to_string()));
            }
            put_back(slot, session, set_capture);
        });
    };

    let reset = move |_| {
        slot.update_value(|session| {
            if let Some(session) = session.as_mut() {
                session.reset();
                set_capture.set(session.view());
            }
        });
    };

    let save = move |_| {
        let existing = ctx.voice_count_untracked();
        let mut note = None;
        slot.update_value(|session| {
            if let Some(session) = session.as_mut() {
                note = session.save(existing, browser::now_ms());
                set_capture.set(session.view());
            }
        });
        if let Some(note) = note {
            log::info!("[VOICE] saved {} ({}s)", note.label, note.duration);
            ctx.add_voice(note);
            browser::alert("Voice note saved locally ✅");
        }
    };

    let denied = move || capture.with(|c| c.permission == Permission::Denied);

    view! {
        <div class="card voice-card">
            <div class="card-header">
                <h3 class="card-title">"Voice Notes"</h3>
            </div>
            <div class="card-content">
                <Show when=denied>
                    <div class="voice-notice">
                        "Microphone not available. Allow mic access in your browser settings."
                    </div>
                </Show>
                {move || error.get().map(|msg| view! { <div class="voice-error">{msg}</div> })}

                <div class="voice-controls">
                    {move || if capture.with(|c| c.recording) {
                        view! {
                            <button class="btn btn-light" on:click=stop>"■ Stop"</button>
                        }.into_any()
                    } else {
                        view! {
                            <button class="btn btn-secondary" disabled=denied on:click=start>"🎙 Record"</button>
                        }.into_any()
                    }}

                    <span class="voice-elapsed">{move || format_elapsed(capture.with(|c| c.elapsed))}</span>

                    {move || capture.with(|c| c.preview_url.clone()).map(|url| {
                        let file_name = format!("voice-note-{}.webm", browser::now_ms());
                        view! {
                            <audio class="voice-preview" controls src=url.clone()></audio>
                            <a class="btn btn-light" href=url download=file_name>"Download"</a>
                            <button class="btn btn-ghost" on:click=save>"Save Locally"</button>
                            <button class="btn btn-ghost" on:click=reset>"Reset"</button>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
