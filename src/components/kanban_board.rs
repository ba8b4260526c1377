//! Kanban Board Component
//!
//! Three columns of task cards. Cards move with the per-card buttons or by
//! dragging them onto another column.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crm_core::domain::Bucket;

use crate::components::NewTaskForm;
use crate::context::{use_app_context, AppContext};

/// Dragged card: (source bucket, index within it)
type CardPosition = (Bucket, usize);
type BoardDnd = DndSignals<CardPosition, Bucket>;

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let ctx = use_app_context();
    let (adding, set_adding) = signal(false);

    let dnd: BoardDnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |(from, index): CardPosition, to: Bucket| {
        if from != to {
            ctx.move_task(from, to, index);
        }
    });

    view! {
        <div class="card">
            <div class="card-header board-header">
                <h3 class="card-title">"Kanban Board"</h3>
                <button class="btn btn-ghost" on:click=move |_| set_adding.update(|v| *v = !*v)>
                    "+ Add"
                </button>
            </div>
            <div class="card-content">
                <Show when=move || adding.get()>
                    <NewTaskForm on_done=move |_| set_adding.set(false) />
                </Show>
                <div class="board-columns">
                    {Bucket::ALL
                        .into_iter()
                        .map(|bucket| view! { <BoardColumn ctx=ctx dnd=dnd bucket=bucket /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn BoardColumn(ctx: AppContext, dnd: BoardDnd, bucket: Bucket) -> impl IntoView {
    let on_mouseenter = make_on_target_mouseenter(dnd, bucket);
    let on_mouseleave = make_on_mouseleave(dnd);

    let column_class = move || {
        let mut c = String::from("board-column");
        if dnd.is_dragging() { c.push_str(" drop-zone"); }
        if dnd.is_drop_target(bucket) { c.push_str(" active"); }
        c
    };

    view! {
        <div class=column_class on:mouseenter=on_mouseenter on:mouseleave=on_mouseleave>
            <div class="column-title">{bucket.as_str()}</div>
            <For
                each={move || ctx.bucket(bucket).into_iter().enumerate().collect::<Vec<_>>()}
                // Labels are not unique, so key on position and text together
                key=|(index, label)| (*index, label.clone())
                children=move |(index, label)| {
                    let on_mousedown = make_on_mousedown(dnd, (bucket, index));
                    let is_dragging = move || dnd.dragging_read.get() == Some((bucket, index));
                    let card_class = move || {
                        let mut c = String::from(if index % 2 == 1 { "task-card alt" } else { "task-card" });
                        if is_dragging() { c.push_str(" dragging"); }
                        c
                    };
                    view! {
                        <div class=card_class on:mousedown=on_mousedown>
                            <span class="task-label">{label}</span>
                            <div class="task-actions">
                                {bucket.move_targets().map(|target| view! {
                                    <button
                                        class="task-move-btn"
                                        on:click=move |_| ctx.move_task(bucket, target, index)
                                    >
                                        {target.move_label()}
                                    </button>
                                }).collect_view()}
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
