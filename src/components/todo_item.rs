//! Todo Item Component
//!
//! One row: checkbox, "title by owner" label, dismiss control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::view::TaskRow;

#[component]
pub fn TodoItem(row: TaskRow) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let key = row.key;
    let label = row.label();

    view! {
        <li class="todo-item" data-id=row.task_id.to_string() title=label>
            // The checkbox has already flipped by the time this runs
            <input
                type="checkbox"
                checked=row.completed
                on:change=move |ev| {
                    let completed = event_target_checked(&ev);
                    let controller = ctx.controller();
                    spawn_local(async move {
                        controller.toggle(key, completed).await;
                    });
                }
            />
            <span>{row.title} " " <i>"by"</i> " " <b>{row.owner_name}</b></span>
            <span class="close" on:click=move |_| {
                let controller = ctx.controller();
                spawn_local(async move {
                    if controller.dismiss(key).await {
                        ctx.refresh();
                    }
                });
            }>"×"</span>
        </li>
    }
}
