//! Todo List Component

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::AppContext;
use crate::controller::Phase;

/// Rows of the view model, newest first
#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let rows = move || {
        let _ = ctx.version.get();
        ctx.controller().rows()
    };
    let loading = move || {
        let _ = ctx.version.get();
        ctx.controller().phase() == Phase::Loading
    };

    view! {
        <Show when=loading>
            <p class="loading">"Loading..."</p>
        </Show>
        <ul id="todo-list">
            <For
                each=rows
                key=|row| row.key
                children=move |row| view! { <TodoItem row=row /> }
            />
        </ul>
    }
}
