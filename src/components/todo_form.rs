//! Todo Form Component
//!
//! Owner select, title input and submit button.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::EntityId;

use crate::context::AppContext;

/// Form for creating new tasks
#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (title, set_title) = signal(String::new());
    let (owner, set_owner) = signal(String::new());

    let create_task = move |ev: SubmitEvent| {
        ev.prevent_default();
        let text = title.get();
        let owner_value = owner.get();
        // Same as the browser's `required` check
        if text.is_empty() || owner_value.is_empty() { return; }

        let controller = ctx.controller();
        spawn_local(async move {
            if controller.create(EntityId::parse(&owner_value), text).await.is_some() {
                set_title.set(String::new());
                ctx.refresh();
            }
        });
    };

    // Keyed so a refresh keeps the existing option nodes and the selection
    let owner_options = move || {
        let _ = ctx.version.get();
        ctx.controller().owner_options()
    };

    view! {
        <form class="todo-form" on:submit=create_task>
            <select
                id="user-todo"
                name="user"
                required
                prop:value=move || owner.get()
                on:change=move |ev| set_owner.set(event_target_value(&ev))
            >
                <option value="">"Select user"</option>
                <For
                    each=owner_options
                    key=|option| option.value.clone()
                    children=|option| view! { <option value=option.value>{option.label}</option> }
                />
            </select>
            <input
                type="text"
                name="todo"
                placeholder="New todo"
                required
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <button type="submit">"Add Todo"</button>
        </form>
    }
}
