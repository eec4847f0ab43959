//! Todo App
//!
//! Builds the controller, provides it via context and loads the list on mount.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{ClientConfig, HttpTodoApi, TodoGateway};

use crate::components::{ToastStack, TodoForm, TodoList};
use crate::context::AppContext;
use crate::controller::TodoController;
use crate::notify::{Toast, ToastReporter};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::default();
    let toasts = RwSignal::new(Vec::<Toast>::new());

    let gateway = TodoGateway::new(HttpTodoApi::new(&config), Rc::new(ToastReporter::new(toasts)));
    let (version, set_version) = signal(0u32);

    let ctx = AppContext::new((version, set_version), TodoController::new(gateway, &config));
    provide_context(ctx);

    // Initial load, once on mount
    Effect::new(move |_| {
        let controller = ctx.controller();
        spawn_local(async move {
            controller.start().await;
            ctx.refresh();
        });
    });

    view! {
        <main class="todo-app">
            <h1>"Todo List"</h1>
            <TodoForm />
            <TodoList />
            <ToastStack toasts=toasts />
        </main>
    }
}
