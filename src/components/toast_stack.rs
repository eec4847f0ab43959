//! Toast Stack Component

use leptos::prelude::*;

use crate::notify::Toast;

/// Error toasts, oldest on top
#[component]
pub fn ToastStack(toasts: RwSignal<Vec<Toast>>) -> impl IntoView {
    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| view! {
                    <div class="toast" role="alert">{toast.message}</div>
                }
            />
        </div>
    }
}
