//! Error Toasts
//!
//! Browser side of the error channel: each report becomes a toast that
//! removes itself after a few seconds, so nothing blocks the page.

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use todo_client::{ApiError, ErrorReporter};

/// How long a toast stays on screen.
const TOAST_MILLIS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
}

pub struct ToastReporter {
    toasts: RwSignal<Vec<Toast>>,
    next_id: Cell<u64>,
}

impl ToastReporter {
    pub fn new(toasts: RwSignal<Vec<Toast>>) -> Self {
        Self {
            toasts,
            next_id: Cell::new(0),
        }
    }
}

impl ErrorReporter for ToastReporter {
    fn report(&self, error: &ApiError) {
        let id = self.next_id.get();
        self.next_id.set(id + 1);

        log::error!("{}", error);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: error.user_message(),
            })
        });

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MILLIS).await;
            toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }
}
