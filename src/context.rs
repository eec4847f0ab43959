//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use todo_client::HttpTodoApi;

use crate::controller::TodoController;

pub type AppController = TodoController<HttpTodoApi>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped whenever the controller changed the view model - read
    pub version: ReadSignal<u32>,
    /// Bumped whenever the controller changed the view model - write
    set_version: WriteSignal<u32>,
    controller: StoredValue<Rc<AppController>, LocalStorage>,
}

impl AppContext {
    pub fn new(version: (ReadSignal<u32>, WriteSignal<u32>), controller: AppController) -> Self {
        Self {
            version: version.0,
            set_version: version.1,
            controller: StoredValue::new_local(Rc::new(controller)),
        }
    }

    pub fn controller(&self) -> Rc<AppController> {
        self.controller.get_value()
    }

    /// Make list and select re-read the view model
    pub fn refresh(&self) {
        self.set_version.update(|v| *v += 1);
    }
}
