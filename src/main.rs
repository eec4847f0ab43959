#![allow(warnings)]
//! Todo List Frontend Entry Point

mod app;
mod components;
mod context;
mod controller;
mod logging;
mod notify;
mod store;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
