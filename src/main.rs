//! Space Organizer Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod hierarchy;
mod logging;
mod models;
mod navigation;
mod reorganize;
mod search;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
