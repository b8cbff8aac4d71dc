#![allow(warnings)]
//! Kipventory Frontend Entry Point

mod models;
mod config;
mod api;
mod context;
mod store;
mod routes;
mod item_creation;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    mount_to_body(App);
}
