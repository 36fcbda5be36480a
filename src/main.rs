//! My Hub Frontend Entry Point

mod app;
mod components;
mod dom;
mod pages;
mod storage;
mod store;
mod timing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {e}").into());
    }
    mount_to_body(App);
}
