#![allow(warnings)]
//! Loan Pipeline Dashboard Entry Point

mod api;
mod app;
mod auth;
mod components;
mod format;
mod models;
mod session;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
