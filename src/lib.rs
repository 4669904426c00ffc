//! Client-side rendered login/registration frontend.
//!
//! The application ships one presentational component, [`features::login::LoginForm`],
//! in two mutually exclusive render shapes: a flat single-page form that posts
//! natively to `/login`, and a multi-step wizard that collects username, email,
//! and password one field at a time before submitting the accumulated values as
//! a single JSON request. The surrounding shell (router, layout, configuration,
//! HTTP plumbing) hosts both shapes.

pub mod app;
#[path = "lib/mod.rs"]
pub mod app_lib;
pub mod components;
pub mod features;
pub mod routes;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Browser entry point: installs the panic hook and console logger, then
/// mounts the application to the document body.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!(
        "Starting login-wizard frontend (build {})",
        app_lib::build_info::git_commit_hash()
    );

    leptos::mount::mount_to_body(app::App);
}
