//! DCU Chat
//!
//! Campus chat assistant frontend built with Leptos (WASM).
//!
//! # Features
//!
//! - Login and registration backed by bearer-token sessions
//! - Chat transcript cached in local storage until the next midnight
//! - Automatic logout and redirect on expired or invalid tokens
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the DCU Chat API via HTTP; the session
//! token and the day's transcript are mirrored into browser local storage.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod storage;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
