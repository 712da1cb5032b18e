//! Summoner's Chronicle
//!
//! Yearly League of Legends performance reports, rendered in the browser.
//!
//! # Features
//!
//! - Magic-link email authentication and `.sumvault` access-key files
//! - Summoner account linking and report generation
//! - Seven-section yearly report dashboard
//! - PDF download and native share
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the Summoner's Chronicle API via HTTP;
//! session credentials live in browser local storage.

use leptos::*;

mod access_key;
mod api;
mod app;
mod components;
mod config;
mod pages;
mod report;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("{} v{} starting", config::CONFIG.name, config::CONFIG.version);

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
