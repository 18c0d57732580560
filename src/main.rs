//! Agent Analytics Dashboard
//!
//! Frontend for reviewing customer-support chat transcripts, built with
//! Leptos (WASM).
//!
//! # Features
//!
//! - Metrics overview per reporting period (clients served, messages, tickets)
//! - Per-client chat transcript viewer
//! - Database connection / column mapping configuration persisted locally
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to an externally configured backend API over HTTP;
//! connection settings live in browser local storage behind the
//! [`storage::SettingsStore`] port.

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
