//! Data Nerd Dashboard
//!
//! Job-market analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Headline stats: jobs analyzed, most demanded skill, peak salary
//! - Top skills bar chart filtered by role and country
//! - Monthly demand trends for python, sql and aws
//! - Market momentum (gainers and losers)
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It reads from the Data Nerd analytics API over HTTP; query
//! building, derived metrics and view state come from the `data-nerd` crate.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
