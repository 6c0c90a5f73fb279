//! Hiring Insights Dashboard
//!
//! Synthetic hiring-funnel dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Timeframe selector (30, 90, 180 and 365 days)
//! - Canvas line chart with viewport-dependent date labels
//! - Hover tooltip and legend
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Series are generated in the browser by the `hiring-insights`
//! crate; there is no backend.

use leptos::*;

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
