//! Expense Tracker Dashboard
//!
//! Browser front-end for the expense tracker, built with Leptos (WASM).
//!
//! # Features
//!
//! - Expense table, newest first, with delete
//! - Summary totals and a category donut chart
//! - Add-expense form with client-side validation
//!
//! # Architecture
//!
//! Client-side rendered Leptos application compiled to WebAssembly. It talks
//! to the expense REST API over HTTP; the API origin defaults to the page's
//! own and can be overridden with the `expense_api_url` local storage key.

use leptos::*;

mod api;
mod app;
mod chart;
mod components;
mod controller;
mod format;
mod model;
mod pages;
mod state;
mod summary;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
