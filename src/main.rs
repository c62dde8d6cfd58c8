//! KursManager Dashboard
//!
//! Course-management dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Overview of courses, instructors, participants, enrollments, and rooms
//! - Revenue and payment-status aggregation
//! - Per-course enrollment bar chart
//! - Upcoming-courses preview
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the KursManager records API via HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod pages;
mod state;
mod stats;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
