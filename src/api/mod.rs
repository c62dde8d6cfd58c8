//! HTTP API Client
//!
//! Communication with the KursManager records API.

pub mod client;

pub use client::*;
