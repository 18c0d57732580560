//! API Layer
//!
//! Typed HTTP client for the analytics backend.

pub mod client;

pub use client::{fetch_clients, fetch_summary, resolve_api_base, ApiError, DEFAULT_API_BASE};
