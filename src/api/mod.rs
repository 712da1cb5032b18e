//! API Layer
//!
//! Typed HTTP client for the Summoner's Chronicle REST API.

pub mod client;
pub mod error;
pub mod types;

pub use client::*;
pub use error::ApiError;
