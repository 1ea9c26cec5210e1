//! API Layer
//!
//! HTTP client for the DCU Chat backend.

pub mod client;

pub use client::{login, register, send_message, ApiError};
