//! Network operations
//!
//! HTTP client and utilities.

pub mod client;

pub use client::HttpClient;
