//! Shared HTTP client wrapper
//!
//! Thin wrapper around `reqwest::blocking::Client` that centralizes
//! USER_AGENT and timeout configuration.

use crate::config::network::USER_AGENT;
use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Shared HTTP client with standard configuration
pub struct HttpClient {
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    /// Create a client with no request timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(None)
    }

    /// Create a client with an optional whole-request timeout
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self> {
        let inner = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { inner })
    }

    /// GET a URL with query parameters and deserialize the JSON response
    ///
    /// Non-success statuses are reported as `AppError::Status`.
    pub fn get_json<T: DeserializeOwned>(&self, url: &str, query: &[(&str, &str)]) -> Result<T> {
        let resp = self.inner.get(url).query(query).send()?;
        let status = resp.status();
        debug!(url = %resp.url(), %status, "GET");

        if !status.is_success() {
            return Err(AppError::Status {
                status,
                url: resp.url().to_string(),
            });
        }

        let data = resp.json::<T>()?;
        Ok(data)
    }
}
