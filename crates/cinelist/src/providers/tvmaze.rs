//! TVMaze API provider
//!
//! Implementation of `ShowProvider` for the TVMaze show directory
//! (<https://www.tvmaze.com/api>).

use crate::config::providers::{TVMAZE_DEFAULT_SERVER, TVMAZE_SEARCH_PATH};
use crate::data::types::{Show, ShowRecord};
use crate::error::Result;
use crate::network::HttpClient;

use super::traits::ShowProvider;

use std::time::Duration;
use tracing::debug;

/// TVMaze API provider
///
/// Searches the [TVMaze](https://www.tvmaze.com/) directory through its
/// public, unauthenticated search endpoint.
pub struct TvMazeProvider {
    client: HttpClient,
    base_url: String,
}

impl TvMazeProvider {
    /// Create a provider using the default server
    pub fn new() -> Result<Self> {
        Self::with_base_url(TVMAZE_DEFAULT_SERVER)
    }

    /// Create a provider with a custom base URL (for testing or mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::with_options(base_url, None)
    }

    /// Create a provider with a custom base URL and request timeout
    pub fn with_options(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url: String = base_url.into();
        Ok(Self {
            client: HttpClient::with_timeout(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a full API URL from an endpoint path
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl ShowProvider for TvMazeProvider {
    fn name(&self) -> &'static str {
        "TVMaze"
    }

    fn id(&self) -> &'static str {
        "tvmaze"
    }

    fn search(&self, term: &str) -> Result<Vec<Show>> {
        let records: Vec<ShowRecord> = self
            .client
            .get_json(&self.url(TVMAZE_SEARCH_PATH), &[("q", term)])?;
        debug!(term, count = records.len(), "search results");
        Ok(records.into_iter().map(Show::from).collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
