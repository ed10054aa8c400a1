//! Error types for CineList
//!
//! Centralized error handling using thiserror.

use crate::data::types::ShowId;
use thiserror::Error;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport or decoding failure while searching
    #[error("{}", friendly_network_error(.0))]
    Fetch(#[from] reqwest::Error),

    /// The search endpoint answered with a non-success status
    #[error("Search failed: server returned {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Show {0} is already in your favorites")]
    DuplicateFavorite(ShowId),

    #[error("Show {0} is not in the current search results")]
    NotInResults(ShowId),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Whether this error came from the search request
    pub fn is_fetch(&self) -> bool {
        matches!(self, AppError::Fetch(_) | AppError::Status { .. })
    }

    /// Whether this error is the duplicate-favorite notice
    pub fn is_duplicate(&self) -> bool {
        matches!(self, AppError::DuplicateFavorite(_))
    }
}

/// Result type alias for CineList
pub type Result<T> = std::result::Result<T, AppError>;

fn friendly_network_error(e: &reqwest::Error) -> String {
    if e.is_builder() {
        if let Some(url) = e.url() {
            return format!("Invalid URL: {url}");
        }
        return "Invalid URL".to_string();
    }
    if e.is_connect() {
        if let Some(url) = e.url() {
            return format!("Could not connect to {}", url.host_str().unwrap_or("server"));
        }
        return "Could not connect to server".to_string();
    }
    if e.is_timeout() {
        return "Connection timed out".to_string();
    }
    if e.is_decode() {
        return "Invalid response from server".to_string();
    }
    format!("Network error: {e}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_id() {
        let err = AppError::DuplicateFavorite(ShowId::from(123u64));
        assert_eq!(err.to_string(), "Show 123 is already in your favorites");
        assert!(err.is_duplicate());
        assert!(!err.is_fetch());
    }

    #[test]
    fn test_status_is_fetch() {
        let err = AppError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
            url: "https://api.tvmaze.com/search/shows?q=x".to_string(),
        };
        assert!(err.is_fetch());
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_invalid_url_is_friendly() {
        let err = reqwest::blocking::Client::new()
            .get("not a url")
            .send()
            .unwrap_err();
        let app: AppError = err.into();
        assert!(app.is_fetch());
        assert!(app.to_string().starts_with("Invalid URL") || app.to_string().starts_with("Network error"));
    }

    #[test]
    fn test_storage_message() {
        let err = AppError::Storage("Failed to parse \"x.json\"".to_string());
        assert!(err.to_string().starts_with("Storage error:"));
    }
}
