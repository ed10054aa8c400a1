//! Application settings management
//!
//! User preferences read from `settings.json` in the config directory.

use crate::config::providers::TVMAZE_DEFAULT_SERVER;
use crate::config::storage::SETTINGS_FILE;
use crate::data::storage;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    // === Search ===
    /// Base URL of the show search API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout in seconds; no timeout when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    // === Storage ===
    /// Directory for persisted favorites; the platform data directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_base_url() -> String {
    TVMAZE_DEFAULT_SERVER.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: None,
            data_dir: None,
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from the default config location
    pub fn load() -> Result<Self> {
        let path = storage::config_dir()?.join(SETTINGS_FILE);
        Self::load_from(&path)
    }

    /// Load settings from a specific path, defaults if missing or empty
    pub fn load_from(path: &Path) -> Result<Self> {
        Ok(storage::load_from(path)?.unwrap_or_default())
    }

    /// Save settings to the default config location
    pub fn save(&self) -> Result<()> {
        let path = storage::config_dir()?.join(SETTINGS_FILE);
        self.save_to(&path)
    }

    /// Save settings to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        storage::save_to(path, self)
    }

    /// Request timeout, if configured
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Directory holding persisted favorites
    pub fn resolved_data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => storage::data_dir(),
        }
    }
}
