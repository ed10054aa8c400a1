//! Favorites persistence
//!
//! Reads and writes the favorites collection under a single fixed key, as a
//! JSON array of show records.

use crate::config::storage::FAVORITES_KEY;
use crate::data::storage::{self, KeyValueStore};
use crate::data::types::{Show, ShowRecord};
use crate::error::Result;
use tracing::debug;

/// Persistence adapter for the favorites collection
pub struct FavoritesRepository<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> FavoritesRepository<S> {
    /// Repository using the default favorites key
    pub fn new(store: S) -> Self {
        Self::with_key(store, FAVORITES_KEY)
    }

    /// Repository using a custom key
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Load the persisted collection
    ///
    /// An absent key yields an empty collection.
    pub fn load(&self) -> Result<Vec<Show>> {
        let records: Vec<ShowRecord> = storage::load_json(&self.store, &self.key)?.unwrap_or_default();
        debug!(key = %self.key, count = records.len(), "loaded favorites");
        Ok(records.into_iter().map(Show::from).collect())
    }

    /// Replace the persisted collection with `shows`
    pub fn save(&mut self, shows: &[Show]) -> Result<()> {
        let records: Vec<ShowRecord> = shows.iter().cloned().map(ShowRecord::from).collect();
        storage::save_json(&mut self.store, &self.key, &records)?;
        debug!(key = %self.key, count = records.len(), "saved favorites");
        Ok(())
    }

    /// Storage key in use
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the repository, returning the store
    pub fn into_store(self) -> S {
        self.store
    }
}
