//! Favorites management
//!
//! In-memory management of favorite shows. Ids are compared in their
//! canonical form, so a numeric id and its text form are the same favorite.

use crate::data::types::{Show, ShowId};
use crate::error::{AppError, Result};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Ordered, deduplicated favorites collection
///
/// Insertion order is kept for display. Entries only ever come from a
/// result set (or from persisted state that was built the same way).
#[derive(Debug, Clone, Default)]
pub struct FavoritesStore {
    favorites: Vec<Show>,
}

impl FavoritesStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store from persisted shows
    ///
    /// Later entries whose id repeats an earlier one are dropped.
    pub fn from_shows(shows: Vec<Show>) -> Self {
        let mut seen = HashSet::new();
        let mut favorites = Vec::with_capacity(shows.len());
        for show in shows {
            if seen.insert(show.id.clone()) {
                favorites.push(show);
            } else {
                warn!(id = %show.id, "dropping duplicate favorite from storage");
            }
        }
        Self { favorites }
    }

    /// Add the show with `id` from the current result set
    ///
    /// Fails with `DuplicateFavorite` if the id is already a favorite and
    /// with `NotInResults` if the result set has no such show. The
    /// collection is left untouched on failure.
    pub fn add(&mut self, id: &ShowId, results: &[Show]) -> Result<&Show> {
        if self.contains(id) {
            return Err(AppError::DuplicateFavorite(id.clone()));
        }

        let show = results
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| AppError::NotInResults(id.clone()))?;

        debug!(id = %id, name = %show.name, "adding favorite");
        self.favorites.push(show.clone());
        Ok(&self.favorites[self.favorites.len() - 1])
    }

    /// Remove any favorite with `id`
    ///
    /// Returns how many entries were removed; an absent id removes nothing.
    pub fn remove(&mut self, id: &ShowId) -> usize {
        let before = self.favorites.len();
        self.favorites.retain(|s| &s.id != id);
        let removed = before - self.favorites.len();
        debug!(id = %id, removed, "removing favorite");
        removed
    }

    /// Check if `id` is a favorite
    pub fn contains(&self, id: &ShowId) -> bool {
        self.favorites.iter().any(|s| &s.id == id)
    }

    /// Get a favorite by id
    pub fn get(&self, id: &ShowId) -> Option<&Show> {
        self.favorites.iter().find(|s| &s.id == id)
    }

    /// Favorites in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Show> {
        self.favorites.iter()
    }

    pub fn as_slice(&self) -> &[Show] {
        &self.favorites
    }

    /// Get number of favorites
    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }
}
