//! In-memory render surface
//!
//! Keeps the current cards of each region so a front-end can draw them.

use super::{Card, Region, RenderSurface};

/// Render surface that buffers cards per region
#[derive(Debug, Clone, Default)]
pub struct CardBuffer {
    results: Vec<Card>,
    favorites: Vec<Card>,
    /// Number of times each region was cleared (results, favorites)
    redraws: (usize, usize),
}

impl CardBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cards currently shown in `region`
    pub fn cards(&self, region: Region) -> &[Card] {
        match region {
            Region::Results => &self.results,
            Region::Favorites => &self.favorites,
        }
    }

    /// How many times `region` has been redrawn
    pub fn redraws(&self, region: Region) -> usize {
        match region {
            Region::Results => self.redraws.0,
            Region::Favorites => self.redraws.1,
        }
    }

    fn region_mut(&mut self, region: Region) -> &mut Vec<Card> {
        match region {
            Region::Results => &mut self.results,
            Region::Favorites => &mut self.favorites,
        }
    }
}

impl RenderSurface for CardBuffer {
    fn clear(&mut self, region: Region) {
        match region {
            Region::Results => self.redraws.0 += 1,
            Region::Favorites => self.redraws.1 += 1,
        }
        self.region_mut(region).clear();
    }

    fn append_card(&mut self, region: Region, card: Card) {
        self.region_mut(region).push(card);
    }
}
