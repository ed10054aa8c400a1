//! Render surface
//!
//! Projects the result set and the favorites collection into display cards.
//! Every projection clears its region and redraws it in full.

pub mod buffer;

pub use buffer::CardBuffer;

use crate::config::render::PLACEHOLDER_IMAGE;
use crate::data::types::{Show, ShowId};

/// A display region the projections write into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Results,
    Favorites,
}

/// The single action a card exposes, bound to its show's id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardAction {
    /// Add the show to favorites
    Add(ShowId),
    /// Remove the show from favorites
    Remove(ShowId),
}

impl CardAction {
    /// Id the action applies to
    pub fn id(&self) -> &ShowId {
        match self {
            CardAction::Add(id) | CardAction::Remove(id) => id,
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            CardAction::Add(_) => "Add to favorites",
            CardAction::Remove(_) => "Remove",
        }
    }
}

/// One visual unit: image, title and an action button
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub image_url: String,
    pub title: String,
    /// Premiere date, language and genres, empty when none are known
    pub details: String,
    /// Show page on the provider's site
    pub link: Option<String>,
    pub action: CardAction,
}

/// A surface with regions that can be cleared and appended to
pub trait RenderSurface {
    /// Remove every card from `region`
    fn clear(&mut self, region: Region);

    /// Append one card at the end of `region`
    fn append_card(&mut self, region: Region, card: Card);
}

impl<R: RenderSurface + ?Sized> RenderSurface for Box<R> {
    fn clear(&mut self, region: Region) {
        (**self).clear(region)
    }

    fn append_card(&mut self, region: Region, card: Card) {
        (**self).append_card(region, card)
    }
}

/// Image to display for `show`, falling back to the placeholder
pub fn image_or_placeholder(show: &Show) -> &str {
    show.image_url().unwrap_or(PLACEHOLDER_IMAGE)
}

/// One-line summary of a show's metadata, e.g. `2004-09-22 | English | Drama, Adventure`
pub fn show_details(show: &Show) -> String {
    let genres = show.genres.join(", ");
    [show.premiered.as_deref(), show.language.as_deref(), Some(genres.as_str())]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Redraw the results region, one "add" card per show
pub fn render_results(surface: &mut impl RenderSurface, shows: &[Show]) {
    render_region(surface, Region::Results, shows, |s| CardAction::Add(s.id.clone()));
}

/// Redraw the favorites region, one "remove" card per show
pub fn render_favorites(surface: &mut impl RenderSurface, shows: &[Show]) {
    render_region(surface, Region::Favorites, shows, |s| CardAction::Remove(s.id.clone()));
}

fn render_region(
    surface: &mut impl RenderSurface,
    region: Region,
    shows: &[Show],
    action: impl Fn(&Show) -> CardAction,
) {
    surface.clear(region);
    for show in shows {
        surface.append_card(
            region,
            Card {
                image_url: image_or_placeholder(show).to_string(),
                title: show.name.clone(),
                details: show_details(show),
                link: show.url.clone(),
                action: action(show),
            },
        );
    }
}
