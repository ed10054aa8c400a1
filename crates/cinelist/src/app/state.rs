//! Application commands
//!
//! `AppCommand` is the unified command type sent by any front-end, whether
//! typed by the user or produced by a card's action button.

use crate::data::types::ShowId;
use crate::render::CardAction;

/// Commands sent by a front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    /// Run a search and replace the current result set
    Search(String),
    /// Add a show from the current result set to favorites
    AddFavorite(ShowId),
    /// Remove a show from favorites
    RemoveFavorite(ShowId),
}

impl From<CardAction> for AppCommand {
    fn from(action: CardAction) -> Self {
        match action {
            CardAction::Add(id) => AppCommand::AddFavorite(id),
            CardAction::Remove(id) => AppCommand::RemoveFavorite(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_action_maps_to_command() {
        let id = ShowId::from(5u64);
        assert_eq!(
            AppCommand::from(CardAction::Add(id.clone())),
            AppCommand::AddFavorite(id.clone())
        );
        assert_eq!(
            AppCommand::from(CardAction::Remove(id.clone())),
            AppCommand::RemoveFavorite(id)
        );
    }
}
