//! Application controller
//!
//! Owns the current result set and the favorites store, and drives the
//! provider, the persistence adapter and the render surface. Every command
//! takes `&mut self`, so a search finishes before the next command runs.

use crate::data::favorites::FavoritesStore;
use crate::data::persistence::FavoritesRepository;
use crate::data::storage::KeyValueStore;
use crate::data::types::{Show, ShowId};
use crate::error::Result;
use crate::providers::ShowProvider;
use crate::render::{self, CardAction, RenderSurface};

use super::state::AppCommand;

use tracing::{debug, info};

pub struct CineList<P, S, R> {
    provider: P,
    repository: FavoritesRepository<S>,
    surface: R,
    /// Most recent successful search, replaced wholesale
    results: Vec<Show>,
    favorites: FavoritesStore,
}

impl<P, S, R> CineList<P, S, R>
where
    P: ShowProvider,
    S: KeyValueStore,
    R: RenderSurface,
{
    /// Load persisted favorites and draw them
    pub fn start(provider: P, store: S, surface: R) -> Result<Self> {
        Self::with_repository(provider, FavoritesRepository::new(store), surface)
    }

    /// Same as `start`, with an explicitly configured repository
    pub fn with_repository(
        provider: P,
        repository: FavoritesRepository<S>,
        surface: R,
    ) -> Result<Self> {
        let favorites = FavoritesStore::from_shows(repository.load()?);
        info!(
            provider = provider.id(),
            favorites = favorites.len(),
            "started"
        );

        let mut app = Self {
            provider,
            repository,
            surface,
            results: Vec::new(),
            favorites,
        };
        app.render_favorites();
        Ok(app)
    }

    /// Search and redraw the results
    ///
    /// On failure the previous results and their display are kept.
    pub fn search(&mut self, term: &str) -> Result<&[Show]> {
        debug!(term, provider = self.provider.id(), "searching");
        let shows = self.provider.search(term)?;
        self.results = shows;
        render::render_results(&mut self.surface, &self.results);
        Ok(&self.results)
    }

    /// Add the show with `id` from the current results to favorites
    ///
    /// A duplicate leaves everything untouched, with no save and no redraw.
    pub fn add_favorite(&mut self, id: &ShowId) -> Result<()> {
        self.favorites.add(id, &self.results)?;
        self.flush_and_render()
    }

    /// Remove the show with `id` from favorites
    ///
    /// Always saves and redraws, even when nothing was removed.
    pub fn remove_favorite(&mut self, id: &ShowId) -> Result<usize> {
        let removed = self.favorites.remove(id);
        self.flush_and_render()?;
        Ok(removed)
    }

    /// Run the action bound to a card
    pub fn dispatch(&mut self, action: CardAction) -> Result<()> {
        self.handle_command(action.into())
    }

    /// Handle a single command
    pub fn handle_command(&mut self, cmd: AppCommand) -> Result<()> {
        match cmd {
            AppCommand::Search(term) => self.search(&term).map(|_| ()),
            AppCommand::AddFavorite(id) => self.add_favorite(&id),
            AppCommand::RemoveFavorite(id) => self.remove_favorite(&id).map(|_| ()),
        }
    }

    /// Current result set
    pub fn results(&self) -> &[Show] {
        &self.results
    }

    /// Favorites in insertion order
    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn repository(&self) -> &FavoritesRepository<S> {
        &self.repository
    }

    pub fn surface(&self) -> &R {
        &self.surface
    }

    /// Save the collection, then redraw it whether or not the save worked
    fn flush_and_render(&mut self) -> Result<()> {
        let saved = self.repository.save(self.favorites.as_slice());
        self.render_favorites();
        saved
    }

    fn render_favorites(&mut self) {
        render::render_favorites(&mut self.surface, self.favorites.as_slice());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::render::PLACEHOLDER_IMAGE;
    use crate::config::storage::FAVORITES_KEY;
    use crate::data::storage::MemoryStore;
    use crate::error::AppError;
    use crate::render::{CardBuffer, Region};
    use std::collections::HashMap;

    /// A mock provider answering from a fixed table
    struct MockProvider {
        answers: HashMap<String, Vec<Show>>,
    }

    impl MockProvider {
        fn new() -> Self {
            let mut answers = HashMap::new();
            answers.insert(
                "lost".to_string(),
                vec![
                    Show::new(123u64, "Lost").with_image("http://img/lost.jpg"),
                    Show::new(456u64, "Lost Girl"),
                ],
            );
            answers.insert("office".to_string(), vec![Show::new(526u64, "The Office")]);
            Self { answers }
        }
    }

    impl ShowProvider for MockProvider {
        fn name(&self) -> &'static str {
            "Mock Provider"
        }

        fn id(&self) -> &'static str {
            "mock"
        }

        fn search(&self, term: &str) -> Result<Vec<Show>> {
            match term {
                "fail" => Err(AppError::Status {
                    status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                    url: "http://mock/search/shows?q=fail".to_string(),
                }),
                _ => Ok(self.answers.get(term).cloned().unwrap_or_default()),
            }
        }
    }

    /// A store whose writes always fail
    #[derive(Default)]
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<()> {
            Err(AppError::Storage(format!("{key} is read-only")))
        }

        fn remove(&mut self, key: &str) -> Result<()> {
            Err(AppError::Storage(format!("{key} is read-only")))
        }
    }

    type TestApp = CineList<MockProvider, MemoryStore, CardBuffer>;

    fn app() -> TestApp {
        CineList::start(MockProvider::new(), MemoryStore::new(), CardBuffer::new()).unwrap()
    }

    fn persisted(app: &TestApp) -> Vec<Show> {
        app.repository().load().unwrap()
    }

    #[test]
    fn test_start_with_empty_store() {
        let app = app();
        assert!(app.favorites().is_empty());
        assert!(app.results().is_empty());
        assert_eq!(app.surface().redraws(Region::Favorites), 1);
    }

    #[test]
    fn test_start_renders_persisted_favorites() {
        let mut store = MemoryStore::new();
        store
            .set(FAVORITES_KEY, r#"[{"show":{"id":"7","name":"Seven"}}]"#)
            .unwrap();

        let app = CineList::start(MockProvider::new(), store, CardBuffer::new()).unwrap();
        let cards = app.surface().cards(Region::Favorites);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].title, "Seven");
        assert_eq!(cards[0].image_url, PLACEHOLDER_IMAGE);
        assert_eq!(cards[0].action, CardAction::Remove(ShowId::from(7u64)));
    }

    #[test]
    fn test_start_fails_on_corrupt_storage() {
        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, "{{{").unwrap();
        assert!(CineList::start(MockProvider::new(), store, CardBuffer::new()).is_err());
    }

    #[test]
    fn test_search_renders_results() {
        let mut app = app();
        let results = app.search("lost").unwrap();
        assert_eq!(results.len(), 2);

        let cards = app.surface().cards(Region::Results);
        assert_eq!(cards[0].title, "Lost");
        assert_eq!(cards[0].image_url, "http://img/lost.jpg");
        assert_eq!(cards[1].image_url, PLACEHOLDER_IMAGE);
        assert_eq!(cards[1].action, CardAction::Add(ShowId::from(456u64)));
    }

    #[test]
    fn test_search_replaces_results_wholesale() {
        let mut app = app();
        app.search("lost").unwrap();
        app.search("office").unwrap();
        assert_eq!(app.results().len(), 1);
        assert_eq!(app.surface().cards(Region::Results)[0].title, "The Office");
    }

    #[test]
    fn test_failed_search_keeps_previous_results() {
        let mut app = app();
        app.search("lost").unwrap();

        let err = app.search("fail").unwrap_err();
        assert!(err.is_fetch());
        assert_eq!(app.results().len(), 2);
        assert_eq!(app.surface().cards(Region::Results).len(), 2);
        assert_eq!(app.surface().redraws(Region::Results), 1);
    }

    #[test]
    fn test_lost_scenario() {
        let mut app = app();
        app.search("lost").unwrap();
        let lost = app.results().iter().find(|s| s.name == "Lost").unwrap().id.clone();

        app.add_favorite(&lost).unwrap();
        assert_eq!(app.favorites().len(), 1);

        let err = app.add_favorite(&ShowId::from("123")).unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(app.favorites().len(), 1);

        app.remove_favorite(&ShowId::from(123u64)).unwrap();
        assert!(app.favorites().is_empty());
        assert!(persisted(&app).is_empty());
    }

    #[test]
    fn test_add_saves_then_renders() {
        let mut app = app();
        app.search("lost").unwrap();
        app.add_favorite(&ShowId::from(456u64)).unwrap();

        let saved = persisted(&app);
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].name, "Lost Girl");

        let cards = app.surface().cards(Region::Favorites);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].action, CardAction::Remove(ShowId::from(456u64)));
    }

    #[test]
    fn test_duplicate_add_does_not_redraw() {
        let mut app = app();
        app.search("lost").unwrap();
        app.add_favorite(&ShowId::from(123u64)).unwrap();
        let redraws = app.surface().redraws(Region::Favorites);

        assert!(app.add_favorite(&ShowId::from(123u64)).is_err());
        assert_eq!(app.surface().redraws(Region::Favorites), redraws);
    }

    #[test]
    fn test_add_stale_id_is_rejected() {
        let mut app = app();
        app.search("lost").unwrap();
        app.search("office").unwrap();

        let err = app.add_favorite(&ShowId::from(123u64)).unwrap_err();
        assert!(matches!(err, AppError::NotInResults(_)));
        assert!(app.favorites().is_empty());
        assert!(app.repository().store().get(FAVORITES_KEY).unwrap().is_none());
    }

    #[test]
    fn test_remove_absent_still_saves_and_renders() {
        let mut app = app();
        let redraws = app.surface().redraws(Region::Favorites);

        assert_eq!(app.remove_favorite(&ShowId::from(1u64)).unwrap(), 0);
        assert_eq!(app.surface().redraws(Region::Favorites), redraws + 1);
        assert_eq!(
            app.repository().store().get(FAVORITES_KEY).unwrap(),
            Some("[]".to_string())
        );
    }

    #[test]
    fn test_dispatch_card_actions() {
        let mut app = app();
        app.search("office").unwrap();

        let add = app.surface().cards(Region::Results)[0].action.clone();
        app.dispatch(add).unwrap();
        assert_eq!(app.favorites().len(), 1);

        let remove = app.surface().cards(Region::Favorites)[0].action.clone();
        app.dispatch(remove).unwrap();
        assert!(app.favorites().is_empty());
        assert!(app.surface().cards(Region::Favorites).is_empty());
    }

    #[test]
    fn test_handle_command_search() {
        let mut app = app();
        app.handle_command(AppCommand::Search("lost".to_string())).unwrap();
        assert_eq!(app.results().len(), 2);
    }

    #[test]
    fn test_favorites_survive_restart() {
        let mut app = app();
        app.search("lost").unwrap();
        app.add_favorite(&ShowId::from(456u64)).unwrap();
        app.add_favorite(&ShowId::from(123u64)).unwrap();

        let CineList { repository, .. } = app;
        let restarted =
            CineList::start(MockProvider::new(), repository.into_store(), CardBuffer::new())
                .unwrap();
        let names: Vec<_> = restarted.favorites().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Lost Girl", "Lost"]);
    }

    #[test]
    fn test_failed_save_still_renders() {
        let mut app =
            CineList::start(MockProvider::new(), ReadOnlyStore::default(), CardBuffer::new())
                .unwrap();
        app.search("lost").unwrap();

        let err = app.add_favorite(&ShowId::from(123u64)).unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
        assert_eq!(app.favorites().len(), 1);
        assert_eq!(app.surface().cards(Region::Favorites).len(), 1);
    }
}
