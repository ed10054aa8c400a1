//! Data persistence
//!
//! Handles shows, favorites, settings and key-value storage.

pub mod favorites;
pub mod persistence;
pub mod settings;
pub mod storage;
pub mod types;

// Re-export common types
pub use favorites::FavoritesStore;
pub use persistence::FavoritesRepository;
pub use settings::Settings;
pub use storage::{config_dir, data_dir, FileStore, KeyValueStore, MemoryStore};
pub use types::{Show, ShowId, ShowImage, ShowRecord};
