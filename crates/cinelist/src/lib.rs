//! CineList
//!
//! Show search against the TVMaze directory, with a deduplicated favorites
//! list persisted in a key-value store.
//!
//! ## Quick start
//!
//! ```no_run
//! use cinelist::app::CineList;
//! use cinelist::data::MemoryStore;
//! use cinelist::providers::TvMazeProvider;
//! use cinelist::render::CardBuffer;
//!
//! let provider = TvMazeProvider::new().unwrap();
//! let mut app = CineList::start(provider, MemoryStore::new(), CardBuffer::new()).unwrap();
//! app.search("lost").unwrap();
//! ```

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod network;
pub mod providers;
pub mod render;
