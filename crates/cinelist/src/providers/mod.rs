//! Show directory providers
//!
//! Providers for searching shows (TVMaze).

pub mod traits;
pub mod tvmaze;

// Re-exports
pub use traits::ShowProvider;
pub use tvmaze::TvMazeProvider;
