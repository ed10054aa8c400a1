//! Application layer
//!
//! The controller owning the result set and favorites, and the commands it
//! accepts.

pub mod controller;
pub mod state;

pub use controller::CineList;
pub use state::AppCommand;
