//! Show provider trait
//!
//! Defines the interface a show search directory must implement.

use crate::data::types::Show;
use crate::error::Result;

/// A source of show listings
pub trait ShowProvider {
    /// Display name for the provider (e.g., "TVMaze")
    fn name(&self) -> &'static str;

    /// Machine-readable identifier (e.g., "tvmaze")
    fn id(&self) -> &'static str;

    /// Search shows by free text
    ///
    /// The term is sent as given, without trimming. Results keep the
    /// provider's order.
    fn search(&self, term: &str) -> Result<Vec<Show>>;
}

impl<P: ShowProvider + ?Sized> ShowProvider for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn id(&self) -> &'static str {
        (**self).id()
    }

    fn search(&self, term: &str) -> Result<Vec<Show>> {
        (**self).search(term)
    }
}
