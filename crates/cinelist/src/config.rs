//! Configuration constants for CineList

/// Application metadata
pub mod app {
    /// Application name (used for config and data directories)
    pub const NAME: &str = "cinelist";
}

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("CineList/", env!("CARGO_PKG_VERSION"));
}

/// Provider-related configuration
pub mod providers {
    /// Default TVMaze API server
    pub const TVMAZE_DEFAULT_SERVER: &str = "https://api.tvmaze.com";

    /// Show search endpoint path
    pub const TVMAZE_SEARCH_PATH: &str = "/search/shows";
}

/// Persistence-related configuration
pub mod storage {
    /// Key under which the favorites collection is stored
    pub const FAVORITES_KEY: &str = "cine-favoritos";

    /// Settings file name inside the config directory
    pub const SETTINGS_FILE: &str = "settings.json";
}

/// Rendering-related configuration
pub mod render {
    /// Image shown for shows that have no medium-sized image
    pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/210x295?text=Sem+Imagem";
}
