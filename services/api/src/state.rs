//! Application state shared across handlers

use std::sync::Arc;

use tmdb::TmdbClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub tmdb: Arc<TmdbClient>,
}

impl AppState {
    pub fn new(tmdb: TmdbClient) -> Self {
        Self {
            tmdb: Arc::new(tmdb),
        }
    }
}
