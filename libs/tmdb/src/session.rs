//! Client-side search session
//!
//! Accumulates paginated search results and guards against stale
//! in-flight responses. Requests are not cancelled when a new query
//! supersedes them; instead each request carries a generation token and
//! a response is applied only while its generation is still current.

use crate::models::{Movie, MoviePage};

/// A request issued by a session, tagged with its generation
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
    generation: u64,
}

/// Pagination state for one search box
#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    items: Vec<Movie>,
    page: u32,
    total_pages: u32,
    generation: u64,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new query, superseding any in-flight request
    ///
    /// The returned request targets page 1; applying it replaces the
    /// current item list. Responses from earlier generations are
    /// discarded by [`SearchSession::apply`].
    pub fn begin(&mut self, query: &str) -> SearchRequest {
        self.generation += 1;
        self.query = query.to_string();
        SearchRequest {
            query: query.to_string(),
            page: 1,
            generation: self.generation,
        }
    }

    /// Request the next page of the current query
    ///
    /// Returns `None` once the last known page has been reached, so
    /// pagination past the provider's bound cannot be issued.
    pub fn next_page(&self) -> Option<SearchRequest> {
        if !self.has_more() {
            return None;
        }
        Some(SearchRequest {
            query: self.query.clone(),
            page: self.page + 1,
            generation: self.generation,
        })
    }

    /// Apply a response for a previously issued request
    ///
    /// Returns false and leaves the session untouched when the request's
    /// generation is no longer current. Page 1 replaces the item list;
    /// later pages append in provider order, skipping ids already
    /// present.
    pub fn apply(&mut self, request: &SearchRequest, page: MoviePage) -> bool {
        if request.generation != self.generation {
            return false;
        }

        if request.page == 1 {
            self.items = page.results;
        } else {
            for movie in page.results {
                if !self.items.iter().any(|existing| existing.id == movie.id) {
                    self.items.push(movie);
                }
            }
        }
        self.page = request.page;
        self.total_pages = page.total_pages;
        true
    }

    /// Whether more pages remain for the current query
    pub fn has_more(&self) -> bool {
        self.page > 0 && self.page < self.total_pages
    }

    pub fn items(&self) -> &[Movie] {
        &self.items
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }
}
