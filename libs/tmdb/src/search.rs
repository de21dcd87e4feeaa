//! Movie search and popular listings

use crate::Result;
use crate::client::TmdbClient;
use crate::models::MoviePage;

impl TmdbClient {
    /// Search for movies by free-text query
    ///
    /// GET /search/movie
    ///
    /// An empty or whitespace-only query yields an empty page without
    /// touching the network.
    pub async fn search_movies(&self, query: &str, page: u32) -> Result<MoviePage> {
        if query.trim().is_empty() {
            return Ok(MoviePage::empty());
        }

        let url = self.url(
            "/search/movie",
            &[
                ("query", query),
                ("page", &page.to_string()),
                ("include_adult", "false"),
            ],
        )?;
        self.transport().fetch_json(&url).await
    }

    /// List currently popular movies
    ///
    /// GET /movie/popular
    pub async fn popular_movies(&self, page: u32) -> Result<MoviePage> {
        let url = self.url("/movie/popular", &[("page", &page.to_string())])?;
        self.transport().fetch_json(&url).await
    }
}
