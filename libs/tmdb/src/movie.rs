//! Movie detail and video lookups

use crate::Result;
use crate::client::TmdbClient;
use crate::models::{MovieDetail, Video, VideoList};

impl TmdbClient {
    /// Get the full detail record for a movie
    ///
    /// GET /movie/{movie_id}
    pub async fn movie_detail(&self, movie_id: i64) -> Result<MovieDetail> {
        let url = self.url(&format!("/movie/{}", movie_id), &[])?;
        self.transport().fetch_json(&url).await
    }

    /// List the media links (trailers, teasers, ...) for a movie
    ///
    /// GET /movie/{movie_id}/videos
    pub async fn movie_videos(&self, movie_id: i64) -> Result<Vec<Video>> {
        let url = self.url(&format!("/movie/{}/videos", movie_id), &[])?;
        let list: VideoList = self.transport().fetch_json(&url).await?;
        Ok(list.results)
    }

    /// Fetch the detail record and its media links together
    ///
    /// The two requests run concurrently and are joined; if either fails
    /// the combined fetch fails, so a partially loaded record is never
    /// surfaced.
    pub async fn movie_with_videos(&self, movie_id: i64) -> Result<(MovieDetail, Vec<Video>)> {
        tokio::try_join!(self.movie_detail(movie_id), self.movie_videos(movie_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TmdbError;
    use crate::transport::mock::{RoutedStrategy, Script};
    use crate::transport::{DeliveryStrategy, FallbackTransport};
    use common::config::TmdbConfig;

    const DETAIL_BODY: &str = r#"{
        "id": 603,
        "title": "The Matrix",
        "overview": "A hacker learns the truth.",
        "poster_path": "/matrix.jpg",
        "backdrop_path": "/matrix-backdrop.jpg",
        "release_date": "1999-03-31",
        "vote_average": 8.2,
        "vote_count": 26000,
        "tagline": "The fight for the future begins.",
        "runtime": 136,
        "budget": 63000000,
        "revenue": 463517383,
        "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}]
    }"#;

    const VIDEOS_BODY: &str = r#"{
        "id": 603,
        "results": [
            {"id": "v1", "key": "m8e-FF8MsqU", "name": "Official Trailer", "site": "YouTube", "type": "Trailer", "official": true},
            {"id": "v2", "key": "abc123", "name": "Teaser", "site": "YouTube", "type": "Teaser", "official": false}
        ]
    }"#;

    fn client_with(strategy: RoutedStrategy) -> TmdbClient {
        let transport =
            FallbackTransport::new(vec![Box::new(strategy) as Box<dyn DeliveryStrategy>]);
        TmdbClient::with_transport(TmdbConfig::new("test-key"), transport)
    }

    #[tokio::test]
    async fn test_detail_and_videos_load_together() {
        let client = client_with(RoutedStrategy::new(vec![
            ("/videos", Script::Respond(200, VIDEOS_BODY)),
            ("/movie/603", Script::Respond(200, DETAIL_BODY)),
        ]));

        let (detail, videos) = client
            .movie_with_videos(603)
            .await
            .expect("both requests should succeed");

        assert_eq!(detail.title, "The Matrix");
        assert_eq!(detail.runtime, Some(136));
        assert_eq!(detail.genres.len(), 2);
        assert_eq!(videos.len(), 2);
        assert!(videos[0].official);
    }

    #[tokio::test]
    async fn test_failed_videos_fail_the_combined_fetch() {
        // The detail request succeeds; the combined result must still be
        // a failure, never a partial record.
        let client = client_with(RoutedStrategy::new(vec![
            ("/videos", Script::NetworkError),
            ("/movie/603", Script::Respond(200, DETAIL_BODY)),
        ]));

        let result = client.movie_with_videos(603).await;
        assert!(matches!(result, Err(TmdbError::Exhausted { .. })));
    }

    #[tokio::test]
    async fn test_failed_detail_fails_the_combined_fetch() {
        let client = client_with(RoutedStrategy::new(vec![
            ("/videos", Script::Respond(200, VIDEOS_BODY)),
            ("/movie/603", Script::Respond(404, r#"{"status_message":"not found"}"#)),
        ]));

        let result = client.movie_with_videos(603).await;
        assert!(matches!(result, Err(TmdbError::Exhausted { .. })));
    }

    #[tokio::test]
    async fn test_videos_unwrap_the_results_envelope() {
        let client = client_with(RoutedStrategy::new(vec![(
            "/videos",
            Script::Respond(200, VIDEOS_BODY),
        )]));

        let videos = client
            .movie_videos(603)
            .await
            .expect("videos should load");

        assert_eq!(videos.len(), 2);
        assert_eq!(videos[1].video_type, "Teaser");
    }
}
