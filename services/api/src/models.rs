//! API models for request and response payloads

use serde::{Deserialize, Serialize};
use tmdb::{MovieDetail, Video};

/// Query parameters for movie search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Free-text query; required, enforced in the handler so the error
    /// is a JSON body rather than an extractor rejection
    pub query: Option<String>,
    /// Page number (1-based), defaults to 1
    pub page: Option<u32>,
}

/// Query parameters for paginated listings
#[derive(Debug, Clone, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
}

/// Query parameters for the video listing
#[derive(Debug, Clone, Deserialize)]
pub struct VideoParams {
    /// When true, apply the trailer selection policy instead of
    /// returning the full listing
    pub selected: Option<bool>,
}

/// Combined detail response: the record plus its selected trailers
#[derive(Debug, Clone, Serialize)]
pub struct MovieFullResponse {
    pub detail: MovieDetail,
    pub trailers: Vec<Video>,
}
