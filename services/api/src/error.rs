//! Custom error types for the API service

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tmdb::TmdbError;

/// Custom error type for the API service
#[derive(Error, Debug)]
pub enum ApiError {
    /// A required query parameter is absent
    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    /// Bad request with message
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Provider client error
    #[error("Provider error: {0}")]
    Provider(#[from] TmdbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::MissingParameter(name) => (
                StatusCode::BAD_REQUEST,
                format!("{} parameter is required", capitalize(name)),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Provider(TmdbError::Configuration { .. }) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TMDB API key not configured".to_string(),
            ),
            ApiError::Provider(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch from the movie provider".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
