//! API service routes

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use crate::{
    error::ApiError,
    models::{MovieFullResponse, PageParams, SearchParams, VideoParams},
    state::AppState,
};

/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/search", get(search_movies))
        .route("/movies/popular", get(popular_movies))
        .route("/movies/:id", get(movie_detail))
        .route("/movies/:id/videos", get(movie_videos))
        .route("/movies/:id/full", get(movie_full))
        .with_state(state)
}

/// Page numbers are 1-based; a defaulted page is page 1
fn validated_page(page: Option<u32>) -> Result<u32, ApiError> {
    match page.unwrap_or(1) {
        0 => Err(ApiError::BadRequest("Page must be 1 or greater".to_string())),
        page => Ok(page),
    }
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "api-service"
    }))
}

/// Search for movies by free-text query
pub async fn search_movies(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = params
        .query
        .as_deref()
        .ok_or(ApiError::MissingParameter("query"))?;
    let page = validated_page(params.page)?;

    let results = state.tmdb.search_movies(query, page).await.map_err(|e| {
        tracing::error!("Failed to search movies: {}", e);
        e
    })?;

    Ok(Json(results))
}

/// List currently popular movies
pub async fn popular_movies(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, ApiError> {
    let page = validated_page(params.page)?;

    let results = state.tmdb.popular_movies(page).await.map_err(|e| {
        tracing::error!("Failed to fetch popular movies: {}", e);
        e
    })?;

    Ok(Json(results))
}

/// Get the detail record for a movie
pub async fn movie_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let detail = state.tmdb.movie_detail(id).await.map_err(|e| {
        tracing::error!("Failed to fetch movie {}: {}", id, e);
        e
    })?;

    Ok(Json(detail))
}

/// List the media links for a movie
pub async fn movie_videos(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<VideoParams>,
) -> Result<impl IntoResponse, ApiError> {
    let videos = state.tmdb.movie_videos(id).await.map_err(|e| {
        tracing::error!("Failed to fetch videos for movie {}: {}", id, e);
        e
    })?;

    let videos = if params.selected.unwrap_or(false) {
        tmdb::select_trailers(&videos)
    } else {
        videos
    };

    Ok(Json(videos))
}

/// Get the detail record together with its selected trailers
///
/// The two provider requests run concurrently; if either fails the
/// whole response is a failure, never a partial record.
pub async fn movie_full(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let (detail, videos) = state.tmdb.movie_with_videos(id).await.map_err(|e| {
        tracing::error!("Failed to fetch movie {} with videos: {}", id, e);
        e
    })?;

    Ok(Json(MovieFullResponse {
        detail,
        trailers: tmdb::select_trailers(&videos),
    }))
}
