//! Provider client for the CineScope application
//!
//! This crate talks to a TMDB-compatible movie metadata provider. It
//! provides movie search with pagination, detail and trailer lookups, and
//! a fallback transport that retries a request through an ordered list of
//! relay endpoints when the provider is unreachable directly.

pub mod client;
pub mod error;
pub mod models;
pub mod session;
pub mod transport;
pub mod videos;

mod movie;
mod search;

pub use client::TmdbClient;
pub use error::TmdbError;
pub use models::{Genre, Movie, MovieDetail, MoviePage, Video};
pub use session::{SearchRequest, SearchSession};
pub use transport::{Delivered, DeliveryStrategy, FallbackTransport};
pub use videos::select_trailers;

/// Type alias for Result with TmdbError
pub type Result<T> = std::result::Result<T, TmdbError>;
