//! Trailer selection policy
//!
//! Picks which media links a detail view should present: official
//! trailers when the movie has any, otherwise trailers and teasers with
//! official entries first, capped at four.

use crate::models::Video;

/// Maximum number of entries a detail view presents.
pub const MAX_SELECTED: usize = 4;

const YOUTUBE: &str = "YouTube";
const TRAILER: &str = "Trailer";
const TEASER: &str = "Teaser";

/// Select the trailers to present for a movie
///
/// Only YouTube-hosted entries are considered. If any official trailer
/// exists, the selection is exactly the official trailers; otherwise it
/// falls back to trailers and teasers, stable-sorted official first and
/// trailer before teaser. The selection is capped at [`MAX_SELECTED`].
pub fn select_trailers(videos: &[Video]) -> Vec<Video> {
    let official_trailers: Vec<Video> = videos
        .iter()
        .filter(|v| v.site == YOUTUBE && v.video_type == TRAILER && v.official)
        .cloned()
        .collect();

    let mut selected = if official_trailers.is_empty() {
        let mut fallback: Vec<Video> = videos
            .iter()
            .filter(|v| {
                v.site == YOUTUBE && (v.video_type == TRAILER || v.video_type == TEASER)
            })
            .cloned()
            .collect();
        fallback.sort_by_key(|v| (!v.official, v.video_type != TRAILER));
        fallback
    } else {
        official_trailers
    };

    selected.truncate(MAX_SELECTED);
    selected
}
