//! Typed models for provider payloads
//!
//! Responses are validated into these shapes at the transport boundary;
//! a payload that does not fit is a parse failure, never a silently
//! missing field.

use serde::{Deserialize, Serialize};

/// Image root for list thumbnails (posters).
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Image root for detail backdrops.
pub const BACKDROP_BASE_URL: &str = "https://image.tmdb.org/t/p/w1280";

/// A movie as returned by the search and popular listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    /// Average rating on a 0-10 scale
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
}

impl Movie {
    /// Thumbnail-sized poster URL, if the movie has a poster
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{}{}", POSTER_BASE_URL, path))
    }

    /// Backdrop-sized image URL, if the movie has a backdrop
    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .map(|path| format!("{}{}", BACKDROP_BASE_URL, path))
    }

    /// Rating rendered with one decimal, or "N/A" when unrated
    pub fn rating_display(&self) -> String {
        if self.vote_count == 0 && self.vote_average == 0.0 {
            "N/A".to_string()
        } else {
            format!("{:.1}", self.vote_average)
        }
    }

    /// Release year, or "TBA" when the date is unknown
    pub fn release_year(&self) -> String {
        // Provider dates are "YYYY-MM-DD", but the string is untrusted:
        // get() refuses short or non-ASCII-prefixed values instead of
        // panicking on a char boundary.
        self.release_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .map(str::to_string)
            .unwrap_or_else(|| "TBA".to_string())
    }
}

/// One page of a paginated movie listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoviePage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

impl MoviePage {
    /// An empty first page, used when a query is blank
    pub fn empty() -> Self {
        Self {
            page: 1,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// A movie genre
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// Full movie detail record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: i64,
    pub tagline: Option<String>,
    /// Runtime in minutes, absent while unannounced
    pub runtime: Option<u32>,
    /// Budget in US dollars, 0 means unknown
    #[serde(default)]
    pub budget: u64,
    /// Revenue in US dollars, 0 means unknown
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl MovieDetail {
    /// Thumbnail-sized poster URL, if the movie has a poster
    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_deref()
            .map(|path| format!("{}{}", POSTER_BASE_URL, path))
    }

    /// Backdrop-sized image URL, if the movie has a backdrop
    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_deref()
            .map(|path| format!("{}{}", BACKDROP_BASE_URL, path))
    }

    /// Runtime rendered as "2h 16m", or empty when unknown
    pub fn runtime_display(&self) -> String {
        match self.runtime {
            Some(minutes) if minutes > 0 => {
                format!("{}h {}m", minutes / 60, minutes % 60)
            }
            _ => String::new(),
        }
    }

    /// Budget rendered as whole US dollars, or "N/A" when unknown
    pub fn budget_display(&self) -> String {
        format_usd(self.budget)
    }

    /// Revenue rendered as whole US dollars, or "N/A" when unknown
    pub fn revenue_display(&self) -> String {
        format_usd(self.revenue)
    }
}

fn format_usd(amount: u64) -> String {
    if amount == 0 {
        return "N/A".to_string();
    }

    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${}", grouped)
}

/// A media link associated with a movie (trailer, teaser, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: String,
    /// Hosting platform, e.g. "YouTube"
    pub site: String,
    /// Entry type, e.g. "Trailer" or "Teaser"
    #[serde(rename = "type")]
    pub video_type: String,
    #[serde(default)]
    pub official: bool,
}

impl Video {
    /// Watch URL for YouTube-hosted entries
    pub fn watch_url(&self) -> Option<String> {
        if self.site == "YouTube" {
            Some(format!("https://www.youtube.com/watch?v={}", self.key))
        } else {
            None
        }
    }
}

/// Envelope around the video listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoList {
    pub id: i64,
    pub results: Vec<Video>,
}
