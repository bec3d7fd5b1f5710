//! Core data types for the prehraj.to stream resolver
//!
//! Contains the value types used throughout the library. All public types
//! implement Serialize and Deserialize for Tauri compatibility and are
//! immutable once built.

use serde::{Deserialize, Serialize};

/// Fixed language tag applied to every subtitle track
pub const SUBTITLE_LANG: &str = "cze";

/// Descriptor name used for every resolved stream
pub const STREAM_NAME: &str = "Prehraj.to";

/// Login credentials for a premium prehraj.to account
///
/// Supplied per resolution call; never stored in shared state. Empty
/// email or password means the resolution runs anonymously.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// True when either field is empty — forces anonymous mode
    pub fn is_empty(&self) -> bool {
        self.email.trim().is_empty() || self.password.trim().is_empty()
    }
}

/// One record harvested from a search listing page
///
/// Unique by `page_url` within a single crawl. The `title` field is the
/// composed display title `"<name> (<size> - <duration>)"`; the raw
/// labels are kept alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Composed display title (e.g., "Example Movie (1.2 GB - 01:55:00)")
    pub title: String,

    /// File size as shown on the listing (e.g., "1.2 GB")
    pub size_label: String,

    /// Duration as shown on the listing (e.g., "01:55:00")
    pub duration_label: String,

    /// Absolute URL of the hosted video page
    pub page_url: String,
}

/// A subtitle track attached to a resolved stream
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleTrack {
    /// Absolute URL of the subtitle file
    pub url: String,

    /// Language tag, fixed to [`SUBTITLE_LANG`]
    pub lang: String,
}

impl SubtitleTrack {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            lang: SUBTITLE_LANG.to_string(),
        }
    }
}

/// Terminal output of a successful resolution
///
/// `media_url` is never empty: an extraction that finds no media URL
/// produces no descriptor at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamDescriptor {
    /// Source name ([`STREAM_NAME`])
    pub name: String,

    /// Display title; contains the original query text for query
    /// resolutions
    pub title: String,

    /// Direct playable media URL
    pub media_url: String,

    /// Optional subtitle track
    pub subtitle: Option<SubtitleTrack>,
}

/// Input to a resolution: either a known video page or a text query
///
/// The two paths share the fetch/extract machinery and diverge only at
/// input selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Resolve a known hosted video page directly
    DirectPage(String),

    /// Search first, then resolve the best match
    Text {
        query: String,
        /// Maximum results to harvest before picking the first (>= 1)
        limit: usize,
    },
}
