//! Hosted video page parser for prehraj.to
//!
//! Recovers the direct media URL and an optional subtitle URL from the
//! player configuration embedded in the page. The configuration is
//! hand-authored JavaScript, not strict JSON: the sources block is
//! matched with ordered regex patterns and the tracks block is parsed
//! with a lenient JSON5 reader (unquoted keys, trailing commas).
//!
//! The two extractions are independent and best-effort; a failure in one
//! never blocks the other, and neither ever returns an error.

use regex::Regex;
use serde::Deserialize;
use tracing::debug;

/// Result of extracting a hosted video page
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Extraction {
    /// Direct media URL from the player sources block
    pub media_url: Option<String>,

    /// Subtitle URL from the first entry of the player tracks block
    pub subtitle_url: Option<String>,
}

impl Extraction {
    /// True when a media URL was found (the minimum for a descriptor)
    pub fn has_media(&self) -> bool {
        self.media_url.is_some()
    }
}

/// Extracts media and subtitle URLs from a video page
pub fn extract_stream(html: &str) -> Extraction {
    Extraction {
        media_url: extract_media_url(html),
        subtitle_url: extract_subtitle_url(html),
    }
}

/// Finds the media URL inside the first player sources block
///
/// Within the block, `file:` is preferred over `src:`; first match wins.
fn extract_media_url(html: &str) -> Option<String> {
    let block = capture_script_block(html, r"(?s)var sources\s*=\s*\[(.*?);")?;

    // Ordered attribute matchers; `file:` has priority over `src:`
    let attribute_patterns = [r#"file:\s*"([^"]+)""#, r#"src:\s*"([^"]+)""#];

    for pattern in attribute_patterns {
        if let Ok(re) = Regex::new(pattern)
            && let Some(caps) = re.captures(&block)
            && let Some(url) = caps.get(1)
        {
            return Some(url.as_str().to_string());
        }
    }

    debug!("sources block present but no file/src attribute matched");
    None
}

/// One entry of the player tracks list; unknown fields are ignored
#[derive(Debug, Deserialize)]
struct TrackEntry {
    src: Option<String>,
}

/// Finds the subtitle URL inside the player tracks block
///
/// The block is parsed with JSON5 to tolerate the site's relaxed
/// notation. Only the first entry's `src` is taken; a missing field or a
/// parse failure yields `None`.
fn extract_subtitle_url(html: &str) -> Option<String> {
    let block = capture_script_block(html, r"(?s)var tracks\s*=\s*(.*?);")?;

    match json5::from_str::<Vec<TrackEntry>>(block.trim()) {
        Ok(tracks) => tracks.into_iter().next().and_then(|t| t.src),
        Err(e) => {
            debug!(error = %e, "tracks block did not parse");
            None
        }
    }
}

/// Captures the first occurrence of a script-embedded block
///
/// The capture runs up to the first `;` after the assignment, matching
/// how the site terminates its player configuration statements.
fn capture_script_block(html: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    let caps = re.captures(html)?;
    Some(caps.get(1)?.as_str().to_string())
}
