//! Error types for the prehraj.to stream resolver
//!
//! Provides a small error taxonomy with human-readable messages
//! and Tauri-compatible serialization.
//!
//! Transport and parse failures inside a resolution are caught at the
//! point of occurrence and converted to "no value" results; the variants
//! here surface only where the caller's input (or the HTTP client build)
//! is at fault.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all resolver operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum StreamError {
    /// HTTP transport failed (timeout, connection error, bad status)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse page content
    #[error("Failed to parse page: {0}")]
    Parse(String),

    /// No result or media URL could be located
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed caller input (empty query, zero limit, bad URL)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Serialize for StreamError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for resolver operations
pub type Result<T> = std::result::Result<T, StreamError>;
