//! Prehraj.to Stream Resolution Library
//!
//! Turns a hosted video page reference or a free-text title query into a
//! playable media URL (and optional subtitle URL) from prehraj.to.
//!
//! # Overview
//!
//! The crate is built from five cooperating pieces:
//! - An HTTP fetcher with a fixed timeout, browser identification, and a
//!   per-resolution cookie jar
//! - A session manager that logs in and probes for premium status,
//!   degrading to anonymous mode on any ambiguity
//! - A link extractor that survives the site's hand-authored player
//!   configuration (multiple script patterns, relaxed notation)
//! - A paginated search crawler with an explicit stop-state machine
//! - A stream resolver orchestrating the above, including the
//!   premium-only download upgrade
//!
//! # Example
//!
//! ```no_run
//! use prehrajto_stream::{Credentials, StreamResolver, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let resolver = StreamResolver::new();
//!     let credentials = Credentials::new("user@example.com", "secret");
//!
//!     // Search listings
//!     let results = resolver.search("doctor who", &credentials, 10).await?;
//!     for result in &results {
//!         println!("{}: {}", result.title, result.page_url);
//!     }
//!
//!     // Resolve the best match for a query into a playable stream
//!     if let Some(stream) = resolver
//!         .resolve_by_query("doctor who s07e05", &credentials)
//!         .await?
//!     {
//!         println!("Media URL: {}", stream.media_url);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Premium accounts
//!
//! With valid premium credentials the resolver follows the site's
//! `?do=download` redirect and returns the direct file URL instead of the
//! player URL. Without credentials (or when premium status cannot be
//! confirmed) everything still works anonymously; the upgrade is simply
//! skipped. Resolved URLs carry expiring tokens and must not be cached
//! long-term.

mod client;
mod error;
pub mod parser;
mod resolver;
mod search;
mod session;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, FetchOutcome, HttpClient, DEFAULT_BASE_URL};

// Re-export error types
pub use error::{Result, StreamError};

// Re-export parser API
pub use parser::{extract_stream, parse_listing, Extraction, ListingPage};

// Re-export crawler API
pub use search::{crawl, evaluate_page, CrawlStep, StopReason};

// Re-export session API
pub use session::{establish, SessionMode};

// Re-export main resolver API
pub use resolver::StreamResolver;

// Re-export data types
pub use types::{
    Credentials, Query, SearchResult, StreamDescriptor, SubtitleTrack, STREAM_NAME,
    SUBTITLE_LANG,
};
