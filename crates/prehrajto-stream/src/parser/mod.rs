//! HTML parsers for prehraj.to
//!
//! Contains modules for parsing the two page types the resolver touches:
//! search listing pages and hosted video pages.

pub mod listing;
pub mod stream_page;

pub use listing::{parse_listing, ListingPage};
pub use stream_page::{extract_stream, Extraction};
