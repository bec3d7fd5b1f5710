//! Stream resolver for prehraj.to
//!
//! Orchestrates session establishment, search crawling, page extraction,
//! and the elevated download upgrade to turn either a known video page or
//! a free-text query into a playable stream descriptor.
//!
//! Credentials are passed into every call and each resolution owns its
//! HTTP client, so concurrent resolutions with different configurations
//! never share state. Transport and parse failures inside a resolution
//! yield `Ok(None)`; only malformed caller input is a hard error.

use tracing::{debug, warn};

use crate::client::{ClientConfig, FetchOutcome, HttpClient};
use crate::error::{Result, StreamError};
use crate::parser::extract_stream;
use crate::search;
use crate::session::{self, SessionMode};
use crate::types::{
    Credentials, Query, SearchResult, StreamDescriptor, SubtitleTrack, STREAM_NAME,
};
use crate::url::build_download_url;

/// High-level resolver API
///
/// Holds only immutable configuration; every resolution builds its own
/// client (and with it its own session cookie jar), so a single resolver
/// can be shared across tasks without locking.
///
/// Every fetch carries the fixed client timeout and resolutions hold no
/// resources beyond their HTTP connection, so dropping a resolution
/// future (e.g., under `tokio::time::timeout`) cancels it cleanly.
pub struct StreamResolver {
    config: ClientConfig,
}

impl StreamResolver {
    /// Create a resolver with default configuration
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a resolver with custom client configuration
    pub fn with_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Resolve a known hosted video page into a stream descriptor
    ///
    /// Returns `Ok(None)` when the page yields no media URL or any fetch
    /// in the resolution fails.
    ///
    /// # Errors
    /// - `InvalidInput` if `page_url` is empty
    pub async fn resolve_direct(
        &self,
        page_url: &str,
        credentials: &Credentials,
    ) -> Result<Option<StreamDescriptor>> {
        let trimmed = non_empty(page_url, "page URL")?;
        self.resolve(Query::DirectPage(trimmed.to_string()), credentials)
            .await
    }

    /// Resolve a free-text query into a stream descriptor
    ///
    /// Crawls for the single best match and resolves its page. Returns
    /// `Ok(None)` when the search comes up empty or resolution fails.
    ///
    /// # Errors
    /// - `InvalidInput` if `query` is empty
    pub async fn resolve_by_query(
        &self,
        query: &str,
        credentials: &Credentials,
    ) -> Result<Option<StreamDescriptor>> {
        let trimmed = non_empty(query, "search query")?;
        self.resolve(
            Query::Text {
                query: trimmed.to_string(),
                limit: 1,
            },
            credentials,
        )
        .await
    }

    /// Search listings without resolving any page
    ///
    /// Returns at most `limit` results, deduplicated by page URL. A
    /// transport failure mid-crawl returns what accumulated so far.
    ///
    /// # Errors
    /// - `InvalidInput` if `query` is empty or `limit` is zero
    pub async fn search(
        &self,
        query: &str,
        credentials: &Credentials,
        limit: usize,
    ) -> Result<Vec<SearchResult>> {
        let trimmed = non_empty(query, "search query")?;
        validate_limit(limit)?;

        let client = self.build_client()?;
        session::establish(&client, credentials).await;

        Ok(search::crawl(&client, trimmed, limit).await)
    }

    /// Resolve either input form into a stream descriptor
    ///
    /// Both paths share the session, fetch, and extraction machinery and
    /// diverge only at input selection.
    pub async fn resolve(
        &self,
        query: Query,
        credentials: &Credentials,
    ) -> Result<Option<StreamDescriptor>> {
        if let Query::Text { query: text, limit } = &query {
            non_empty(text, "search query")?;
            validate_limit(*limit)?;
        }

        let client = self.build_client()?;
        let mode = session::establish(&client, credentials).await;

        let (page_url, title) = match &query {
            Query::DirectPage(url) => (url.clone(), STREAM_NAME.to_string()),
            Query::Text { query: text, limit } => {
                let results = search::crawl(&client, text, *limit).await;
                match results.into_iter().next() {
                    Some(result) => (result.page_url, format!("{} ({})", STREAM_NAME, text)),
                    None => {
                        debug!(query = %text, "no search results");
                        return Ok(None);
                    }
                }
            }
        };

        let html = match client.get(&page_url).await {
            Ok(html) => html,
            Err(e) => {
                warn!(page_url = %page_url, error = %e, "page fetch failed");
                return Ok(None);
            }
        };

        let extraction = extract_stream(&html);
        let Some(extracted_url) = extraction.media_url else {
            debug!(page_url = %page_url, "no media URL in page");
            return Ok(None);
        };

        let media_url = if mode.is_elevated() {
            upgrade_media_url(&client, &page_url, extracted_url).await
        } else {
            extracted_url
        };

        Ok(Some(StreamDescriptor {
            name: STREAM_NAME.to_string(),
            title,
            media_url,
            subtitle: extraction.subtitle_url.map(SubtitleTrack::new),
        }))
    }

    fn build_client(&self) -> Result<HttpClient> {
        HttpClient::with_config(self.config.clone())
    }
}

impl Default for StreamResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Best-effort premium upgrade of an extracted media URL
///
/// Fetches `{page_url}?do=download` without following redirects. An HTTP
/// 302 with a `Location` header replaces the media URL; anything else
/// keeps the extracted one. Called only with an elevated session, through
/// the same cookie-bearing client as every other fetch in the resolution.
async fn upgrade_media_url(client: &HttpClient, page_url: &str, extracted: String) -> String {
    let download_url = build_download_url(page_url);

    match client.get_no_follow(&download_url).await {
        Ok(FetchOutcome::Redirect { status, location })
            if status == reqwest::StatusCode::FOUND =>
        {
            debug!(page_url = %page_url, "premium upgrade applied");
            location
        }
        Ok(_) => {
            debug!(page_url = %page_url, "download upgrade returned no redirect, keeping extracted URL");
            extracted
        }
        Err(e) => {
            warn!(page_url = %page_url, error = %e, "download upgrade fetch failed, keeping extracted URL");
            extracted
        }
    }
}

fn non_empty<'a>(value: &'a str, what: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(StreamError::InvalidInput(format!("{} cannot be empty", what)));
    }
    Ok(trimmed)
}

fn validate_limit(limit: usize) -> Result<()> {
    if limit == 0 {
        return Err(StreamError::InvalidInput(
            "result limit must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_direct_empty_url() {
        let resolver = StreamResolver::new();
        let result = resolver
            .resolve_direct("", &Credentials::default())
            .await;
        match result {
            Err(StreamError::InvalidInput(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[tokio::test]
    async fn test_resolve_by_query_whitespace_query() {
        let resolver = StreamResolver::new();
        let result = resolver
            .resolve_by_query("   ", &Credentials::default())
            .await;
        match result {
            Err(StreamError::InvalidInput(_)) => {}
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[tokio::test]
    async fn test_search_zero_limit() {
        let resolver = StreamResolver::new();
        let result = resolver
            .search("doctor who", &Credentials::default(), 0)
            .await;
        match result {
            Err(StreamError::InvalidInput(msg)) => assert!(msg.contains("at least 1")),
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[tokio::test]
    async fn test_search_empty_query() {
        let resolver = StreamResolver::new();
        let result = resolver
            .search("", &Credentials::default(), 5)
            .await;
        match result {
            Err(StreamError::InvalidInput(_)) => {}
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[tokio::test]
    async fn test_resolve_text_query_zero_limit() {
        let resolver = StreamResolver::new();
        let result = resolver
            .resolve(
                Query::Text {
                    query: "doctor who".to_string(),
                    limit: 0,
                },
                &Credentials::default(),
            )
            .await;
        match result {
            Err(StreamError::InvalidInput(_)) => {}
            _ => panic!("Expected InvalidInput error"),
        }
    }
}
