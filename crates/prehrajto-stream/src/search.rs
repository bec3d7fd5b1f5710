//! Paginated search crawler for prehraj.to
//!
//! Drives sequential listing-page fetches and aggregates normalized
//! result records up to a caller-supplied limit. Pagination must stay
//! sequential: every stop decision depends on markers of the page just
//! fetched.
//!
//! The stop conditions form a small explicit state machine so the
//! termination logic is testable without any I/O.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::client::HttpClient;
use crate::parser::{parse_listing, ListingPage};
use crate::types::SearchResult;
use crate::url::build_search_url;

/// Decision after processing one listing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlStep {
    /// Fetch the next page
    Continue,
    /// Stop and return what has accumulated
    Stop(StopReason),
}

/// Why a crawl ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The page carried the site's explicit "no results" marker
    NoResults,
    /// The page contained zero result records
    EmptyPage,
    /// The accumulated count reached the caller's limit
    LimitReached,
    /// Every record on the page was an already-seen duplicate
    NoProgress,
    /// The page lacked the "more results" pagination marker
    NoMorePages,
    /// A fetch failed; accumulated results are returned as-is
    Transport,
}

/// Evaluates the stop conditions for one parsed page
///
/// `added` is the number of records the page contributed after dedup.
/// Checks run in priority order: no-results marker, empty page, limit
/// reached, no new records, missing pagination marker. The no-progress
/// check guarantees termination: sites serve the last page again for
/// overflow page numbers, and a page of pure duplicates must not keep
/// the crawl alive.
pub fn evaluate_page(
    page: &ListingPage,
    accumulated: usize,
    added: usize,
    limit: usize,
) -> CrawlStep {
    if page.no_results {
        return CrawlStep::Stop(StopReason::NoResults);
    }
    if page.entries.is_empty() {
        return CrawlStep::Stop(StopReason::EmptyPage);
    }
    if accumulated >= limit {
        return CrawlStep::Stop(StopReason::LimitReached);
    }
    if added == 0 {
        return CrawlStep::Stop(StopReason::NoProgress);
    }
    if !page.has_more {
        return CrawlStep::Stop(StopReason::NoMorePages);
    }
    CrawlStep::Continue
}

/// Crawls listing pages for `query`, returning at most `limit` results
///
/// The session (or lack of one) lives in `client`'s cookie jar, so the
/// crawl is elevated exactly when the resolution that owns the client is.
/// Results are deduplicated by `page_url` across overlapping pages. A
/// transport failure stops the crawl and returns what has accumulated;
/// on page 1 that means an empty list.
pub async fn crawl(client: &HttpClient, query: &str, limit: usize) -> Vec<SearchResult> {
    let mut results: Vec<SearchResult> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut page_number = 1u32;

    loop {
        let url = build_search_url(client.base_url(), query, page_number);

        let step = match client.get(&url).await {
            Ok(html) => {
                let listing = parse_listing(&html, client.base_url());
                let before = results.len();
                accumulate(&mut results, &mut seen, &listing.entries, limit);
                evaluate_page(&listing, results.len(), results.len() - before, limit)
            }
            Err(e) => {
                warn!(page = page_number, error = %e, "listing fetch failed");
                CrawlStep::Stop(StopReason::Transport)
            }
        };

        match step {
            CrawlStep::Continue => page_number += 1,
            CrawlStep::Stop(reason) => {
                debug!(?reason, page = page_number, count = results.len(), "crawl stopped");
                break;
            }
        }
    }

    results.truncate(limit);
    results
}

/// Appends entries, skipping duplicate page URLs, up to `limit`
fn accumulate(
    results: &mut Vec<SearchResult>,
    seen: &mut HashSet<String>,
    entries: &[SearchResult],
    limit: usize,
) {
    for entry in entries {
        if results.len() >= limit {
            break;
        }
        if seen.insert(entry.page_url.clone()) {
            results.push(entry.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn entry(url: &str) -> SearchResult {
        SearchResult {
            title: format!("Video ({} )", url),
            size_label: "1 GB".to_string(),
            duration_label: "01:00:00".to_string(),
            page_url: url.to_string(),
        }
    }

    fn page(entries: Vec<SearchResult>, no_results: bool, has_more: bool) -> ListingPage {
        ListingPage {
            no_results,
            entries,
            has_more,
        }
    }

    #[test]
    fn test_stop_on_no_results_marker() {
        let listing = page(vec![], true, true);
        assert_eq!(
            evaluate_page(&listing, 0, 0, 10),
            CrawlStep::Stop(StopReason::NoResults)
        );
    }

    #[test]
    fn test_stop_on_empty_page() {
        let listing = page(vec![], false, true);
        assert_eq!(
            evaluate_page(&listing, 5, 0, 10),
            CrawlStep::Stop(StopReason::EmptyPage)
        );
    }

    #[test]
    fn test_stop_on_limit_reached() {
        let listing = page(vec![entry("/a")], false, true);
        assert_eq!(
            evaluate_page(&listing, 10, 0, 10),
            CrawlStep::Stop(StopReason::LimitReached)
        );
    }

    #[test]
    fn test_stop_on_duplicate_only_page() {
        // Entries present and more pages advertised, but dedup added
        // nothing — continuing would refetch the same page forever
        let listing = page(vec![entry("/a")], false, true);
        assert_eq!(
            evaluate_page(&listing, 1, 0, 10),
            CrawlStep::Stop(StopReason::NoProgress)
        );
    }

    #[test]
    fn test_stop_on_missing_pagination_marker() {
        let listing = page(vec![entry("/a")], false, false);
        assert_eq!(
            evaluate_page(&listing, 1, 1, 10),
            CrawlStep::Stop(StopReason::NoMorePages)
        );
    }

    #[test]
    fn test_continue_when_more_pages_and_under_limit() {
        let listing = page(vec![entry("/a")], false, true);
        assert_eq!(evaluate_page(&listing, 1, 1, 10), CrawlStep::Continue);
    }

    #[test]
    fn test_no_results_marker_outranks_limit() {
        // Priority order matters: the marker on a later page still reads
        // as NoResults even when the limit was hit simultaneously
        let listing = page(vec![], true, false);
        assert_eq!(
            evaluate_page(&listing, 10, 0, 10),
            CrawlStep::Stop(StopReason::NoResults)
        );
    }

    #[test]
    fn test_accumulate_dedupes_by_page_url() {
        let mut results = Vec::new();
        let mut seen = HashSet::new();

        accumulate(
            &mut results,
            &mut seen,
            &[entry("/a"), entry("/b")],
            10,
        );
        // Overlapping second page repeats /b
        accumulate(
            &mut results,
            &mut seen,
            &[entry("/b"), entry("/c")],
            10,
        );

        let urls: Vec<&str> = results.iter().map(|r| r.page_url.as_str()).collect();
        assert_eq!(urls, vec!["/a", "/b", "/c"]);
    }

    #[test]
    fn test_accumulate_respects_limit() {
        let mut results = Vec::new();
        let mut seen = HashSet::new();

        accumulate(
            &mut results,
            &mut seen,
            &[entry("/a"), entry("/b"), entry("/c")],
            2,
        );

        assert_eq!(results.len(), 2);
    }

    proptest! {
        #[test]
        fn prop_accumulation_never_exceeds_limit_or_duplicates(
            pages in prop::collection::vec(
                prop::collection::vec("[a-f]{1,3}", 0..8),
                0..6,
            ),
            limit in 1usize..20,
        ) {
            let mut results = Vec::new();
            let mut seen = HashSet::new();

            for urls in &pages {
                let entries: Vec<SearchResult> =
                    urls.iter().map(|u| entry(u)).collect();
                accumulate(&mut results, &mut seen, &entries, limit);
            }

            prop_assert!(results.len() <= limit);

            let unique: HashSet<&str> =
                results.iter().map(|r| r.page_url.as_str()).collect();
            prop_assert_eq!(unique.len(), results.len());
        }
    }
}
