//! Search listing page parser for prehraj.to
//!
//! Extracts result records from one page of paginated search results.
//! Titles, sizes, durations, and links appear as parallel element
//! sequences (same index = same record); malformed pages can leave them
//! misaligned, so they are zipped rather than indexed and only the
//! shortest common prefix is paired.

use scraper::{Html, Selector};

use crate::types::SearchResult;
use crate::url::absolutize;

/// Everything the crawler needs from one listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// The site's explicit "no results" marker was present
    pub no_results: bool,

    /// Result records in page order
    pub entries: Vec<SearchResult>,

    /// The "more results" pagination marker was present
    pub has_more: bool,
}

/// Parses one search listing page
///
/// `base_url` is the site origin used to absolutize result hrefs.
/// A page without the expected markup yields an empty entry list and
/// `has_more = false`; the crawler treats that as a terminal page.
pub fn parse_listing(html: &str, base_url: &str) -> ListingPage {
    let document = Html::parse_document(html);

    let no_results = has_match(&document, "div.no-results");
    let has_more = has_match(&document, "div.pagination-more");

    let titles = collect_texts(&document, "h3.video__title");
    let sizes = collect_texts(&document, "div.video__tag--size");
    let times = collect_texts(&document, "div.video__tag--time");
    let links = collect_hrefs(&document, "a.video--link");

    // Defensive zip: unequal sequence lengths pair only the common prefix
    let entries = titles
        .iter()
        .zip(sizes.iter())
        .zip(times.iter())
        .zip(links.iter())
        .map(|(((title, size), time), href)| SearchResult {
            title: format!("{} ({} - {})", title, size, time),
            size_label: size.clone(),
            duration_label: time.clone(),
            page_url: absolutize(base_url, href),
        })
        .collect();

    ListingPage {
        no_results,
        entries,
        has_more,
    }
}

/// True when at least one element matches the selector
fn has_match(document: &Html, selector: &str) -> bool {
    Selector::parse(selector)
        .map(|s| document.select(&s).next().is_some())
        .unwrap_or(false)
}

/// Collects trimmed text content of every element matching the selector
fn collect_texts(document: &Html, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

/// Collects href attributes of every element matching the selector
fn collect_hrefs(document: &Html, selector: &str) -> Vec<String> {
    let Ok(selector) = Selector::parse(selector) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .filter_map(|el| el.value().attr("href"))
        .map(|href| href.to_string())
        .collect()
}
