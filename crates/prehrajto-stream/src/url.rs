//! URL helper functions for prehraj.to
//!
//! Builders for search listing, download-upgrade, and absolute page URLs.
//! All functions take the site origin explicitly so tests can point them
//! at a mock server.

/// Builds the search listing URL for a query and page number
///
/// URL encodes the query; pages start at 1.
///
/// # Example
/// ```
/// use prehrajto_stream::url::build_search_url;
/// let url = build_search_url("https://prehraj.to", "doctor who", 2);
/// assert_eq!(url, "https://prehraj.to/hledej/doctor%20who?vp-page=2");
/// ```
pub fn build_search_url(base_url: &str, query: &str, page: u32) -> String {
    let encoded = urlencoding::encode(query);
    format!("{}/hledej/{}?vp-page={}", base_url, encoded, page)
}

/// Builds the download-upgrade URL for a video page
///
/// Appends `?do=download` as per prehraj.to format. Used only with an
/// elevated session; the response is a 302 to the direct file.
///
/// # Example
/// ```
/// use prehrajto_stream::url::build_download_url;
/// let url = build_download_url("https://prehraj.to/video/abc");
/// assert_eq!(url, "https://prehraj.to/video/abc?do=download");
/// ```
pub fn build_download_url(page_url: &str) -> String {
    format!("{}?do=download", page_url)
}

/// Resolves a listing href to an absolute URL against the site origin
///
/// Hrefs on listing pages are site-relative; already-absolute hrefs are
/// passed through.
pub fn absolutize(base_url: &str, href: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        href.to_string()
    } else {
        format!("{}{}", base_url, href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_url_simple() {
        let url = build_search_url("https://prehraj.to", "doctor", 1);
        assert_eq!(url, "https://prehraj.to/hledej/doctor?vp-page=1");
    }

    #[test]
    fn test_build_search_url_with_spaces() {
        let url = build_search_url("https://prehraj.to", "example movie 2020", 3);
        assert_eq!(
            url,
            "https://prehraj.to/hledej/example%20movie%202020?vp-page=3"
        );
    }

    #[test]
    fn test_build_download_url() {
        let url = build_download_url("https://prehraj.to/video/abc");
        assert_eq!(url, "https://prehraj.to/video/abc?do=download");
    }

    #[test]
    fn test_absolutize_relative_href() {
        assert_eq!(
            absolutize("https://prehraj.to", "/video/abc"),
            "https://prehraj.to/video/abc"
        );
    }

    #[test]
    fn test_absolutize_absolute_href() {
        assert_eq!(
            absolutize("https://prehraj.to", "https://prehraj.to/video/abc"),
            "https://prehraj.to/video/abc"
        );
    }
}
