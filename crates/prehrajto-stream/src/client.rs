//! HTTP fetcher for prehraj.to
//!
//! Thin wrapper around `reqwest` carrying the per-resolution cookie jar.
//! Requests use a browser-like User-Agent and a fixed timeout; redirects
//! are followed manually so the premium download-upgrade step can read
//! the `Location` header instead of following it.
//!
//! No retries and no rate limiting: a failed fetch resolves its branch to
//! "no result" at the caller.

use std::time::Duration;

use crate::error::{Result, StreamError};

/// Default site origin
pub const DEFAULT_BASE_URL: &str = "https://prehraj.to";

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Site origin, overridable for tests (default: `https://prehraj.to`)
    pub base_url: String,
    /// Request timeout in seconds (default: 10)
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

/// Outcome of a fetch that does not follow redirects
#[derive(Debug)]
pub enum FetchOutcome {
    /// Non-redirect response body
    Body(String),
    /// Redirect response with its status and `Location` header value
    Redirect {
        status: reqwest::StatusCode,
        location: String,
    },
}

/// HTTP client bound to one resolution's cookie jar
///
/// The cookie store is the session handle: logging in through this client
/// makes every subsequent fetch carry the elevated cookies, so one
/// resolution never mixes anonymous and elevated requests.
pub struct HttpClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .redirect(reqwest::redirect::Policy::none())
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::ACCEPT_LANGUAGE,
                    "cs-CZ,cs;q=0.9,en;q=0.8".parse().unwrap(),
                );
                headers
            })
            .build()
            .map_err(StreamError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// The site origin this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a page, following redirects manually (bounded)
    ///
    /// # Errors
    /// - `Http` - network errors, timeouts, 5xx responses
    /// - `NotFound` - server returned 404
    /// - `Parse` - redirect chain exceeded the bound
    pub async fn get(&self, url: &str) -> Result<String> {
        let mut current_url = url.to_string();
        let max_redirects = 5;

        for _ in 0..max_redirects {
            let response = self
                .client
                .get(&current_url)
                .send()
                .await
                .map_err(StreamError::Http)?;

            let status = response.status();

            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(StreamError::NotFound(current_url));
            }

            if status.is_server_error() {
                return Err(StreamError::Http(
                    response.error_for_status().unwrap_err(),
                ));
            }

            if status.is_redirection() {
                if let Some(location) = response.headers().get(reqwest::header::LOCATION)
                    && let Ok(loc_str) = location.to_str()
                {
                    current_url = self.absolutize_location(loc_str);
                    continue;
                }
                // Redirect without a usable Location — return the body as-is
                return response.text().await.map_err(StreamError::Http);
            }

            return response.text().await.map_err(StreamError::Http);
        }

        Err(StreamError::Parse("Too many redirects".to_string()))
    }

    /// Fetch without following redirects
    ///
    /// A redirect response yields [`FetchOutcome::Redirect`] with the raw
    /// `Location` header value; anything else yields the body. Used by
    /// the elevated `?do=download` upgrade step.
    pub async fn get_no_follow(&self, url: &str) -> Result<FetchOutcome> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(StreamError::Http)?;

        let status = response.status();

        if status.is_redirection()
            && let Some(location) = response.headers().get(reqwest::header::LOCATION)
            && let Ok(loc_str) = location.to_str()
        {
            return Ok(FetchOutcome::Redirect {
                status,
                location: loc_str.to_string(),
            });
        }

        let body = response.text().await.map_err(StreamError::Http)?;
        Ok(FetchOutcome::Body(body))
    }

    /// POST form fields and return the response body
    ///
    /// # Errors
    /// - `Http` - network errors, timeouts, or any non-2xx status
    pub async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> Result<String> {
        let response = self
            .client
            .post(url)
            .form(form)
            .send()
            .await
            .map_err(StreamError::Http)?
            .error_for_status()
            .map_err(StreamError::Http)?;

        response.text().await.map_err(StreamError::Http)
    }

    /// Resolve a `Location` header value against the client's origin
    fn absolutize_location(&self, location: &str) -> String {
        if location.starts_with("http://") || location.starts_with("https://") {
            location.to_string()
        } else {
            format!("{}{}", self.base_url, location)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://prehraj.to");
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_with_custom_config() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9999".to_string(),
            timeout_secs: 3,
        };
        let client = HttpClient::with_config(config).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }

    #[test]
    fn test_absolutize_location() {
        let client = HttpClient::new().unwrap();
        assert_eq!(
            client.absolutize_location("/video/abc"),
            "https://prehraj.to/video/abc"
        );
        assert_eq!(
            client.absolutize_location("https://cdn.example/x.mp4"),
            "https://cdn.example/x.mp4"
        );
    }
}
