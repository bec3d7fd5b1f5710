//! Session manager for prehraj.to premium accounts
//!
//! Exchanges credentials for an authenticated session by posting the
//! site's login form, then probes the returned page for the premium
//! marker. Premium detection is scraped from UI text and therefore
//! fragile; every ambiguity degrades to anonymous mode rather than
//! failing the resolution.

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::client::HttpClient;
use crate::types::Credentials;

/// Mode a resolution runs in after session establishment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// No login, or login could not be confirmed as premium
    Anonymous,
    /// Logged in with confirmed premium status
    Elevated,
}

impl SessionMode {
    pub fn is_elevated(self) -> bool {
        matches!(self, SessionMode::Elevated)
    }
}

/// Logs in with the given credentials and probes for premium status
///
/// Empty credentials short-circuit to [`SessionMode::Anonymous`] with no
/// network call. Transport failures, non-2xx responses, and a missing or
/// non-premium marker all degrade to anonymous mode; none of them is an
/// error. On success the login cookies live in `client`'s jar, so every
/// later fetch through the same client is elevated.
pub async fn establish(client: &HttpClient, credentials: &Credentials) -> SessionMode {
    if credentials.is_empty() {
        return SessionMode::Anonymous;
    }

    let form = [
        ("email", credentials.email.as_str()),
        ("password", credentials.password.as_str()),
        ("_submit", "Přihlásit+se"),
        ("remember", "on"),
        ("_do", "login-loginForm-submit"),
    ];

    let body = match client.post_form(client.base_url(), &form).await {
        Ok(body) => body,
        Err(e) => {
            warn!(error = %e, "login failed, continuing anonymously");
            return SessionMode::Anonymous;
        }
    };

    if page_has_premium_marker(&body) {
        debug!("premium session confirmed");
        SessionMode::Elevated
    } else {
        warn!("premium status not confirmed, continuing anonymously");
        SessionMode::Anonymous
    }
}

/// Checks the post-login page for the premium marker element
///
/// The marker is `ul.header__links span.color-green` containing the word
/// "Premium". A missing marker means the markup changed or the account is
/// not premium; both read as "not elevated".
fn page_has_premium_marker(html: &str) -> bool {
    let document = Html::parse_document(html);

    let Ok(selector) = Selector::parse("ul.header__links span.color-green") else {
        return false;
    };

    document.select(&selector).any(|element| {
        element
            .text()
            .collect::<String>()
            .contains("Premium")
    })
}
