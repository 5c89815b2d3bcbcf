//! Runtime configuration for the board client.
//!
//! # Design
//! - Every knob has a constant default; the browser only supplies the location
//!   and an optional stored API override.
//! - URL derivation is pure so it can be tested without a window.

use tracing::Level;
use url::Url;

/// API origin used when the page location cannot be parsed.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:7070";
/// Page size requested from `GET /posts`.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Largest page size the client will ask for.
pub const MAX_PAGE_SIZE: u32 = 100;
/// Quiet period before search input is committed to the URL.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;
/// Words rejected in post titles and bodies.
pub const DEFAULT_BANNED_WORDS: [&str; 4] = ["spam", "scam", "casino", "gambling"];

const DEV_SERVER_PORT: u16 = 8080;
const DEV_API_PORT: u16 = 7070;

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Origin of the REST backend, without a trailing slash.
    pub api_base_url: String,
    /// Items requested per page.
    pub page_size: u32,
    /// Search debounce in milliseconds.
    pub search_debounce_ms: u32,
    /// Words blocked by form validation.
    pub banned_words: Vec<String>,
    /// Most verbose level forwarded to the console.
    pub log_level: Level,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: SEARCH_DEBOUNCE_MS,
            banned_words: DEFAULT_BANNED_WORDS.iter().map(ToString::to_string).collect(),
            log_level: default_log_level(),
        }
    }
}

impl BoardConfig {
    /// Resolve configuration from the page location and a stored API override.
    #[must_use]
    pub fn resolve(href: Option<&str>, api_override: Option<&str>) -> Self {
        let api_base_url = api_override
            .map(|value| value.trim().trim_end_matches('/'))
            .filter(|value| Url::parse(value).is_ok())
            .map(ToString::to_string)
            .or_else(|| href.and_then(base_url_from_href))
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        Self {
            api_base_url,
            ..Self::default()
        }
    }
}

/// Derive the API origin from the page URL.
///
/// The dev server port maps to the API port; any other port is kept.
#[must_use]
pub fn base_url_from_href(href: &str) -> Option<String> {
    let url = Url::parse(href).ok()?;
    if !matches!(url.scheme(), "http" | "https") {
        return None;
    }
    let host = url.host_str()?;
    let mut base = format!("{}://{host}", url.scheme());
    match url.port() {
        Some(DEV_SERVER_PORT) => base.push_str(&format!(":{DEV_API_PORT}")),
        Some(port) => base.push_str(&format!(":{port}")),
        None => {}
    }
    Some(base)
}

const fn default_log_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_server_port_maps_to_api_port() {
        assert_eq!(
            base_url_from_href("http://localhost:8080/posts?page=2").as_deref(),
            Some("http://localhost:7070")
        );
    }

    #[test]
    fn other_ports_and_default_ports_are_kept() {
        assert_eq!(
            base_url_from_href("https://board.example.com/dashboard").as_deref(),
            Some("https://board.example.com")
        );
        assert_eq!(
            base_url_from_href("http://10.0.0.5:3000/").as_deref(),
            Some("http://10.0.0.5:3000")
        );
        assert!(base_url_from_href("file:///tmp/index.html").is_none());
    }

    #[test]
    fn override_wins_and_bad_input_falls_back() {
        let config = BoardConfig::resolve(
            Some("http://localhost:8080/"),
            Some("https://api.example.com/"),
        );
        assert_eq!(config.api_base_url, "https://api.example.com");

        let config = BoardConfig::resolve(Some("not a url"), Some("also bad"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.search_debounce_ms, 500);
    }
}
