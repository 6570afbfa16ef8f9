//! Fixed request headers, timeouts and pauses.

use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_ENCODING, ACCEPT_LANGUAGE, CONNECTION,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use std::time::Duration;

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Headers sent with every request so listing pages serve their normal HTML.
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers
}

/// Knobs shared by every scraper run.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Timeout for listing pages.
    pub listing_timeout: Duration,
    /// Timeout for detail pages and the connectivity probe.
    pub detail_timeout: Duration,
    /// Pause after each detail page fetch.
    pub detail_pause: Duration,
    /// Pause between listing pages.
    pub page_pause: Duration,
    pub max_pages: usize,
    /// Where to dump a listing page that produced no job cards.
    pub debug_dump: Option<std::path::PathBuf>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            listing_timeout: Duration::from_secs(15),
            detail_timeout: Duration::from_secs(10),
            detail_pause: Duration::from_secs(1),
            page_pause: Duration::from_secs(2),
            max_pages: 3,
            debug_dump: None,
        }
    }
}

impl ScrapeConfig {
    /// No pauses, no dumps. Used when scrapers are driven by canned pages.
    pub fn immediate() -> Self {
        Self {
            detail_pause: Duration::ZERO,
            page_pause: Duration::ZERO,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_headers_complete() {
        let headers = browser_headers();
        assert_eq!(headers.len(), 6);
        assert_eq!(headers[USER_AGENT], BROWSER_USER_AGENT);
        assert_eq!(headers[UPGRADE_INSECURE_REQUESTS], "1");
    }

    #[test]
    fn test_immediate_has_no_pauses() {
        let config = ScrapeConfig::immediate();
        assert!(config.detail_pause.is_zero());
        assert!(config.page_pause.is_zero());
        assert_eq!(config.max_pages, 3);
    }
}
