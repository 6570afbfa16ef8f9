//! Blocking page fetcher.

use crate::config::browser_headers;
use reqwest::blocking::Client;
use std::thread;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Anything that can turn a URL into page HTML.
pub trait Fetch {
    fn fetch(&self, url: &Url, timeout: Duration) -> Result<String, FetchError>;

    /// Fetches a URL given as text.
    fn fetch_str(&self, url: &str, timeout: Duration) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        self.fetch(&parsed, timeout)
    }
}

/// `reqwest` client preloaded with browser headers.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .default_headers(browser_headers())
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &Url, timeout: Duration) -> Result<String, FetchError> {
        debug!("GET {}", url);
        let request_error = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url.clone())
            .timeout(timeout)
            .send()
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(request_error)
    }
}

/// Checks that `url` is reachable before a run starts.
pub fn probe<F: Fetch + ?Sized>(fetcher: &F, url: &str, timeout: Duration) -> Result<(), FetchError> {
    fetcher.fetch_str(url, timeout).map(|_| ())
}

/// Sleeps between sequential requests. Zero skips the sleep.
pub fn pause(duration: Duration) {
    if duration.is_zero() {
        return;
    }
    debug!("pausing {:?}", duration);
    thread::sleep(duration);
}

#[cfg(test)]
pub(crate) mod canned {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Serves fixed HTML by URL and records every request. Unknown URLs
    /// answer 404.
    #[derive(Default)]
    pub struct CannedPages {
        pages: HashMap<String, String>,
        pub requests: RefCell<Vec<String>>,
    }

    impl CannedPages {
        pub fn with(mut self, url: &str, html: &str) -> Self {
            self.pages.insert(url.to_string(), html.to_string());
            self
        }

        pub fn requested(&self, url: &str) -> bool {
            self.requests.borrow().iter().any(|u| u == url)
        }
    }

    impl Fetch for CannedPages {
        fn fetch(&self, url: &Url, _timeout: Duration) -> Result<String, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            self.pages
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| FetchError::Status {
                    url: url.to_string(),
                    status: 404,
                })
        }
    }
}
