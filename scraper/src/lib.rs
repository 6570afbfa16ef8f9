//! Job listing scrapers that feed CSV job sheets.
//!
//! Every scraper is sequential and blocking. Failures never abort a run:
//! a page that cannot be fetched just contributes fewer or emptier records.

pub mod cascade;
pub mod config;
pub mod detail;
pub mod fetch;
pub mod sample;
pub mod sites;

pub use config::ScrapeConfig;
pub use fetch::{Fetch, FetchError, HttpFetcher};
