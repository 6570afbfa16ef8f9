//! Multi-source tech job run: Remote OK, then Stack Overflow Jobs.
//!
//! Both boards expose everything on the listing page, so no detail pages
//! are visited.

use crate::cascade::{cascade, first, link_of, text_of};
use crate::config::ScrapeConfig;
use crate::fetch::Fetch;
use common::JobRecord;
use scraper::Html;
use url::Url;

pub const NAME: &str = "Tech Company Jobs";
pub const PROBE_URL: &str = "https://google.com";
pub const OUTPUT_FILE: &str = "TechCompany_Jobs.csv";

pub const REMOTE_OK_URL: &str = "https://remoteok.io/remote-dev-jobs";
pub const STACK_OVERFLOW_URL: &str = "https://stackoverflow.com/jobs";

const REMOTE_OK_LIMIT: usize = 15;
const REMOTE_OK_TAGS: usize = 5;
const STACK_OVERFLOW_LIMIT: usize = 10;

const UNKNOWN_TITLE: &str = "Unknown Title";
const UNKNOWN_COMPANY: &str = "Unknown Company";

/// Runs every board in order and concatenates what they return.
pub fn scrape<F: Fetch + ?Sized>(fetcher: &F, config: &ScrapeConfig) -> Vec<JobRecord> {
    let mut all_jobs = Vec::new();

    let remote_ok = scrape_remote_ok(fetcher, config);
    if !remote_ok.is_empty() {
        println!("✓ Found {} jobs from Remote OK", remote_ok.len());
        all_jobs.extend(remote_ok);
    }

    let stack_overflow = scrape_stack_overflow(fetcher, config);
    if !stack_overflow.is_empty() {
        println!("✓ Found {} jobs from Stack Overflow", stack_overflow.len());
        all_jobs.extend(stack_overflow);
    }

    all_jobs
}

pub fn scrape_remote_ok<F: Fetch + ?Sized>(fetcher: &F, config: &ScrapeConfig) -> Vec<JobRecord> {
    println!("📡 Attempting to scrape Remote OK...");
    match fetch_board(fetcher, REMOTE_OK_URL, config) {
        Some((url, html)) => parse_remote_ok(&html, &url),
        None => Vec::new(),
    }
}

pub fn scrape_stack_overflow<F: Fetch + ?Sized>(fetcher: &F, config: &ScrapeConfig) -> Vec<JobRecord> {
    println!("📡 Attempting to scrape Stack Overflow Jobs...");
    match fetch_board(fetcher, STACK_OVERFLOW_URL, config) {
        Some((url, html)) => parse_stack_overflow(&html, &url),
        None => Vec::new(),
    }
}

fn fetch_board<F: Fetch + ?Sized>(fetcher: &F, url: &str, config: &ScrapeConfig) -> Option<(Url, String)> {
    let parsed = Url::parse(url).ok()?;
    match fetcher.fetch(&parsed, config.detail_timeout) {
        Ok(html) => Some((parsed, html)),
        Err(e) => {
            eprintln!("❌ Scraping {} failed: {}", url, e);
            None
        }
    }
}

/// Text of the first `selector` match. The fallback applies only when no
/// element matches; an empty element yields an empty string.
fn text_or(scope: scraper::ElementRef<'_>, selector: &str, fallback: &str) -> String {
    first(scope, &[selector])
        .map(text_of)
        .unwrap_or_else(|| fallback.to_string())
}

fn link_in(scope: scraper::ElementRef<'_>, base: &Url) -> String {
    first(scope, &["a[href]"])
        .and_then(|a| link_of(a, base))
        .map(String::from)
        .unwrap_or_default()
}

/// Job rows from a Remote OK listing page.
pub fn parse_remote_ok(html: &str, page_url: &Url) -> Vec<JobRecord> {
    let document = Html::parse_document(html);
    let Some(hit) = cascade(document.root_element(), &["tr.job"]) else {
        return Vec::new();
    };

    hit.elements
        .into_iter()
        .take(REMOTE_OK_LIMIT)
        .map(|row| {
            let title = text_or(row, "h2", UNKNOWN_TITLE);
            let company = text_or(row, "h3", UNKNOWN_COMPANY);
            let skills: Vec<String> = cascade(row, &["span.tag"])
                .map(|tags| {
                    tags.elements
                        .into_iter()
                        .take(REMOTE_OK_TAGS)
                        .map(text_of)
                        .collect()
                })
                .unwrap_or_default();

            JobRecord {
                title: format!("{} at {}", title, company),
                location: "Remote".to_string(),
                skills: skills.join(", "),
                url: link_in(row, page_url),
                ..Default::default()
            }
        })
        .collect()
}

/// Job cards from a Stack Overflow Jobs listing page.
pub fn parse_stack_overflow(html: &str, page_url: &Url) -> Vec<JobRecord> {
    let document = Html::parse_document(html);
    let Some(hit) = cascade(document.root_element(), &["div.listResults"]) else {
        return Vec::new();
    };

    hit.elements
        .into_iter()
        .take(STACK_OVERFLOW_LIMIT)
        .map(|card| JobRecord {
            title: text_or(card, "h2", UNKNOWN_TITLE),
            location: text_or(card, "span.fc-black-500", "Remote"),
            url: link_in(card, page_url),
            ..Default::default()
        })
        .collect()
}
