//! GitHub careers page. Single listing page, with a fallback to any link
//! that looks like a job posting.

use crate::cascade::{cascade, first, link_of, text_of};
use crate::config::ScrapeConfig;
use crate::detail::{fetch_detail, JobDetail, Listing};
use crate::fetch::{pause, Fetch};
use crate::sites::dump_debug_page;
use common::{Extractor, JobRecord};
use scraper::{ElementRef, Html, Selector};
use url::Url;

pub const NAME: &str = "GitHub Careers";
pub const BASE_URL: &str = "https://github.com/about/careers";
pub const PROBE_URL: &str = "https://github.com";
pub const OUTPUT_FILE: &str = "GitHub_Jobs.csv";

/// GitHub hires remotely; the listing page carries no per-job location.
const LOCATION: &str = "Remote/Global";
const MIN_TITLE_CHARS: usize = 3;

const JOB_CARD_SELECTORS: &[&str] = &[
    ".job-listing",
    ".position",
    ".career-position",
    "a[href*=\"/careers/positions/\"]",
    "a[href*=\"jobs\"]",
];

const LINK_KEYWORDS: [&str; 4] = ["job", "career", "position", "opening"];

const DESCRIPTION_SELECTORS: &[&str] = &[
    ".markdown-body",
    ".job-description",
    ".job-details",
    ".content",
    "main",
    "[data-target=\"readme-toc.content\"]",
];

pub fn scrape<F: Fetch + ?Sized>(fetcher: &F, config: &ScrapeConfig) -> Vec<JobRecord> {
    println!("📡 Accessing {} page...", NAME);
    let Ok(base) = Url::parse(BASE_URL) else {
        return Vec::new();
    };
    let html = match fetcher.fetch(&base, config.listing_timeout) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("❌ Could not access {}: {}", NAME, e);
            return Vec::new();
        }
    };
    println!("✅ Successfully accessed {} page", NAME);

    let listings = parse_listings(&html, &base);
    if listings.is_empty() {
        println!("No job cards found.");
        if let Some(path) = &config.debug_dump {
            dump_debug_page(path, &html);
        }
        return Vec::new();
    }

    let extractor = Extractor::new();
    let total = listings.len();
    let mut jobs = Vec::with_capacity(total);

    for (i, listing) in listings.into_iter().enumerate() {
        println!("Processing job {}/{}", i + 1, total);

        let detail = match &listing.url {
            Some(url) if url.host_str() == base.host_str() => {
                println!("  📡 Fetching details for: {}", listing.title);
                let detail = fetch_detail(
                    fetcher,
                    url,
                    DESCRIPTION_SELECTORS,
                    &extractor,
                    config.detail_timeout,
                );
                pause(config.detail_pause);
                detail
            }
            _ => JobDetail::default(),
        };

        println!("  ✓ Successfully processed: {}", listing.title);
        jobs.push(listing.into_record(detail));
    }

    jobs
}

/// Listings from the careers page. Uses the card selectors first, then any
/// anchor whose href mentions a job keyword.
pub fn parse_listings(html: &str, base: &Url) -> Vec<Listing> {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let cards = match cascade(root, JOB_CARD_SELECTORS) {
        Some(hit) => {
            println!("Found {} job cards using selector: {}", hit.elements.len(), hit.selector);
            hit.elements
        }
        None => {
            println!("No specific job cards found, looking for job-related links...");
            let links = job_links(root);
            println!("Found {} potential job links", links.len());
            links
        }
    };

    cards
        .into_iter()
        .map(|card| listing_from_card(card, base))
        .filter(|listing| listing.title.trim().chars().count() >= MIN_TITLE_CHARS)
        .collect()
}

fn job_links(root: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let Ok(anchors) = Selector::parse("a[href]") else {
        return Vec::new();
    };
    root.select(&anchors)
        .filter(|a| {
            let href = a.value().attr("href").unwrap_or_default().to_lowercase();
            LINK_KEYWORDS.iter().any(|keyword| href.contains(keyword))
        })
        .collect()
}

fn listing_from_card(card: ElementRef<'_>, base: &Url) -> Listing {
    let (title, url) = if card.value().name() == "a" {
        (text_of(card), link_of(card, base))
    } else {
        match first(card, &["a"]) {
            Some(anchor) => (text_of(anchor), link_of(anchor, base)),
            None => (text_of(card), None),
        }
    };

    Listing {
        title,
        location: LOCATION.to_string(),
        url,
    }
}
