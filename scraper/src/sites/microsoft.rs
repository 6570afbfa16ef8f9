//! Microsoft Careers search results, paginated.

use crate::cascade::{cascade, first, first_text, link_of, text_of};
use crate::config::ScrapeConfig;
use crate::detail::{fetch_detail, JobDetail, Listing};
use crate::fetch::{pause, Fetch};
use crate::sites::dump_debug_page;
use common::extract::ENTERPRISE_SKILLS;
use common::{Extractor, JobRecord};
use scraper::Html;
use tracing::warn;
use url::Url;

pub const NAME: &str = "Microsoft Careers";
pub const PROBE_URL: &str = "https://www.microsoft.com";
pub const OUTPUT_FILE: &str = "Microsoft_Jobs.csv";

const PAGE_SIZE: usize = 20;

/// Search endpoints tried in order; the result offset is appended.
const SEARCH_URLS: [&str; 3] = [
    "https://careers.microsoft.com/us/en/search-results?from=",
    "https://careers.microsoft.com/v2/global/en/search-results?from=",
    "https://jobs.careers.microsoft.com/global/en/search?from=",
];

const JOB_CARD_SELECTORS: &[&str] = &[
    ".jobs-list-item",
    "[data-ph-at-id=\"job-item\"]",
    ".job-item",
    ".search-result-item",
    "article",
    ".result-item",
];

const TITLE_SELECTORS: &[&str] = &[
    "a[data-ph-at-id=\"job-title\"]",
    ".job-title",
    "h2 a",
    "h3 a",
    "a[href*=\"job\"]",
];

const LOCATION_SELECTORS: &[&str] = &[
    "[data-ph-at-id=\"location\"]",
    ".job-location",
    ".location",
    "span[title*=\"location\"]",
];

const DESCRIPTION_SELECTORS: &[&str] = &[
    ".job-description",
    ".job-details",
    "[data-ph-at-id=\"job-description\"]",
    ".content",
    "main",
];

/// Candidate search URLs for a 1-based page number.
pub fn search_urls(page: usize) -> Vec<String> {
    let offset = page.saturating_sub(1) * PAGE_SIZE;
    SEARCH_URLS
        .iter()
        .map(|prefix| format!("{prefix}{offset}"))
        .collect()
}

/// Scrapes up to `config.max_pages` pages, stopping at the first empty one.
pub fn scrape<F: Fetch + ?Sized>(fetcher: &F, config: &ScrapeConfig) -> Vec<JobRecord> {
    let mut all_jobs = Vec::new();

    for page in 1..=config.max_pages {
        println!("\n=== Scraping page {} ===", page);
        let jobs = scrape_page(fetcher, config, page);

        if jobs.is_empty() {
            println!("No jobs found on page {}. Stopping pagination.", page);
            break;
        }

        all_jobs.extend(jobs);
        println!("Found jobs on page {}. Total so far: {}", page, all_jobs.len());

        if page < config.max_pages {
            println!("⏳ Waiting before next page...");
            pause(config.page_pause);
        }
    }

    all_jobs
}

/// Scrapes one results page, visiting each job's detail page.
pub fn scrape_page<F: Fetch + ?Sized>(fetcher: &F, config: &ScrapeConfig, page: usize) -> Vec<JobRecord> {
    let Some((page_url, html)) = fetch_first_reachable(fetcher, config, page) else {
        println!("❌ Could not access {} search results.", NAME);
        return Vec::new();
    };
    println!("✅ Successfully accessed: {}", page_url);

    let listings = parse_listings(&html, &page_url);
    if listings.is_empty() {
        println!("No job cards found.");
        if let Some(path) = &config.debug_dump {
            dump_debug_page(path, &html);
        }
        return Vec::new();
    }

    let extractor = Extractor::with_vocabulary(ENTERPRISE_SKILLS);
    let total = listings.len();
    let mut jobs = Vec::with_capacity(total);

    for (i, listing) in listings.into_iter().enumerate() {
        println!("Processing job {}/{}", i + 1, total);

        let detail = match &listing.url {
            Some(url) => {
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
            None => JobDetail::default(),
        };

        println!("  ✓ Successfully processed: {}", listing.title);
        jobs.push(listing.into_record(detail));
    }

    jobs
}

fn fetch_first_reachable<F: Fetch + ?Sized>(
    fetcher: &F,
    config: &ScrapeConfig,
    page: usize,
) -> Option<(Url, String)> {
    search_urls(page).into_iter().find_map(|candidate| {
        println!("Trying URL: {}", candidate);
        let url = match Url::parse(&candidate) {
            Ok(url) => url,
            Err(e) => {
                warn!("skipping {}: {}", candidate, e);
                return None;
            }
        };
        match fetcher.fetch(&url, config.listing_timeout) {
            Ok(html) => Some((url, html)),
            Err(e) => {
                warn!("failed to access {}", e);
                None
            }
        }
    })
}

/// Job cards on a results page. Cards without a title are dropped.
pub fn parse_listings(html: &str, page_url: &Url) -> Vec<Listing> {
    let document = Html::parse_document(html);
    let Some(hit) = cascade(document.root_element(), JOB_CARD_SELECTORS) else {
        return Vec::new();
    };
    println!("Found {} job cards using selector: {}", hit.elements.len(), hit.selector);

    hit.elements
        .into_iter()
        .filter_map(|card| {
            let title_el = first(card, TITLE_SELECTORS)?;
            let title = text_of(title_el);
            if title.is_empty() {
                return None;
            }
            Some(Listing {
                title,
                location: first_text(card, LOCATION_SELECTORS),
                url: link_of(title_el, page_url),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::canned::CannedPages;

    const RESULTS: &str = r#"
        <html><body>
          <ul>
            <li class="jobs-list-item">
              <a data-ph-at-id="job-title" href="/us/en/job/100/Software-Engineer">Software Engineer</a>
              <span class="job-location">Redmond, WA</span>
            </li>
            <li class="jobs-list-item">
              <h3><a href="https://jobs.careers.microsoft.com/job/200">Data Scientist</a></h3>
            </li>
            <li class="jobs-list-item"><span class="job-location">No title here</span></li>
          </ul>
        </body></html>
    "#;

    const DETAIL: &str = r#"
        <html><body><div class="job-description">
          Minimum 3 years building services in C# on Azure. Kubernetes a plus.
        </div></body></html>
    "#;

    fn first_page_url() -> String {
        search_urls(1).remove(0)
    }

    #[test]
    fn test_search_urls_offsets() {
        assert_eq!(
            search_urls(1)[0],
            "https://careers.microsoft.com/us/en/search-results?from=0"
        );
        assert_eq!(
            search_urls(3)[2],
            "https://jobs.careers.microsoft.com/global/en/search?from=40"
        );
    }

    #[test]
    fn test_parse_listings() {
        let base = Url::parse(&first_page_url()).unwrap();
        let listings = parse_listings(RESULTS, &base);

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].title, "Software Engineer");
        assert_eq!(listings[0].location, "Redmond, WA");
        assert_eq!(
            listings[0].url.as_ref().map(Url::as_str),
            Some("https://careers.microsoft.com/us/en/job/100/Software-Engineer")
        );
        assert_eq!(listings[1].title, "Data Scientist");
        assert_eq!(listings[1].location, "");
    }

    #[test]
    fn test_scrape_page_with_details() {
        let pages = CannedPages::default()
            .with(&first_page_url(), RESULTS)
            .with("https://careers.microsoft.com/us/en/job/100/Software-Engineer", DETAIL);

        let jobs = scrape_page(&pages, &ScrapeConfig::immediate(), 1);

        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].experience, "minimum 3 years");
        assert_eq!(jobs[0].skills, "c#, azure, kubernetes");
        assert!(jobs[0].summary.starts_with("Minimum 3 years"));
        // Detail page for the second job is missing: fields stay empty.
        assert_eq!(jobs[1].title, "Data Scientist");
        assert_eq!(jobs[1].experience, "");
        assert_eq!(jobs[1].summary, "");
        assert_eq!(jobs[1].url, "https://jobs.careers.microsoft.com/job/200");
    }

    #[test]
    fn test_falls_back_to_next_search_url() {
        let second = search_urls(1).remove(1);
        let pages = CannedPages::default().with(&second, RESULTS);

        let jobs = scrape_page(&pages, &ScrapeConfig::immediate(), 1);
        assert_eq!(jobs.len(), 2);
        assert!(pages.requested(&first_page_url()));
    }

    #[test]
    fn test_pagination_stops_at_empty_page() {
        let pages = CannedPages::default()
            .with(&first_page_url(), RESULTS)
            .with(&search_urls(2)[0], "<html><body><p>No results</p></body></html>");

        let jobs = scrape(&pages, &ScrapeConfig::immediate());
        assert_eq!(jobs.len(), 2);
        assert!(!pages.requested(&search_urls(3)[0]));
    }

    #[test]
    fn test_unreachable_site_yields_nothing() {
        let jobs = scrape(&CannedPages::default(), &ScrapeConfig::immediate());
        assert!(jobs.is_empty());
    }

    #[test]
    fn test_empty_page_is_dumped() {
        let dir = tempfile::tempdir().unwrap();
        let dump = dir.path().join("debug_page.html");
        let config = ScrapeConfig {
            debug_dump: Some(dump.clone()),
            ..ScrapeConfig::immediate()
        };
        let pages = CannedPages::default().with(&first_page_url(), "<html><body>empty</body></html>");

        assert!(scrape_page(&pages, &config, 1).is_empty());
        assert!(std::fs::read_to_string(&dump).unwrap().contains("empty"));
    }
}
