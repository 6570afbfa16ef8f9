//! Job detail pages and record assembly.

use crate::cascade::{first, text_of};
use crate::fetch::Fetch;
use common::{summarize, Extractor, JobRecord};
use scraper::Html;
use std::time::Duration;
use tracing::warn;
use url::Url;

/// Fields taken from a job's own page. All empty when the page could not
/// be fetched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobDetail {
    pub experience: String,
    pub skills: String,
    pub summary: String,
    pub salary: String,
}

impl JobDetail {
    pub fn from_description(extractor: &Extractor, description: &str) -> Self {
        let extracted = extractor.extract(description);
        Self {
            skills: extracted.skills_joined(),
            experience: extracted.experience,
            summary: summarize(description),
            // Career sites in scope don't publish salaries.
            salary: String::new(),
        }
    }
}

/// A job card from a listing page, before its detail page is visited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub title: String,
    pub location: String,
    pub url: Option<Url>,
}

impl Listing {
    pub fn into_record(self, detail: JobDetail) -> JobRecord {
        JobRecord {
            title: self.title,
            location: self.location,
            experience: detail.experience,
            skills: detail.skills,
            salary: detail.salary,
            url: self.url.map(String::from).unwrap_or_default(),
            summary: detail.summary,
        }
    }
}

/// Text of the first description container found on the page.
pub fn description_of(html: &str, selectors: &[&str]) -> String {
    let document = Html::parse_document(html);
    first(document.root_element(), selectors)
        .map(text_of)
        .unwrap_or_default()
}

/// Fetches a detail page and extracts its fields. Failures are logged and
/// degrade to an empty detail.
pub fn fetch_detail<F: Fetch + ?Sized>(
    fetcher: &F,
    url: &Url,
    selectors: &[&str],
    extractor: &Extractor,
    timeout: Duration,
) -> JobDetail {
    match fetcher.fetch(url, timeout) {
        Ok(html) => JobDetail::from_description(extractor, &description_of(&html, selectors)),
        Err(e) => {
            warn!("error fetching job details: {}", e);
            JobDetail::default()
        }
    }
}
