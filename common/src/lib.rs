//! Shared job sheet model and the text field extractor.

pub mod error;
pub mod extract;
pub mod sheet;

pub use error::SheetError;
pub use extract::{ExtractionResult, Extractor, clip, summarize};

use serde::{Deserialize, Serialize};

/// Column order of every job sheet.
pub const COLUMNS: [&str; 7] = [
    "JobTitle",
    "Location",
    "ExperienceRequired",
    "SkillsRequired",
    "Salary",
    "JobURL",
    "JobDescriptionSummary",
];

/// One row of a job sheet. Missing values are empty strings.
///
/// Field order matches [`COLUMNS`]; the csv serializer derives the header
/// row from it.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct JobRecord {
    #[serde(rename = "JobTitle", default)]
    pub title: String,
    #[serde(rename = "Location", default)]
    pub location: String,
    #[serde(rename = "ExperienceRequired", default)]
    pub experience: String,
    #[serde(rename = "SkillsRequired", default)]
    pub skills: String,
    #[serde(rename = "Salary", default)]
    pub salary: String,
    #[serde(rename = "JobURL", default)]
    pub url: String,
    #[serde(rename = "JobDescriptionSummary", default)]
    pub summary: String,
}

impl JobRecord {
    /// Cells in [`COLUMNS`] order.
    pub fn cells(&self) -> [&str; 7] {
        [
            &self.title,
            &self.location,
            &self.experience,
            &self.skills,
            &self.salary,
            &self.url,
            &self.summary,
        ]
    }
}

/// Fill counts printed after a sheet is saved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JobStats {
    pub total: usize,
    pub with_experience: usize,
    pub with_skills: usize,
    pub with_summary: usize,
}

impl JobStats {
    pub fn from_records(jobs: &[JobRecord]) -> Self {
        let count = |f: fn(&JobRecord) -> &str| jobs.iter().filter(|j| !f(j).is_empty()).count();
        Self {
            total: jobs.len(),
            with_experience: count(|j| j.experience.as_str()),
            with_skills: count(|j| j.skills.as_str()),
            with_summary: count(|j| j.summary.as_str()),
        }
    }
}
