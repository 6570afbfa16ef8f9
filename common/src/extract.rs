//! Experience and skill inference over free-form job description text.

use regex::Regex;
use std::sync::LazyLock;

/// Experience patterns in priority order. Only the first pattern with a
/// match contributes.
const EXPERIENCE_PATTERNS: [&str; 5] = [
    r"\d+\+?\s*years?\s*(?:of\s*)?experience",
    r"minimum\s*\d+\s*years?",
    r"\d+\s*to\s*\d+\s*years?",
    r"entry\s*level|junior|senior|principal|lead",
    r"bachelor|master|phd|degree",
];

static EXPERIENCE_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    EXPERIENCE_PATTERNS
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
});

/// Broad technology vocabulary, used unless a scraper picks another one.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python", "java", "javascript", "typescript", "go", "rust", "c#", "c++",
    "sql", "html", "css", "react", "vue", "angular", "node.js", "docker",
    "kubernetes", "aws", "azure", "gcp", "git", "github", "linux", "bash",
    "machine learning", "ai", "data science", "analytics", "cloud",
    "agile", "scrum", "devops", "ci/cd", "terraform", "ansible",
];

/// Vocabulary tuned for large enterprise career sites.
pub const ENTERPRISE_SKILLS: &[&str] = &[
    "python", "java", "javascript", "c#", "c++", "sql", "azure", "aws",
    "react", "angular", "node.js", "kubernetes", "docker", "git",
    "machine learning", "ai", "data science", "analytics", "cloud",
    "agile", "scrum", "devops", "ci/cd", "tensorflow", "pytorch",
];

pub const MAX_SKILLS: usize = 10;

/// Characters kept by [`summarize`] before the ellipsis.
pub const SUMMARY_CHARS: usize = 200;
pub const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResult {
    pub experience: String,
    /// In vocabulary order, at most [`MAX_SKILLS`] entries.
    pub skills: Vec<String>,
}

impl ExtractionResult {
    /// Skills as a single sheet cell.
    pub fn skills_joined(&self) -> String {
        self.skills.join(", ")
    }
}

/// Infers an experience tag and a skill list from description text.
///
/// Matching is case-insensitive and depends only on the input and the
/// fixed pattern table plus the chosen vocabulary.
#[derive(Debug, Clone, Copy)]
pub struct Extractor {
    vocabulary: &'static [&'static str],
}

impl Default for Extractor {
    fn default() -> Self {
        Self::with_vocabulary(DEFAULT_SKILLS)
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vocabulary(vocabulary: &'static [&'static str]) -> Self {
        Self { vocabulary }
    }

    pub fn extract(&self, text: &str) -> ExtractionResult {
        if text.is_empty() {
            return ExtractionResult::default();
        }

        let lowered = text.to_lowercase();
        ExtractionResult {
            experience: experience_in(&lowered),
            skills: self.skills_in(&lowered),
        }
    }

    /// First match of the highest-priority experience pattern, or empty.
    pub fn experience(&self, text: &str) -> String {
        experience_in(&text.to_lowercase())
    }

    pub fn skills(&self, text: &str) -> Vec<String> {
        self.skills_in(&text.to_lowercase())
    }

    fn skills_in(&self, lowered: &str) -> Vec<String> {
        self.vocabulary
            .iter()
            .filter(|skill| lowered.contains(skill.to_lowercase().as_str()))
            .take(MAX_SKILLS)
            .map(|skill| skill.to_string())
            .collect()
    }
}

fn experience_in(lowered: &str) -> String {
    EXPERIENCE_REGEXES
        .iter()
        .find_map(|re| re.find(lowered))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Truncates a description to [`SUMMARY_CHARS`] characters plus an
/// ellipsis. Shorter text is returned unchanged.
pub fn summarize(description: &str) -> String {
    clip(description, SUMMARY_CHARS)
}

/// Keeps the first `max_chars` characters, marking any cut with [`ELLIPSIS`].
pub fn clip(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}
