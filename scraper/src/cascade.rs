//! Ordered selector fallback.
//!
//! Listing pages change markup often, so every lookup carries a list of
//! selectors tried in order. The first selector that matches anything wins.

use scraper::{ElementRef, Selector};
use tracing::warn;
use url::Url;

/// Result of the winning selector.
#[derive(Debug, Clone)]
pub struct Hit<'a, 's> {
    pub selector: &'s str,
    pub elements: Vec<ElementRef<'a>>,
}

fn parse(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("skipping invalid selector {:?}: {}", selector, e);
            None
        }
    }
}

/// All matches of the first selector in `selectors` that matches anything
/// under `scope`.
pub fn cascade<'a, 's>(scope: ElementRef<'a>, selectors: &[&'s str]) -> Option<Hit<'a, 's>> {
    selectors.iter().find_map(|&selector| {
        let parsed = parse(selector)?;
        let elements: Vec<_> = scope.select(&parsed).collect();
        (!elements.is_empty()).then_some(Hit { selector, elements })
    })
}

/// First element of the winning selector.
pub fn first<'a>(scope: ElementRef<'a>, selectors: &[&str]) -> Option<ElementRef<'a>> {
    selectors.iter().find_map(|selector| {
        let parsed = parse(selector)?;
        scope.select(&parsed).next()
    })
}

/// Trimmed text of the first winning element, or empty.
pub fn first_text(scope: ElementRef<'_>, selectors: &[&str]) -> String {
    first(scope, selectors).map(text_of).unwrap_or_default()
}

/// Visible text of an element: trimmed text nodes joined by single spaces.
pub fn text_of(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The element's `href` resolved against the page it came from.
pub fn link_of(element: ElementRef<'_>, base: &Url) -> Option<Url> {
    let href = element.value().attr("href")?;
    base.join(href).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    const PAGE: &str = r#"
        <html><body>
          <div class="result-item"><h2><a href="/job/1">First</a></h2></div>
          <div class="result-item"><h2><a href="https://other.example/job/2">Second</a></h2></div>
          <article>Article</article>
          <p class="location">  Seattle,
             <b>WA</b> </p>
        </body></html>
    "#;

    #[test]
    fn test_first_matching_selector_wins() {
        let doc = Html::parse_document(PAGE);
        let hit = cascade(doc.root_element(), &[".jobs-list-item", ".result-item", "article"]).unwrap();
        assert_eq!(hit.selector, ".result-item");
        assert_eq!(hit.elements.len(), 2);
    }

    #[test]
    fn test_no_selector_matches() {
        let doc = Html::parse_document(PAGE);
        assert!(cascade(doc.root_element(), &[".job-item", "table"]).is_none());
        assert!(cascade(doc.root_element(), &[]).is_none());
        assert_eq!(first_text(doc.root_element(), &[".job-title"]), "");
    }

    #[test]
    fn test_invalid_selector_is_skipped() {
        let doc = Html::parse_document(PAGE);
        let hit = cascade(doc.root_element(), &["[[broken", "article"]).unwrap();
        assert_eq!(hit.selector, "article");
    }

    #[test]
    fn test_text_collapses_nodes() {
        let doc = Html::parse_document(PAGE);
        assert_eq!(first_text(doc.root_element(), &[".location"]), "Seattle, WA");
    }

    #[test]
    fn test_links_resolve_against_base() {
        let doc = Html::parse_document(PAGE);
        let base = Url::parse("https://careers.example.com/search?from=0").unwrap();
        let hit = cascade(doc.root_element(), &["h2 a"]).unwrap();
        let links: Vec<_> = hit
            .elements
            .iter()
            .filter_map(|a| link_of(*a, &base))
            .map(String::from)
            .collect();
        assert_eq!(
            links,
            vec!["https://careers.example.com/job/1", "https://other.example/job/2"]
        );
    }
}
