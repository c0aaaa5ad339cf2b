//! Link and title extraction.
//!
//! These functions apply a [`Matcher`] to an already parsed [`Page`]. Link
//! extraction resolves each matched anchor's `href` against the page URL;
//! title extraction returns the rendered text of each match. Results keep
//! document order and are not deduplicated.

use crate::matcher::{self, Matcher};
use crate::parse::Page;
use crate::resolve::resolve_url;
use crate::{PaperchaseError, Result};

/// How many anchors matched when exactly one was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkCardinality {
    /// Exactly one anchor matched.
    Single,
    /// Several anchors matched; the first one was taken.
    Many(usize),
}

/// A resolved download URL plus how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    pub url: String,
    pub cardinality: LinkCardinality,
}

impl DownloadLink {
    /// True when more than one candidate matched and the first was used.
    pub fn is_ambiguous(&self) -> bool {
        matches!(self.cardinality, LinkCardinality::Many(_))
    }
}

/// Resolved `href` of every anchor selected by `matcher`.
///
/// An anchor without `href` is treated as an empty reference and resolves to
/// the page itself.
///
/// # Errors
///
/// Fails on the first link that cannot be resolved; the remaining links are
/// not returned.
pub fn extract_links(page: &Page, matcher: Matcher) -> Result<Vec<String>> {
    page.find_all(matcher)
        .iter()
        .map(|el| resolve_url(page.url(), matcher::attr(el, "href")))
        .collect()
}

/// Rendered text of every element selected by `matcher`.
pub fn extract_titles(page: &Page, matcher: Matcher) -> Vec<String> {
    page.find_all(matcher).iter().map(matcher::text).collect()
}

/// Picks the single download link on `page`.
///
/// Zero matches is an error; several matches yield the first resolved URL
/// tagged [`LinkCardinality::Many`] so the caller can warn and carry on.
pub fn select_download_link(page: &Page, matcher: Matcher) -> Result<DownloadLink> {
    let found = page.find_all(matcher);
    let first = found
        .first()
        .ok_or_else(|| PaperchaseError::MissingDownloadLink { page: page.url().to_string() })?;

    let url = resolve_url(page.url(), matcher::attr(first, "href"))?;
    let cardinality = match found.len() {
        1 => LinkCardinality::Single,
        n => LinkCardinality::Many(n),
    };

    Ok(DownloadLink { url, cardinality })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::ElementRef;

    fn pdf_text(el: &ElementRef<'_>) -> bool {
        matcher::is_anchor(el) && matcher::text(el) == "[PDF]"
    }

    fn list_item_title(el: &ElementRef<'_>) -> bool {
        matcher::is_tag(el, "b") && matcher::class_is(matcher::parent(el), "list-group-item")
    }

    const PDF: Matcher = Matcher::new("[PDF] anchor", pdf_text);
    const TITLE: Matcher = Matcher::new("list title", list_item_title);

    #[test]
    fn test_extract_links_resolves_in_order() {
        let page = Page::parse(
            "http://example/listing",
            r#"<a href="/papers/b.pdf">[PDF]</a><a href="other">x</a><a href="https://cdn.org/a.pdf">[PDF]</a>
               <a href="/papers/b.pdf">[PDF]</a>"#,
        );
        let links = extract_links(&page, PDF).unwrap();
        assert_eq!(
            links,
            vec![
                "http://example/papers/b.pdf".to_string(),
                "https://cdn.org/a.pdf".to_string(),
                "http://example/papers/b.pdf".to_string(),
            ]
        );
    }

    #[test]
    fn test_extract_links_empty_page() {
        let page = Page::parse("http://example/listing", "<p>nothing here</p>");
        assert!(extract_links(&page, PDF).unwrap().is_empty());
    }

    #[test]
    fn test_extract_links_bad_href_fails() {
        let page = Page::parse("http://example/listing", r#"<a href="http://[::1">[PDF]</a>"#);
        assert!(matches!(extract_links(&page, PDF), Err(PaperchaseError::InvalidUrl(_))));
    }

    #[test]
    fn test_extract_titles() {
        let page = Page::parse(
            "http://example/listing",
            r#"<ul>
                <li class="list-group-item"><b>Breaking   Things</b> by Someone</li>
                <li class="list-group-item"><b>Fixing <i>Things</i></b></li>
                <li class="other"><b>Not a title</b></li>
            </ul>"#,
        );
        assert_eq!(extract_titles(&page, TITLE), vec!["Breaking   Things", "Fixing Things"]);
    }

    #[test]
    fn test_select_single_link() {
        let page = Page::parse("https://x.org/p/1", r#"<a href="paper.pdf">[PDF]</a>"#);
        let link = select_download_link(&page, PDF).unwrap();
        assert_eq!(link.url, "https://x.org/p/paper.pdf");
        assert_eq!(link.cardinality, LinkCardinality::Single);
        assert!(!link.is_ambiguous());
    }

    #[test]
    fn test_select_missing_link() {
        let page = Page::parse("https://x.org/p/1", r#"<a href="paper.pdf">Slides</a>"#);
        let result = select_download_link(&page, PDF);
        assert!(matches!(result, Err(PaperchaseError::MissingDownloadLink { page }) if page == "https://x.org/p/1"));
    }

    #[test]
    fn test_select_many_takes_first() {
        let page = Page::parse(
            "https://x.org/p/1",
            r#"<a href="first.pdf">[PDF]</a><a href="second.pdf">[PDF]</a><a href="third.pdf">[PDF]</a>"#,
        );
        let link = select_download_link(&page, PDF).unwrap();
        assert_eq!(link.url, "https://x.org/p/first.pdf");
        assert_eq!(link.cardinality, LinkCardinality::Many(3));
        assert!(link.is_ambiguous());
    }
}
