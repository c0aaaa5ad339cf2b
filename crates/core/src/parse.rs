//! Parsed HTML pages.
//!
//! This module provides the [`Page`] type: a permissively parsed HTML
//! document remembered together with the URL it was fetched from, so that
//! links found on it can be resolved.
//!
//! # Example
//!
//! ```rust
//! use paperchase_core::parse::Page;
//!
//! let page = Page::parse("https://x.org/list", r#"<p><a href="a.pdf">[PDF]</a></p>"#);
//! let anchors: Vec<_> = page.elements().filter(|el| el.value().name() == "a").collect();
//! assert_eq!(anchors.len(), 1);
//! ```

use scraper::{ElementRef, Html};

use crate::matcher::Matcher;

/// An HTML document and the URL it was served from.
///
/// Parsing never fails: malformed markup is repaired the way browsers do it.
pub struct Page {
    url: String,
    html: Html,
}

impl Page {
    /// Parses `body` as a full HTML document served from `url`.
    pub fn parse(url: &str, body: &str) -> Self {
        Self { url: url.to_string(), html: Html::parse_document(body) }
    }

    /// The URL the page was fetched from, used as the base for relative links.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Every element of the document in document order.
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.tree.root().descendants().filter_map(ElementRef::wrap)
    }

    /// Every element accepted by `matcher`, in document order.
    pub fn find_all(&self, matcher: Matcher) -> Vec<ElementRef<'_>> {
        self.elements().filter(|el| matcher.matches(el)).collect()
    }

    /// The first element accepted by `matcher`.
    pub fn find(&self, matcher: Matcher) -> Option<ElementRef<'_>> {
        self.elements().find(|el| matcher.matches(el))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head><title>Accepted Papers</title></head>
        <body>
            <h3><a href="/p/1">First</a></h3>
            <h3><a href="/p/2">Second</a></h3>
            <a href="/about">About</a>
        </body>
        </html>
    "#;

    fn heading_link(el: &ElementRef<'_>) -> bool {
        matcher::is_anchor(el) && matcher::parent(el).is_some_and(|p| matcher::is_tag(&p, "h3"))
    }

    #[test]
    fn test_page_keeps_url() {
        let page = Page::parse("https://conf.org/list", SAMPLE_HTML);
        assert_eq!(page.url(), "https://conf.org/list");
    }

    #[test]
    fn test_elements_in_document_order() {
        let page = Page::parse("https://conf.org/list", SAMPLE_HTML);
        let names: Vec<_> = page.elements().map(|el| el.value().name().to_string()).collect();
        assert_eq!(names.first().map(String::as_str), Some("html"));
        assert_eq!(names.iter().filter(|n| *n == "a").count(), 3);
    }

    #[test]
    fn test_find_all_and_find() {
        let page = Page::parse("https://conf.org/list", SAMPLE_HTML);
        let matcher = Matcher::new("heading link", heading_link);

        let found = page.find_all(matcher);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].value().attr("href"), Some("/p/1"));
        assert_eq!(found[1].value().attr("href"), Some("/p/2"));

        let first = page.find(matcher).unwrap();
        assert_eq!(first.value().attr("href"), Some("/p/1"));
    }

    #[test]
    fn test_malformed_markup_is_repaired() {
        let page = Page::parse("https://conf.org/list", "<div><h3><a href='x.pdf'>Paper</div>");
        assert_eq!(page.find_all(Matcher::new("heading link", heading_link)).len(), 1);
    }
}
