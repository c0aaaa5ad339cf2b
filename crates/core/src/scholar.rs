//! Scholarly search aggregator helpers.
//!
//! Some proceedings only publish paper titles. For those, the title is looked
//! up on a scholarly search engine and the PDF link is taken from its result
//! page. The same aggregator is used to get around [`GATED_HOST`], whose paper
//! pages only hand out files after client-side script checks.

use std::sync::LazyLock;

use regex::Regex;
use scraper::ElementRef;
use url::Url;

use crate::matcher::{self, Matcher};
use crate::{PaperchaseError, Result};

/// Default search endpoint; the title goes in the `q` parameter.
pub const DEFAULT_SCHOLAR_URL: &str = "https://scholar.google.com/scholar";

/// Host whose paper pages never expose a directly fetchable PDF.
pub const GATED_HOST: &str = "www.ieee-security.org";

/// `class` of the element wrapping a result's direct PDF link.
const PDF_LINK_CLASS: &str = "gs_or_ggsm";

static ALL_VERSIONS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^All \d+ versions$").unwrap());

fn pdf_result_link(el: &ElementRef<'_>) -> bool {
    matcher::is_anchor(el)
        && matcher::attr(el, "href").ends_with(".pdf")
        && matcher::class_is(matcher::parent(el), PDF_LINK_CLASS)
}

fn ungated_pdf_result_link(el: &ElementRef<'_>) -> bool {
    pdf_result_link(el) && !matcher::attr(el, "href").contains(GATED_HOST)
}

fn all_versions_link(el: &ElementRef<'_>) -> bool {
    matcher::is_anchor(el) && ALL_VERSIONS_RE.is_match(&matcher::text(el))
}

/// PDF links in a search result list.
pub const PDF_RESULT: Matcher = Matcher::new("search result PDF", pdf_result_link);

/// PDF links in a version listing, excluding ones that lead back to [`GATED_HOST`].
pub const UNGATED_PDF_RESULT: Matcher = Matcher::new("ungated search result PDF", ungated_pdf_result_link);

/// The "All N versions" link of a search result.
pub const ALL_VERSIONS: Matcher = Matcher::new("all versions link", all_versions_link);

/// Whether `url` is served by [`GATED_HOST`].
pub fn is_gated(url: &str) -> bool {
    Url::parse(url).is_ok_and(|u| u.host_str() == Some(GATED_HOST))
}

/// Builds the search URL for a paper title.
///
/// # Example
///
/// ```rust
/// use paperchase_core::scholar::{DEFAULT_SCHOLAR_URL, search_url};
///
/// let url = search_url(DEFAULT_SCHOLAR_URL, "Spectre Attacks").unwrap();
/// assert_eq!(url, "https://scholar.google.com/scholar?q=Spectre+Attacks");
/// ```
pub fn search_url(endpoint: &str, title: &str) -> Result<String> {
    let url = Url::parse_with_params(endpoint, &[("q", title)])
        .map_err(|e| PaperchaseError::InvalidUrl(format!("{}: {}", endpoint, e)))?;
    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Page;

    const RESULTS: &str = r#"
        <div class="gs_r">
            <div class="gs_or_ggsm"><a href="https://mirror.org/paper.pdf">[PDF] mirror.org</a></div>
            <div class="gs_or_ggsm"><a href="https://www.ieee-security.org/TC/SP2016/papers/0824a.pdf">[PDF]</a></div>
            <div class="gs_or_ggsm"><a href="https://mirror.org/slides.ppt">[PPT]</a></div>
            <div class="gs_ggsd"><a href="https://other.org/x.pdf">[PDF]</a></div>
            <div class="gs_fl"><a href="/scholar?cluster=1">All 12 versions</a> <a href="/x">All versions</a></div>
        </div>
    "#;

    #[test]
    fn test_pdf_result_matcher() {
        let page = Page::parse("https://scholar.example/scholar?q=x", RESULTS);
        assert_eq!(page.find_all(PDF_RESULT).len(), 2);
    }

    #[test]
    fn test_ungated_pdf_result_matcher() {
        let page = Page::parse("https://scholar.example/scholar?q=x", RESULTS);
        let found = page.find_all(UNGATED_PDF_RESULT);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value().attr("href"), Some("https://mirror.org/paper.pdf"));
    }

    #[test]
    fn test_all_versions_matcher() {
        let page = Page::parse("https://scholar.example/scholar?q=x", RESULTS);
        let found = page.find_all(ALL_VERSIONS);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].value().attr("href"), Some("/scholar?cluster=1"));
    }

    #[test]
    fn test_is_gated() {
        assert!(is_gated("https://www.ieee-security.org/TC/SP2016/papers/0824a.pdf"));
        assert!(!is_gated("https://mirror.org/www.ieee-security.org.pdf"));
        assert!(!is_gated("not a url"));
    }

    #[test]
    fn test_search_url_encodes_title() {
        let url = search_url("http://127.0.0.1:1234/scholar", "SoK: Eternal War & Memory").unwrap();
        assert_eq!(url, "http://127.0.0.1:1234/scholar?q=SoK%3A+Eternal+War+%26+Memory");
    }

    #[test]
    fn test_search_url_bad_endpoint() {
        assert!(matches!(search_url("scholar", "x"), Err(PaperchaseError::InvalidUrl(_))));
    }
}
