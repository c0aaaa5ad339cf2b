//! Relative link resolution.
//!
//! Links scraped out of `href` attributes are frequently relative to the page
//! they were found on. [`resolve_url`] turns them into absolute URLs using
//! RFC 3986 reference resolution.

use url::Url;

use crate::{PaperchaseError, Result};

/// Resolves `link` against the page at `base`.
///
/// A link that already carries a scheme and a host is returned exactly as
/// written. Anything else (relative paths, protocol-relative `//host/path`,
/// query-only or fragment-only references) is joined onto `base`.
///
/// # Errors
///
/// Returns [`PaperchaseError::InvalidUrl`] if `link` is syntactically invalid,
/// or if it needs resolving and `base` cannot be parsed.
///
/// # Example
///
/// ```rust
/// use paperchase_core::resolve_url;
///
/// let url = resolve_url("https://x.org/a/b", "c.pdf").unwrap();
/// assert_eq!(url, "https://x.org/a/c.pdf");
/// ```
pub fn resolve_url(base: &str, link: &str) -> Result<String> {
    match Url::parse(link) {
        Ok(parsed) if parsed.host_str().is_some_and(|host| !host.is_empty()) => return Ok(link.to_string()),
        Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => {}
        Err(e) => return Err(PaperchaseError::InvalidUrl(format!("{}: {}", link, e))),
    }

    let base_url = Url::parse(base).map_err(|e| PaperchaseError::InvalidUrl(format!("{}: {}", base, e)))?;
    let resolved = base_url
        .join(link)
        .map_err(|e| PaperchaseError::InvalidUrl(format!("{} against {}: {}", link, base, e)))?;

    Ok(resolved.into())
}
