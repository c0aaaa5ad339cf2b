//! Download URL resolution.
//!
//! A paper page is expected to carry exactly one link to the paper itself.
//! [`resolve_download_url`] fetches the page, applies the matcher and reports
//! the cardinality of what it found. Links into [`GATED_HOST`] get one extra
//! hop through the aggregator's "All N versions" listing, which often lists
//! a mirror that serves the file directly.
//!
//! [`GATED_HOST`]: crate::scholar::GATED_HOST

use crate::extract::{DownloadLink, select_download_link};
use crate::fetch::Fetcher;
use crate::matcher::{self, Matcher};
use crate::resolve::resolve_url;
use crate::scholar;
use crate::{PaperchaseError, Result};

/// How many "All N versions" listings may be followed for one paper.
const MAX_VERSION_HOPS: usize = 1;

/// Fetches `page_url` and resolves the single download link selected by `matcher`.
///
/// A gated link found after the version listing hop is returned as is.
///
/// # Errors
///
/// - [`PaperchaseError::MissingDownloadLink`] if nothing matched; callers skip the paper.
/// - [`PaperchaseError::MissingVersionsLink`] if a gated link was found but the
///   page has no "All N versions" anchor.
/// - Fetch and URL errors as returned by [`Fetcher::fetch_page`] and [`resolve_url`].
pub async fn resolve_download_url(fetcher: &Fetcher, page_url: &str, matcher: Matcher) -> Result<DownloadLink> {
    resolve_with_hops(fetcher, page_url, matcher, MAX_VERSION_HOPS).await
}

async fn resolve_with_hops(
    fetcher: &Fetcher,
    page_url: &str,
    matcher: Matcher,
    hops_left: usize,
) -> Result<DownloadLink> {
    let (link, versions_url) = {
        let page = fetcher.fetch_page(page_url).await?;
        let link = select_download_link(&page, matcher)?;

        if link.is_ambiguous() || !scholar::is_gated(&link.url) {
            return Ok(link);
        }
        if hops_left == 0 {
            tracing::warn!(page = page_url, url = %link.url, "version listing still points at the gated host");
            return Ok(link);
        }

        let versions = page
            .find(scholar::ALL_VERSIONS)
            .ok_or_else(|| PaperchaseError::MissingVersionsLink { page: page_url.to_string() })?;
        let versions_url = resolve_url(page.url(), matcher::attr(&versions, "href"))?;
        (link, versions_url)
    };

    tracing::info!(gated = %link.url, versions = %versions_url, "following version listing for gated link");

    Box::pin(resolve_with_hops(fetcher, &versions_url, scholar::UNGATED_PDF_RESULT, hops_left - 1)).await
}
