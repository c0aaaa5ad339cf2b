//! Page fetching.
//!
//! [`Fetcher`] wraps a single HTTP client that is shared by every request of a
//! run. Requests use the client defaults: no timeout, default redirect
//! handling, no extra headers. The response status is not inspected, so an
//! error page is parsed and scraped like any other.

use reqwest::Client;
use url::Url;

use crate::parse::Page;
use crate::{PaperchaseError, Result};

/// Shared HTTP client for listing pages, paper pages and downloads.
#[derive(Debug, Clone, Default)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Fetches `url` and parses the body as HTML.
    ///
    /// # Errors
    ///
    /// Returns [`PaperchaseError::InvalidUrl`] for an unparseable URL and
    /// [`PaperchaseError::HttpError`] for transport failures.
    pub async fn fetch_page(&self, url: &str) -> Result<Page> {
        let parsed_url = Url::parse(url).map_err(|e| PaperchaseError::InvalidUrl(format!("{}: {}", url, e)))?;

        tracing::debug!(url, "fetching page");
        let response = self.client.get(parsed_url).send().await?;
        let body = response.text().await?;

        Ok(Page::parse(url, &body))
    }
}
