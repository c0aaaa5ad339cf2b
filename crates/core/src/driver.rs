//! The per-conference harvesting loop.
//!
//! [`run`] walks the configured conferences in order, one request at a time.
//! Failures are split in two groups. A missing download link or a failed
//! download only costs the current paper; the loop logs it and moves on.
//! Every other error (an unreachable listing page, an unresolvable link, a
//! gated page without a version listing) aborts the whole run.

use std::path::PathBuf;

use crate::config::RunConfig;
use crate::conference::Conference;
use crate::download::{DownloadOutcome, create_conference_dir, download_file, file_name_for};
use crate::extract::{LinkCardinality, extract_links, extract_titles};
use crate::fetch::Fetcher;
use crate::matcher::Matcher;
use crate::resolver::resolve_download_url;
use crate::scholar;
use crate::sites::{Recipe, recipe_for, supported_conferences};
use crate::Result;

/// Counters for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Papers written to disk.
    pub downloaded: usize,
    /// Total bytes written.
    pub bytes: u64,
    /// Papers skipped because the file was already there.
    pub already_present: usize,
    /// Paper pages or searches without a usable download link.
    pub missing_links: usize,
    /// Search results that still pointed at the gated host.
    pub gated: usize,
    /// Downloads that failed (bad file name, network or disk error).
    pub failed: usize,
    /// Conference entries without a matching recipe.
    pub unmatched: usize,
}

/// Harvests every conference in `config` with a fresh HTTP client.
pub async fn run(config: &RunConfig) -> Result<RunSummary> {
    run_with(&Fetcher::new(), config).await
}

/// Harvests every conference in `config` using `fetcher`.
pub async fn run_with(fetcher: &Fetcher, config: &RunConfig) -> Result<RunSummary> {
    tokio::fs::create_dir_all(&config.output_dir).await?;

    let mut summary = RunSummary::default();

    for conference in &config.conferences {
        let recipe = match recipe_for(&conference.name, conference.year) {
            Ok(recipe) => recipe,
            Err(reason) => {
                tracing::info!(
                    %conference,
                    ?reason,
                    supported = ?supported_conferences(),
                    "no parser found for {}",
                    conference
                );
                summary.unmatched += 1;
                continue;
            }
        };

        let dir = create_conference_dir(&config.output_dir, conference).await?;
        tracing::info!(%conference, dir = %dir.display(), "harvesting");

        let mut harvest = Harvest { fetcher, config, dir, summary: &mut summary };
        harvest.run(conference, recipe).await?;
    }

    Ok(summary)
}

/// State for harvesting a single conference.
struct Harvest<'a> {
    fetcher: &'a Fetcher,
    config: &'a RunConfig,
    dir: PathBuf,
    summary: &'a mut RunSummary,
}

impl Harvest<'_> {
    async fn run(&mut self, conference: &Conference, recipe: Recipe) -> Result<()> {
        let listing = self.fetcher.fetch_page(&conference.url).await?;

        match recipe {
            Recipe::DirectLinks { links } => {
                let links = extract_links(&listing, links)?;
                drop(listing);
                for link in links {
                    self.save(&link).await;
                }
            }
            Recipe::PaperPages { pages, pdf } => {
                let pages = extract_links(&listing, pages)?;
                drop(listing);
                for page in pages {
                    if let Some(url) = self.resolve(&page, pdf).await? {
                        self.save(&url).await;
                    }
                }
            }
            Recipe::TitleSearch { titles, pdf } => {
                let titles = extract_titles(&listing, titles);
                drop(listing);
                for title in titles {
                    let search = scholar::search_url(&self.config.scholar_url, &title)?;
                    let Some(url) = self.resolve(&search, pdf).await? else {
                        continue;
                    };

                    tracing::info!(%title, %url, "found paper");
                    if scholar::is_gated(&url) {
                        tracing::info!(%url, "skipping download, {} checks JavaScript before serving files", scholar::GATED_HOST);
                        self.summary.gated += 1;
                        self.throttle().await;
                    } else {
                        self.save(&url).await;
                    }
                }
            }
        }

        Ok(())
    }

    /// Resolves the download link on `page`; `None` means skip this paper.
    async fn resolve(&mut self, page: &str, matcher: Matcher) -> Result<Option<String>> {
        match resolve_download_url(self.fetcher, page, matcher).await {
            Ok(link) => {
                if let LinkCardinality::Many(count) = link.cardinality {
                    tracing::warn!(page, count, url = %link.url, "too many download links, using the first");
                }
                Ok(Some(link.url))
            }
            Err(e) if e.is_skippable() => {
                tracing::warn!(page, "{}", e);
                self.summary.missing_links += 1;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Downloads `url` into the conference directory, then throttles.
    async fn save(&mut self, url: &str) {
        tracing::info!(url, "downloading");

        let outcome = match file_name_for(url) {
            Ok(name) => download_file(self.fetcher, url, &self.dir.join(name)).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(DownloadOutcome::Downloaded { bytes }) => {
                self.summary.downloaded += 1;
                self.summary.bytes += bytes;
            }
            Ok(DownloadOutcome::AlreadyExists) => {
                tracing::info!(url, "skipping download, file already exists");
                self.summary.already_present += 1;
            }
            Err(e) => {
                tracing::warn!(url, error = %e, "download failed");
                self.summary.failed += 1;
            }
        }

        self.throttle().await;
    }

    async fn throttle(&self) {
        tracing::debug!(delay_ms = self.config.delay.as_millis() as u64, "throttling");
        tokio::time::sleep(self.config.delay).await;
    }
}
