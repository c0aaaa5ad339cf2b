//! Writing papers to disk.
//!
//! Papers land in `<output>/<conference>/<year>/<file name>`, where the file
//! name is the last path segment of the download URL. A file that already
//! exists is never fetched again; that existence check is the only
//! deduplication between runs.

use std::path::{Path, PathBuf};

use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use url::Url;

use crate::conference::Conference;
use crate::fetch::Fetcher;
use crate::{PaperchaseError, Result};

/// What [`download_file`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The body was streamed to disk.
    Downloaded { bytes: u64 },
    /// The destination already existed; no request was made.
    AlreadyExists,
}

/// File name for a download URL: its last non-empty path segment.
pub fn file_name_for(url: &str) -> Result<String> {
    let parsed = Url::parse(url).map_err(|e| PaperchaseError::InvalidUrl(format!("{}: {}", url, e)))?;

    parsed
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .ok_or_else(|| PaperchaseError::NoFileName(url.to_string()))
}

/// Creates `<output>/<name>/<year>` if needed and returns it.
pub async fn create_conference_dir(output_dir: &Path, conference: &Conference) -> Result<PathBuf> {
    let dir = conference.directory(output_dir);
    fs::create_dir_all(&dir).await?;
    Ok(dir)
}

/// Streams `url` into `dest` unless `dest` already exists.
///
/// The destination is created before the request is sent. If the request or
/// the body stream fails, the partial file is removed again so the next run
/// retries it.
pub async fn download_file(fetcher: &Fetcher, url: &str, dest: &Path) -> Result<DownloadOutcome> {
    if fs::try_exists(dest).await? {
        tracing::debug!(path = %dest.display(), "skipping download, file already exists");
        return Ok(DownloadOutcome::AlreadyExists);
    }

    let mut file = File::create(dest).await?;

    match stream_to_file(fetcher, url, &mut file).await {
        Ok(bytes) => Ok(DownloadOutcome::Downloaded { bytes }),
        Err(e) => {
            drop(file);
            if let Err(cleanup) = fs::remove_file(dest).await {
                tracing::warn!(path = %dest.display(), error = %cleanup, "could not remove partial download");
            }
            Err(e)
        }
    }
}

async fn stream_to_file(fetcher: &Fetcher, url: &str, file: &mut File) -> Result<u64> {
    let mut response = fetcher.client().get(url).send().await?;

    if !response.status().is_success() {
        tracing::warn!(url, status = %response.status(), "download answered with non-success status");
    }

    let mut written = 0u64;
    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_for() {
        assert_eq!(file_name_for("https://x.org/papers/a.pdf").unwrap(), "a.pdf");
        assert_eq!(file_name_for("https://x.org/a.pdf?download=1").unwrap(), "a.pdf");
        assert_eq!(file_name_for("https://x.org/sec17-paper.pdf#page=2").unwrap(), "sec17-paper.pdf");
    }

    #[test]
    fn test_file_name_missing() {
        assert!(matches!(file_name_for("https://x.org/"), Err(PaperchaseError::NoFileName(_))));
        assert!(matches!(file_name_for("https://x.org/papers/"), Err(PaperchaseError::NoFileName(_))));
    }

    #[test]
    fn test_file_name_invalid_url() {
        assert!(matches!(file_name_for("a.pdf"), Err(PaperchaseError::InvalidUrl(_))));
    }
}
