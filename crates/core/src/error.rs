//! Error types for paperchase operations.
//!
//! [`PaperchaseError`] covers every failure the library can report while
//! fetching listing pages, resolving links, and writing papers to disk.
//! Only [`PaperchaseError::MissingDownloadLink`] and download-time failures are
//! treated as recoverable by the driver; everything else aborts the run.
//!
//! # Example
//!
//! ```rust
//! use paperchase_core::{PaperchaseError, Result};
//!
//! fn first_link(links: &[String], page: &str) -> Result<String> {
//!     links
//!         .first()
//!         .cloned()
//!         .ok_or_else(|| PaperchaseError::MissingDownloadLink { page: page.to_string() })
//! }
//! # assert!(first_link(&[], "https://example.org").is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for paper discovery and download.
#[derive(Error, Debug)]
pub enum PaperchaseError {
    /// HTTP request errors from reqwest.
    ///
    /// Wraps DNS failures, refused connections, and body read failures.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// A base URL or link could not be parsed or resolved.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The matcher found no download anchor on the page.
    #[error("No download link found on {page}")]
    MissingDownloadLink { page: String },

    /// A gated paper page did not offer an "All N versions" listing.
    #[error("No version listing link found on {page}")]
    MissingVersionsLink { page: String },

    /// The download URL has no final path segment to name the file after.
    #[error("Cannot derive a file name from {0}")]
    NoFileName(String),

    /// File system errors while creating directories or writing papers.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The conference list could not be read or decoded.
    #[error("Configuration error in {path}: {reason}")]
    ConfigError { path: PathBuf, reason: String },
}

impl PaperchaseError {
    /// Whether the driver may skip the current paper and keep going.
    pub fn is_skippable(&self) -> bool {
        matches!(self, PaperchaseError::MissingDownloadLink { .. })
    }
}

/// Result type alias for PaperchaseError.
pub type Result<T> = std::result::Result<T, PaperchaseError>;
