//! Run configuration.
//!
//! A [`RunConfig`] is assembled once at startup and passed by reference to
//! the driver; nothing reads configuration from global state.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use paperchase_core::{Conference, RunConfig};
//!
//! let config = RunConfig::builder()
//!     .delay(Duration::from_millis(500))
//!     .output_dir("out")
//!     .conferences(vec![Conference::new("CCS", "http://example/listing", 2017)])
//!     .build();
//! assert_eq!(config.conferences.len(), 1);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::conference::Conference;
use crate::scholar::DEFAULT_SCHOLAR_URL;

/// Settings for one harvesting run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Pause after every download attempt (default: 2 s).
    pub delay: Duration,

    /// Where the conference list was read from (default: `conferences.json`).
    pub conferences_file: PathBuf,

    /// Root of the paper tree (default: `papers`).
    pub output_dir: PathBuf,

    /// Search endpoint used for title-only listings.
    pub scholar_url: String,

    /// Conferences to harvest, in order.
    pub conferences: Vec<Conference>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(2),
            conferences_file: PathBuf::from("conferences.json"),
            output_dir: PathBuf::from("papers"),
            scholar_url: DEFAULT_SCHOLAR_URL.to_string(),
            conferences: Vec::new(),
        }
    }
}

impl RunConfig {
    /// Creates a new builder for RunConfig.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
    }
}

/// Builder for RunConfig.
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: RunConfig::default() }
    }

    /// Sets the pause between downloads.
    pub fn delay(mut self, value: Duration) -> Self {
        self.config.delay = value;
        self
    }

    pub fn conferences_file(mut self, value: impl Into<PathBuf>) -> Self {
        self.config.conferences_file = value.into();
        self
    }

    /// Sets the output directory.
    pub fn output_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.config.output_dir = value.into();
        self
    }

    /// Sets the search endpoint for title-only listings.
    pub fn scholar_url(mut self, value: impl Into<String>) -> Self {
        self.config.scholar_url = value.into();
        self
    }

    pub fn conferences(mut self, value: Vec<Conference>) -> Self {
        self.config.conferences = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> RunConfig {
        self.config
    }
}

impl Default for RunConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
