//! Conference entries and the JSON conference list.
//!
//! The list is an ordered JSON array:
//!
//! ```json
//! [
//!     { "name": "CCS", "url": "https://www.sigsac.org/ccs/CCS2017/accepted-papers.html", "year": 2017 },
//!     { "name": "NDSS", "url": "https://www.ndss-symposium.org/ndss2018/programme/", "year": 2018 }
//! ]
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{PaperchaseError, Result};

/// One proceedings listing to harvest. Identity is `(name, year)`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Conference {
    pub name: String,
    /// Listing page URL.
    pub url: String,
    pub year: i32,
}

impl Conference {
    pub fn new(name: impl Into<String>, url: impl Into<String>, year: i32) -> Self {
        Self { name: name.into(), url: url.into(), year }
    }

    /// `<output_dir>/<name>/<year>`.
    pub fn directory(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.name).join(self.year.to_string())
    }
}

impl fmt::Display for Conference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.year)
    }
}

/// Decodes a conference list from JSON text.
pub fn parse_conferences(json: &str) -> serde_json::Result<Vec<Conference>> {
    serde_json::from_str(json)
}

/// Reads and decodes the conference list at `path`.
///
/// # Errors
///
/// Returns [`PaperchaseError::ConfigError`] when the file cannot be read or
/// is not a valid conference list.
pub fn load_conferences(path: &Path) -> Result<Vec<Conference>> {
    let config_error = |reason: String| PaperchaseError::ConfigError { path: path.to_path_buf(), reason };

    let json = fs::read_to_string(path).map_err(|e| config_error(e.to_string()))?;
    parse_conferences(&json).map_err(|e| config_error(e.to_string()))
}
