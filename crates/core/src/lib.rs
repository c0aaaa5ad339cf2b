pub mod conference;
pub mod config;
pub mod download;
pub mod driver;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod matcher;
pub mod parse;
pub mod resolve;
pub mod resolver;
pub mod scholar;
pub mod sites;

pub use conference::{Conference, load_conferences, parse_conferences};
pub use config::{RunConfig, RunConfigBuilder};
pub use download::{DownloadOutcome, create_conference_dir, download_file, file_name_for};
pub use driver::{RunSummary, run, run_with};
pub use error::{PaperchaseError, Result};
pub use extract::{DownloadLink, LinkCardinality, extract_links, extract_titles, select_download_link};
pub use fetch::Fetcher;
pub use matcher::Matcher;
pub use parse::Page;
pub use resolve::resolve_url;
pub use resolver::resolve_download_url;
pub use sites::{NoRecipe, Recipe, YearRule, recipe_for};
