//! Scraper configuration with the defaults the scraper was built for.
//!
//! [`ScrapeConfig`] is fixed before a run starts: either the defaults or a
//! TOML file whose keys override them.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Page the scraper was written against
pub const DEFAULT_URL: &str = "https://www.amazon.co.jp/s?k=python+%E6%9C%AC";
pub const DEFAULT_JSON_PATH: &str = "amazon_products.json";
pub const DEFAULT_CSV_PATH: &str = "amazon_products.csv";
/// Class carried by product title links in the target site's markup
pub const DEFAULT_LINK_CLASS: &str = "s-underline-text";

/// Configuration for one scraper run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrapeConfig {
    /// Page to fetch. Also the base for resolving root-relative links.
    pub url: String,
    /// JSON output file, overwritten on every run that finds links.
    pub json_path: PathBuf,
    /// CSV output file, overwritten on every run that finds links.
    pub csv_path: PathBuf,
    /// Anchors carrying this class are treated as product links.
    pub link_class: String,
    /// Custom User-Agent header. If `None`, the HTTP client's default is sent.
    pub user_agent: Option<String>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            json_path: PathBuf::from(DEFAULT_JSON_PATH),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            link_class: DEFAULT_LINK_CLASS.to_string(),
            user_agent: None,
        }
    }
}

impl ScrapeConfig {
    /// Load a configuration from a TOML file; absent keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
