//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP client behavior settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Target site URL conventions
    #[serde(default)]
    pub site: SiteConfig,

    /// Output location settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.scraper.user_agent.trim().is_empty() {
            return Err(AppError::config("scraper.user_agent is empty"));
        }
        if self.scraper.timeout_secs == 0 {
            return Err(AppError::config("scraper.timeout_secs must be > 0"));
        }
        if !self.site.home_url.starts_with("http") {
            return Err(AppError::config("site.home_url must be an absolute URL"));
        }
        // Origins are concatenated with relative paths, so the trailing slash matters.
        if !self.site.site_origin.ends_with('/') {
            return Err(AppError::config("site.site_origin must end with '/'"));
        }
        if !self.site.catalogue_origin.ends_with('/') {
            return Err(AppError::config("site.catalogue_origin must end with '/'"));
        }
        if self.output.root_dir.trim().is_empty() {
            return Err(AppError::config("output.root_dir is empty"));
        }
        Ok(())
    }
}

/// HTTP client behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Fixed URL conventions of the target site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Home page carrying the category navigation
    #[serde(default = "defaults::home_url")]
    pub home_url: String,

    /// Origin prefix for image paths
    #[serde(default = "defaults::site_origin")]
    pub site_origin: String,

    /// Origin prefix for product page links
    #[serde(default = "defaults::catalogue_origin")]
    pub catalogue_origin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_url: defaults::home_url(),
            site_origin: defaults::site_origin(),
            catalogue_origin: defaults::catalogue_origin(),
        }
    }
}

/// Output location settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory for per-category output directories
    #[serde(default = "defaults::output_root")]
    pub root_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: defaults::output_root(),
        }
    }
}

mod defaults {
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; bookscrape/0.1)".to_string()
    }

    pub fn timeout() -> u64 {
        30
    }

    pub fn home_url() -> String {
        "http://books.toscrape.com/index.html".to_string()
    }

    pub fn site_origin() -> String {
        "http://books.toscrape.com/".to_string()
    }

    pub fn catalogue_origin() -> String {
        "http://books.toscrape.com/catalogue/".to_string()
    }

    pub fn output_root() -> String {
        "data".to_string()
    }
}
