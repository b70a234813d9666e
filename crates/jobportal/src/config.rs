//! Configuration management for jobportal.
//!
//! This module provides configuration loading and validation using figment,
//! supporting TOML config files, environment variables, and defaults.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Default configuration directory name.
const CONFIG_DIR_NAME: &str = "jobportal";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `JOBPORTAL_`, `__` between sections)
/// 2. TOML config file at `~/.config/jobportal/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity and public address.
    pub site: SiteConfig,
    /// How many records listing sections show.
    pub listing: ListingConfig,
    /// Where catalog data comes from.
    pub data: DataConfig,
}

/// Site-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Display name shown in headers.
    pub name: String,
    /// Public base URL; share links point at pages under it.
    pub base_url: String,
}

/// Listing-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    /// Open jobs featured on the home page.
    pub featured_jobs: usize,
    /// Latest blog posts shown on the home page.
    pub recent_blogs: usize,
    /// Similar jobs / related posts on detail pages.
    pub related_limit: usize,
    /// Qualifications shown per job card before "And more...".
    pub qualification_preview: usize,
    /// Tags shown per blog card.
    pub tag_preview: usize,
}

/// Data source configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// JSON file with job records.
    /// Defaults to the records bundled into the binary.
    pub jobs_path: Option<PathBuf>,
    /// JSON file with blog records.
    /// Defaults to the records bundled into the binary.
    pub blogs_path: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "GovtJobPortal".to_string(),
            base_url: "http://localhost:5173".to_string(),
        }
    }
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            featured_jobs: 4,
            recent_blogs: 3,
            related_limit: 3,
            qualification_preview: 2,
            tag_preview: 3,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("JOBPORTAL_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        let base = Url::parse(&self.site.base_url).map_err(|e| Error::ConfigValidation {
            message: format!("base_url '{}' is not a valid URL: {e}", self.site.base_url),
        })?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::ConfigValidation {
                message: format!("base_url must use http or https, got '{}'", base.scheme()),
            });
        }

        if self.listing.featured_jobs == 0 {
            return Err(Error::ConfigValidation {
                message: "featured_jobs must be greater than 0".to_string(),
            });
        }

        if self.listing.recent_blogs == 0 {
            return Err(Error::ConfigValidation {
                message: "recent_blogs must be greater than 0".to_string(),
            });
        }

        Ok(())
    }

    /// Absolute URL of a site path, used for share links.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be joined with `path`.
    pub fn page_url(&self, path: &str) -> Result<Url> {
        let mut base = Url::parse(&self.site.base_url).map_err(|e| Error::ConfigValidation {
            message: format!("base_url '{}' is not a valid URL: {e}", self.site.base_url),
        })?;
        // Site paths resolve under the base path, not the host root
        if !base.path().ends_with('/') {
            let dir = format!("{}/", base.path());
            base.set_path(&dir);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|e| Error::internal(format!("cannot join '{path}' onto base URL: {e}")))
    }
}
