//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::language;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP fetching behavior
    #[serde(default)]
    pub fetcher: FetcherConfig,

    /// Lookup and suggestion behavior
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Local word store
    #[serde(default)]
    pub storage: StorageConfig,

    /// Languages with a live scraper
    #[serde(default = "defaults::languages")]
    pub languages: Vec<LanguageConfig>,
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
        if self.fetcher.user_agent.trim().is_empty() {
            return Err(AppError::validation("fetcher.user_agent is empty"));
        }
        if self.fetcher.timeout_secs == 0 {
            return Err(AppError::validation("fetcher.timeout_secs must be > 0"));
        }
        if self.lookup.suggestion_limit == 0 {
            return Err(AppError::validation("lookup.suggestion_limit must be > 0"));
        }
        if self.storage.path.trim().is_empty() {
            return Err(AppError::validation("storage.path is empty"));
        }
        if self.languages.is_empty() {
            return Err(AppError::validation("No languages defined"));
        }
        for lang in &self.languages {
            if language::profile(&lang.code).is_none() {
                return Err(AppError::validation(format!(
                    "No built-in profile for language '{}'",
                    lang.code
                )));
            }
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetcher: FetcherConfig::default(),
            lookup: LookupConfig::default(),
            storage: StorageConfig::default(),
            languages: defaults::languages(),
        }
    }
}

/// HTTP client and politeness settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetcherConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Fixed delay between requests to the same host, in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,

    /// Upper bound of the random jitter added to the delay
    #[serde(default = "defaults::jitter")]
    pub jitter_ms: u64,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
            jitter_ms: defaults::jitter(),
        }
    }
}

/// Lookup service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Minimum prefix length accepted by autocomplete
    #[serde(default = "defaults::min_prefix_len")]
    pub min_prefix_len: usize,

    /// Maximum suggestions requested from each source
    #[serde(default = "defaults::suggestion_limit")]
    pub suggestion_limit: usize,

    /// Re-fetch missing fields when a stored word is incomplete
    #[serde(default)]
    pub enrich_on_read: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            min_prefix_len: defaults::min_prefix_len(),
            suggestion_limit: defaults::suggestion_limit(),
            enrich_on_read: false,
        }
    }
}

/// Local word store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON word file
    #[serde(default = "defaults::storage_path")]
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: defaults::storage_path(),
        }
    }
}

/// A language with a live scraper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageConfig {
    /// Language code (must have a built-in profile)
    pub code: String,

    /// Override of the profile's host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

mod defaults {
    use super::LanguageConfig;

    // Fetcher defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; wordbook/0.1)".into()
    }
    pub fn timeout() -> u64 {
        15
    }
    pub fn request_delay() -> u64 {
        1000
    }
    pub fn jitter() -> u64 {
        250
    }

    // Lookup defaults
    pub fn min_prefix_len() -> usize {
        2
    }
    pub fn suggestion_limit() -> usize {
        10
    }

    // Storage defaults
    pub fn storage_path() -> String {
        "data/words.json".into()
    }

    // Language defaults
    pub fn languages() -> Vec<LanguageConfig> {
        ["en", "fr"]
            .into_iter()
            .map(|code| LanguageConfig {
                code: code.to_string(),
                host: None,
            })
            .collect()
    }
}
