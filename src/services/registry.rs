// src/services/registry.rs

//! Language-to-scraper table, built once at startup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::language;
use crate::models::Config;
use crate::services::{DocumentFetcher, WiktionaryScraper, WordScraper};

/// Scrapers keyed by language code.
#[derive(Default, Clone)]
pub struct ScraperRegistry {
    scrapers: HashMap<String, Arc<dyn WordScraper>>,
}

impl ScraperRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one Wiktionary scraper per configured language, sharing a fetcher.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = Arc::new(DocumentFetcher::new(&config.fetcher)?);
        let mut registry = Self::new();

        for entry in &config.languages {
            let profile = language::profile(&entry.code)
                .ok_or_else(|| AppError::UnsupportedLanguage(entry.code.clone()))?;
            let scraper =
                WiktionaryScraper::new(profile, entry.host.as_deref(), Arc::clone(&fetcher))?;
            registry.register(Arc::new(scraper));
        }

        log::info!("Registered scrapers: {}", registry.languages().join(", "));
        Ok(registry)
    }

    /// Add or replace the scraper for its language.
    pub fn register(&mut self, scraper: Arc<dyn WordScraper>) {
        self.scrapers
            .insert(scraper.language().to_lowercase(), scraper);
    }

    pub fn get(&self, language: &str) -> Result<Arc<dyn WordScraper>> {
        self.scrapers
            .get(&language.to_lowercase())
            .cloned()
            .ok_or_else(|| AppError::UnsupportedLanguage(language.to_string()))
    }

    /// Registered language codes, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.scrapers.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}
