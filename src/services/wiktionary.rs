// src/services/wiktionary.rs

//! Wiktionary-backed word scraper.

use std::sync::Arc;

use async_trait::async_trait;
use scraper::Html;
use tokio_util::sync::CancellationToken;

use crate::error::{AppError, Result};
use crate::language::LanguageProfile;
use crate::models::{RawRelated, RawWordResponse};
use crate::services::WordScraper;
use crate::services::content::{ExtractionRules, extract_entry, extract_related};
use crate::services::fetcher::DocumentFetcher;
use crate::services::structure::{StructureSelectors, discover};
use crate::utils::{opensearch_url, page_url};

/// Scraper for one language edition of Wiktionary.
pub struct WiktionaryScraper {
    host: String,
    rules: ExtractionRules,
    structure: StructureSelectors,
    fetcher: Arc<DocumentFetcher>,
}

impl WiktionaryScraper {
    /// Build a scraper for a profile, optionally overriding its host.
    pub fn new(
        profile: &'static LanguageProfile,
        host: Option<&str>,
        fetcher: Arc<DocumentFetcher>,
    ) -> Result<Self> {
        Ok(Self {
            host: host.unwrap_or(profile.host).to_string(),
            rules: ExtractionRules::new(profile)?,
            structure: StructureSelectors::new()?,
            fetcher,
        })
    }

    fn profile(&self) -> &'static LanguageProfile {
        self.rules.profile
    }

    fn not_found(&self, word: &str) -> AppError {
        AppError::not_found(word, self.profile().code)
    }

    async fn fetch(&self, word: &str, cancel: &CancellationToken) -> Result<String> {
        let url = page_url(&self.host, word);
        self.fetcher
            .fetch_page(&url, cancel)
            .await?
            .ok_or_else(|| self.not_found(word))
    }

    /// Parse a full entry out of an article body.
    pub fn parse_entry(&self, html: &str, word: &str) -> Result<RawWordResponse> {
        let document = Html::parse_document(html);
        let structure = discover(&document, self.profile(), &self.structure);
        if !structure.language_found {
            log::debug!("No {} section on page for '{word}'", self.profile().code);
            return Err(self.not_found(word));
        }

        let (raw, found) = extract_entry(&document, &structure, &self.rules, word);
        if !found {
            return Err(self.not_found(word));
        }
        log::info!(
            "Scraped '{word}' ({}): {} definitions",
            self.profile().code,
            raw.definitions.len()
        );
        Ok(raw)
    }

    /// Parse only the related-word lists out of an article body.
    pub fn parse_related(&self, html: &str, word: &str) -> Result<RawRelated> {
        let document = Html::parse_document(html);
        let structure = discover(&document, self.profile(), &self.structure);
        if !structure.language_found {
            return Err(self.not_found(word));
        }
        Ok(extract_related(&document, &structure, &self.rules, word))
    }
}

#[async_trait]
impl WordScraper for WiktionaryScraper {
    fn language(&self) -> &str {
        self.profile().code
    }

    async fn scrape(&self, word: &str, cancel: &CancellationToken) -> Result<RawWordResponse> {
        let html = self.fetch(word, cancel).await?;
        self.parse_entry(&html, word)
    }

    async fn scrape_related(&self, word: &str, cancel: &CancellationToken) -> Result<RawRelated> {
        let html = self.fetch(word, cancel).await?;
        self.parse_related(&html, word)
    }

    async fn suggest(
        &self,
        prefix: &str,
        limit: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>> {
        let url = opensearch_url(&self.host, prefix, limit);
        let response: serde_json::Value = self.fetcher.fetch_json(&url, cancel).await?;
        parse_opensearch(&url, &response)
    }
}

/// Titles from an OpenSearch reply: `[query, [titles], [descriptions], [urls]]`.
fn parse_opensearch(url: &str, response: &serde_json::Value) -> Result<Vec<String>> {
    let titles = response
        .get(1)
        .and_then(|t| t.as_array())
        .ok_or_else(|| AppError::upstream(url, "malformed suggestion response"))?;
    Ok(titles
        .iter()
        .filter_map(|t| t.as_str())
        .map(str::to_string)
        .collect())
}
