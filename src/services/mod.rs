//! Service layer for the lookup application.
//!
//! This module contains:
//! - Page structure discovery (`structure`)
//! - Targeted and fallback content extraction (`content`)
//! - Rate-limited HTTP fetching (`DocumentFetcher`)
//! - The per-language scraper and its registry (`WiktionaryScraper`, `ScraperRegistry`)
//! - Raw-to-domain conversion (`WordAdapter`)

mod adapter;
pub mod content;
mod fetcher;
mod registry;
pub mod structure;
mod wiktionary;

pub use adapter::WordAdapter;
pub use fetcher::DocumentFetcher;
pub use registry::ScraperRegistry;
pub use wiktionary::WiktionaryScraper;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::models::{RawRelated, RawWordResponse};

/// A per-language source of raw word data.
#[async_trait]
pub trait WordScraper: Send + Sync {
    /// Language code this scraper serves.
    fn language(&self) -> &str;

    /// Fetch and extract a full entry for a headword.
    async fn scrape(&self, word: &str, cancel: &CancellationToken) -> Result<RawWordResponse>;

    /// Fetch only the synonym and antonym lists for a headword.
    async fn scrape_related(&self, word: &str, cancel: &CancellationToken) -> Result<RawRelated>;

    /// Live title suggestions for a prefix.
    async fn suggest(
        &self,
        prefix: &str,
        limit: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>>;
}
