//! Test doubles shared by unit tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::{AppError, Result};
use crate::models::{RawDefinition, RawRelated, RawWordResponse, Word};
use crate::services::WordScraper;
use crate::storage::{MemoryStore, Pagination, WordFilter, WordStore};

/// A raw response with a single noun definition.
pub fn raw_word(word: &str, language: &str, definition: &str) -> RawWordResponse {
    let mut raw = RawWordResponse::new(word, language);
    raw.definitions.push(RawDefinition {
        text: definition.to_string(),
        word_type: "noun".to_string(),
        ..RawDefinition::default()
    });
    raw
}

/// Call counters for [`MockScraper`].
#[derive(Debug, Default)]
pub struct ScraperCalls {
    scrapes: AtomicUsize,
    related: AtomicUsize,
    suggests: AtomicUsize,
}

impl ScraperCalls {
    pub fn scrapes(&self) -> usize {
        self.scrapes.load(Ordering::SeqCst)
    }

    pub fn related(&self) -> usize {
        self.related.load(Ordering::SeqCst)
    }

    pub fn suggests(&self) -> usize {
        self.suggests.load(Ordering::SeqCst)
    }
}

/// Scraper serving canned responses.
pub struct MockScraper {
    language: String,
    words: HashMap<String, RawWordResponse>,
    related: HashMap<String, RawRelated>,
    suggestions: Vec<String>,
    cancel_on_scrape: Option<CancellationToken>,
    calls: Arc<ScraperCalls>,
}

impl MockScraper {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
            words: HashMap::new(),
            related: HashMap::new(),
            suggestions: Vec::new(),
            cancel_on_scrape: None,
            calls: Arc::new(ScraperCalls::default()),
        }
    }

    pub fn with_word(mut self, raw: RawWordResponse) -> Self {
        self.words.insert(raw.word.to_lowercase(), raw);
        self
    }

    pub fn with_related(mut self, related: RawRelated) -> Self {
        self.related.insert(related.word.to_lowercase(), related);
        self
    }

    pub fn with_suggestions(mut self, titles: &[&str]) -> Self {
        self.suggestions = titles.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Cancel `token` whenever a scrape happens.
    pub fn cancel_on_scrape(mut self, token: CancellationToken) -> Self {
        self.cancel_on_scrape = Some(token);
        self
    }

    pub fn calls(&self) -> Arc<ScraperCalls> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl WordScraper for MockScraper {
    fn language(&self) -> &str {
        &self.language
    }

    async fn scrape(&self, word: &str, _cancel: &CancellationToken) -> Result<RawWordResponse> {
        self.calls.scrapes.fetch_add(1, Ordering::SeqCst);
        if let Some(token) = &self.cancel_on_scrape {
            token.cancel();
        }
        self.words
            .get(&word.to_lowercase())
            .cloned()
            .ok_or_else(|| AppError::not_found(word, &self.language))
    }

    async fn scrape_related(&self, word: &str, _cancel: &CancellationToken) -> Result<RawRelated> {
        self.calls.related.fetch_add(1, Ordering::SeqCst);
        self.related
            .get(&word.to_lowercase())
            .cloned()
            .ok_or_else(|| AppError::not_found(word, &self.language))
    }

    async fn suggest(
        &self,
        _prefix: &str,
        limit: usize,
        _cancel: &CancellationToken,
    ) -> Result<Vec<String>> {
        self.calls.suggests.fetch_add(1, Ordering::SeqCst);
        Ok(self.suggestions.iter().take(limit).cloned().collect())
    }
}

/// Memory store that counts lookups and can be told to fail.
#[derive(Default)]
pub struct CountingStore {
    inner: MemoryStore,
    text_lookups: AtomicUsize,
    term_lookups: AtomicUsize,
    fail_saves: bool,
    fail_reads: bool,
}

impl CountingStore {
    pub fn failing_saves() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn text_lookups(&self) -> usize {
        self.text_lookups.load(Ordering::SeqCst)
    }

    pub fn term_lookups(&self) -> usize {
        self.term_lookups.load(Ordering::SeqCst)
    }

    fn check_read(&self) -> Result<()> {
        if self.fail_reads {
            return Err(AppError::storage("read refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl WordStore for CountingStore {
    async fn find_by_text(&self, text: &str, language: &str) -> Result<Option<Word>> {
        self.text_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_read()?;
        self.inner.find_by_text(text, language).await
    }

    async fn find_by_search_term(&self, term: &str, language: &str) -> Result<Option<Word>> {
        self.term_lookups.fetch_add(1, Ordering::SeqCst);
        self.check_read()?;
        self.inner.find_by_search_term(term, language).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Word>> {
        self.check_read()?;
        self.inner.find_by_id(id).await
    }

    async fn save(&self, word: &mut Word) -> Result<()> {
        if self.fail_saves {
            return Err(AppError::storage("save refused"));
        }
        self.inner.save(word).await
    }

    async fn list(&self, filter: &WordFilter, page: Pagination) -> Result<Vec<Word>> {
        self.check_read()?;
        self.inner.list(filter, page).await
    }

    async fn find_by_prefix(
        &self,
        prefix: &str,
        language: &str,
        limit: usize,
    ) -> Result<Vec<String>> {
        self.check_read()?;
        self.inner.find_by_prefix(prefix, language, limit).await
    }
}
