// src/pipeline/lookup.rs

//! Lookup orchestration.
//!
//! A search tries the store by exact headword, then by any registered search
//! term, and only then scrapes the source. Fetched words are persisted on a
//! best-effort basis: a failed save is logged and the word is still returned.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::error::{AppError, Result};
use crate::models::{LookupConfig, RelatedWords, Word};
use crate::pipeline::related::RelatedResolver;
use crate::services::{ScraperRegistry, WordAdapter, WordScraper};
use crate::storage::{Pagination, WordFilter, WordStore};
use crate::utils::normalize_text;

/// Entry point for word lookups, suggestions and related words.
pub struct LookupService {
    store: Arc<dyn WordStore>,
    scrapers: Arc<ScraperRegistry>,
    adapter: WordAdapter,
    config: LookupConfig,
}

impl LookupService {
    pub fn new(
        store: Arc<dyn WordStore>,
        scrapers: Arc<ScraperRegistry>,
        config: LookupConfig,
    ) -> Self {
        Self {
            store,
            scrapers,
            adapter: WordAdapter,
            config,
        }
    }

    /// Find a word locally or fetch it from the source.
    pub async fn search(&self, text: &str, language: &str, cancel: &CancellationToken) -> Result<Word> {
        let (text, language) = normalize_request(text, language)?;

        if let Some(mut word) = self.find_stored(&text, &language).await? {
            if self.config.enrich_on_read {
                match self.enrich_word(&mut word, cancel).await {
                    Ok(_) => {}
                    Err(AppError::Cancelled) => return Err(AppError::Cancelled),
                    Err(e) => log::warn!("Enrichment of '{text}' ({language}) failed: {e}"),
                }
            }
            return Ok(word);
        }

        let mut word = self.fetch_word(&text, &language, cancel).await?;
        self.persist(&mut word).await;
        Ok(word)
    }

    /// Most recently updated words for a language.
    pub async fn get_recent(&self, language: &str, limit: usize) -> Result<Vec<Word>> {
        let language = normalize_text(language);
        if language.is_empty() {
            return Err(AppError::invalid("language is empty"));
        }
        let filter = WordFilter {
            language: Some(language),
        };
        self.store.list(&filter, Pagination::first(limit)).await
    }

    /// Related words for a stored word.
    pub async fn get_related(&self, id: &str, cancel: &CancellationToken) -> Result<RelatedWords> {
        let id = id.trim();
        if id.is_empty() {
            return Err(AppError::invalid("word id is empty"));
        }
        let mut source = self
            .store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(id, "*"))?;
        RelatedResolver::new(self).resolve(&mut source, cancel).await
    }

    /// Prefix completions from the store and the source, merged and sorted.
    pub async fn autocomplete(
        &self,
        prefix: &str,
        language: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>> {
        let (prefix, language) = normalize_request(prefix, language)?;
        if prefix.chars().count() < self.config.min_prefix_len {
            return Err(AppError::invalid(format!(
                "prefix must be at least {} characters",
                self.config.min_prefix_len
            )));
        }
        let limit = self.config.suggestion_limit;

        let local = self
            .store
            .find_by_prefix(&prefix, &language, limit)
            .await
            .unwrap_or_else(|e| {
                log::warn!("Local suggestions for '{prefix}' failed: {e}");
                Vec::new()
            });

        let remote = match self.live_suggestions(&prefix, &language, cancel).await {
            Ok(titles) => titles,
            Err(AppError::Cancelled) => return Err(AppError::Cancelled),
            Err(e) if !local.is_empty() => {
                log::warn!("Live suggestions for '{prefix}' failed: {e}");
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        let mut merged: Vec<String> = local
            .into_iter()
            .chain(remote)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        merged.sort();
        merged.dedup();
        merged.truncate(limit);
        Ok(merged)
    }

    /// Suggestions from the store, or from the source when the store has none.
    pub async fn get_suggestions(
        &self,
        prefix: &str,
        language: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>> {
        let (prefix, language) = normalize_request(prefix, language)?;
        let limit = self.config.suggestion_limit;

        match self.store.find_by_prefix(&prefix, &language, limit).await {
            Ok(local) if !local.is_empty() => return Ok(local),
            Ok(_) => {}
            Err(e) => log::warn!("Local suggestions for '{prefix}' failed: {e}"),
        }
        self.live_suggestions(&prefix, &language, cancel).await
    }

    /// Fill missing fields of a stored word from a fresh fetch.
    pub async fn enrich(&self, text: &str, language: &str, cancel: &CancellationToken) -> Result<Word> {
        let (text, language) = normalize_request(text, language)?;
        let mut word = self
            .find_stored(&text, &language)
            .await?
            .ok_or_else(|| AppError::not_found(&text, &language))?;
        self.enrich_word(&mut word, cancel).await?;
        Ok(word)
    }

    pub(crate) fn scraper(&self, language: &str) -> Result<Arc<dyn WordScraper>> {
        self.scrapers.get(language)
    }

    /// Store lookup by headword, then by any search term.
    async fn find_stored(&self, text: &str, language: &str) -> Result<Option<Word>> {
        if let Some(word) = self.store.find_by_text(text, language).await? {
            log::debug!("Store hit for '{text}' ({language})");
            return Ok(Some(word));
        }
        if let Some(word) = self.store.find_by_search_term(text, language).await? {
            log::debug!("Store hit for '{text}' ({language}) via '{}'", word.text());
            return Ok(Some(word));
        }
        Ok(None)
    }

    async fn fetch_word(&self, text: &str, language: &str, cancel: &CancellationToken) -> Result<Word> {
        let scraper = self.scraper(language)?;
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        let raw = scraper.scrape(text, cancel).await?;
        Ok(self.adapter.to_word(&raw))
    }

    /// Returns whether anything was filled in.
    async fn enrich_word(&self, word: &mut Word, cancel: &CancellationToken) -> Result<bool> {
        let status = word.enrichment_status();
        if !status.any() {
            return Ok(false);
        }

        let scraper = self.scraper(word.language())?;
        let raw = scraper.scrape(word.text(), cancel).await?;
        self.adapter.enrich(&raw, &status, Some(&mut *word))?;
        if word.enrichment_status() == status {
            return Ok(false);
        }

        log::info!("Enriched '{}' ({})", word.text(), word.language());
        self.persist(word).await;
        Ok(true)
    }

    async fn live_suggestions(
        &self,
        prefix: &str,
        language: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<String>> {
        let scraper = self.scraper(language)?;
        scraper
            .suggest(prefix, self.config.suggestion_limit, cancel)
            .await
    }

    /// Save without failing the caller.
    pub(crate) async fn persist(&self, word: &mut Word) {
        if let Err(e) = self.store.save(word).await {
            log::warn!("Failed to save '{}' ({}): {e}", word.text(), word.language());
        }
    }
}

fn normalize_request(text: &str, language: &str) -> Result<(String, String)> {
    let text = normalize_text(text);
    if text.is_empty() {
        return Err(AppError::invalid("text is empty"));
    }
    let language = normalize_text(language);
    if language.is_empty() {
        return Err(AppError::invalid("language is empty"));
    }
    Ok((text, language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::models::{RawDefinition, RawWordResponse};
    use crate::storage::MemoryStore;
    use crate::testing::{CountingStore, MockScraper, raw_word};

    fn service(store: Arc<dyn WordStore>, scraper: MockScraper) -> LookupService {
        let mut registry = ScraperRegistry::new();
        registry.register(Arc::new(scraper));
        LookupService::new(store, Arc::new(registry), LookupConfig::default())
    }

    #[tokio::test]
    async fn test_miss_then_fetch_then_persist() {
        let store = Arc::new(CountingStore::default());
        let scraper = MockScraper::new("en").with_word(raw_word("test", "en", "A trial."));
        let calls = scraper.calls();
        let service = service(store.clone(), scraper);

        let word = service.search("test", "en", &CancellationToken::new()).await.unwrap();
        assert_eq!(word.text(), "test");
        assert_eq!(word.definitions()[0].text, "A trial.");
        assert!(!word.id().is_empty());

        assert_eq!(store.text_lookups(), 1);
        assert_eq!(store.term_lookups(), 1);
        assert_eq!(calls.scrapes(), 1);

        let stored = store.find_by_text("test", "en").await.unwrap().unwrap();
        assert_eq!(stored.id(), word.id());
    }

    #[tokio::test]
    async fn test_store_hit_skips_fetch() {
        let store = Arc::new(CountingStore::default());
        let mut word = Word::new("test", "en");
        word.add_search_term("tests");
        store.save(&mut word).await.unwrap();

        let scraper = MockScraper::new("en");
        let calls = scraper.calls();
        let service = service(store.clone(), scraper);

        let found = service.search("  Tests ", "EN", &CancellationToken::new()).await.unwrap();
        assert_eq!(found.id(), word.id());
        assert_eq!(calls.scrapes(), 0);
    }

    #[tokio::test]
    async fn test_empty_text_is_invalid() {
        let service = service(Arc::new(MemoryStore::new()), MockScraper::new("en"));
        let err = service.search("   ", "en", &CancellationToken::new()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Invalid);
    }

    #[tokio::test]
    async fn test_unknown_word_is_not_found() {
        let service = service(Arc::new(MemoryStore::new()), MockScraper::new("fr"));
        let err = service.search("mot", "fr", &CancellationToken::new()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_unsupported_language() {
        let service = service(Arc::new(MemoryStore::new()), MockScraper::new("en"));
        let err = service.search("hund", "de", &CancellationToken::new()).await.unwrap_err();
        assert!(matches!(err, AppError::UnsupportedLanguage(_)));
    }

    #[tokio::test]
    async fn test_failed_save_still_returns_word() {
        let store = Arc::new(CountingStore::failing_saves());
        let scraper = MockScraper::new("en").with_word(raw_word("test", "en", "A trial."));
        let service = service(store, scraper);

        let word = service.search("test", "en", &CancellationToken::new()).await.unwrap();
        assert_eq!(word.text(), "test");
    }

    #[tokio::test]
    async fn test_cancelled_before_fetch() {
        let scraper = MockScraper::new("en").with_word(raw_word("test", "en", "A trial."));
        let calls = scraper.calls();
        let service = service(Arc::new(MemoryStore::new()), scraper);
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = service.search("test", "en", &cancel).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unavailable);
        assert_eq!(calls.scrapes(), 0);
    }

    #[tokio::test]
    async fn test_autocomplete_merges_sorted_unique() {
        let store = Arc::new(MemoryStore::new());
        for text in ["test1", "test2"] {
            store.save(&mut Word::new(text, "en")).await.unwrap();
        }
        let scraper = MockScraper::new("en").with_suggestions(&["test2", "test3"]);
        let service = service(store, scraper);

        let results = service
            .autocomplete("test", "en", &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(results, vec!["test1", "test2", "test3"]);
    }

    #[tokio::test]
    async fn test_autocomplete_rejects_short_prefix() {
        let service = service(Arc::new(MemoryStore::new()), MockScraper::new("en"));
        let err = service
            .autocomplete("t", "en", &CancellationToken::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Invalid);
    }

    #[tokio::test]
    async fn test_suggestions_prefer_store() {
        let store = Arc::new(MemoryStore::new());
        store.save(&mut Word::new("tea", "en")).await.unwrap();
        let scraper = MockScraper::new("en").with_suggestions(&["team"]);
        let calls = scraper.calls();
        let service = service(store, scraper);

        let local = service
            .get_suggestions("t", "en", &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(local, vec!["tea"]);
        assert_eq!(calls.suggests(), 0);

        let remote = service
            .get_suggestions("x", "en", &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(remote, vec!["team"]);
        assert_eq!(calls.suggests(), 1);
    }

    #[tokio::test]
    async fn test_suggestions_tolerate_store_failure() {
        let store = Arc::new(CountingStore::failing_reads());
        let scraper = MockScraper::new("en").with_suggestions(&["team"]);
        let service = service(store, scraper);

        let results = service
            .get_suggestions("te", "en", &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(results, vec!["team"]);
    }

    #[tokio::test]
    async fn test_get_recent_most_recent_first() {
        let store = Arc::new(MemoryStore::new());
        for text in ["first", "second"] {
            store.save(&mut Word::new(text, "en")).await.unwrap();
            tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        }
        store.save(&mut Word::new("autre", "fr")).await.unwrap();
        let service = service(store, MockScraper::new("en"));

        let recent = service.get_recent("en", 10).await.unwrap();
        let texts: Vec<_> = recent.iter().map(|w| w.text()).collect();
        assert_eq!(texts, vec!["second", "first"]);
        assert_eq!(service.get_recent("en", 1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_enrich_fills_missing_fields() {
        let store = Arc::new(MemoryStore::new());
        let mut stored = Word::new("test", "en");
        stored.set_etymology("Kept.");
        store.save(&mut stored).await.unwrap();

        let mut raw = raw_word("test", "en", "A trial.");
        raw.etymology = "Replaced?".into();
        raw.synonyms = vec!["exam".into()];
        let service = service(store.clone(), MockScraper::new("en").with_word(raw));

        let word = service.enrich("test", "en", &CancellationToken::new()).await.unwrap();
        assert_eq!(word.etymology(), "Kept.");
        assert_eq!(word.synonyms(), ["exam"]);
        assert_eq!(word.definitions().len(), 1);

        let persisted = store.find_by_id(stored.id()).await.unwrap().unwrap();
        assert_eq!(persisted.synonyms(), ["exam"]);
    }

    #[tokio::test]
    async fn test_enrich_on_read_failure_keeps_stored_word() {
        let store = Arc::new(MemoryStore::new());
        store.save(&mut Word::new("test", "en")).await.unwrap();

        let mut registry = ScraperRegistry::new();
        registry.register(Arc::new(MockScraper::new("en")));
        let config = LookupConfig {
            enrich_on_read: true,
            ..LookupConfig::default()
        };
        let service = LookupService::new(store, Arc::new(registry), config);

        let word = service.search("test", "en", &CancellationToken::new()).await.unwrap();
        assert!(word.definitions().is_empty());
    }

    #[tokio::test]
    async fn test_fetched_definitions_keep_order() {
        let mut raw = RawWordResponse::new("run", "en");
        for (i, word_type) in ["verb", "verb", "noun"].iter().enumerate() {
            raw.definitions.push(RawDefinition {
                text: format!("Sense {i}."),
                word_type: word_type.to_string(),
                ..RawDefinition::default()
            });
        }
        let service = service(Arc::new(MemoryStore::new()), MockScraper::new("en").with_word(raw));

        let word = service.search("run", "en", &CancellationToken::new()).await.unwrap();
        let texts: Vec<_> = word.definitions().iter().map(|d| d.text.as_str()).collect();
        assert_eq!(texts, vec!["Sense 0.", "Sense 1.", "Sense 2."]);
        assert_eq!(word.word_type(), Some("verb"));
    }
}
