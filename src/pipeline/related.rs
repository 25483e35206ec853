// src/pipeline/related.rs

//! Related-word resolution.

use std::collections::HashSet;

use tokio_util::sync::CancellationToken;

use crate::error::{AppError, Result};
use crate::models::{RelatedWords, Word};
use crate::pipeline::lookup::LookupService;

/// Turns a word's synonym and antonym strings into full words.
pub struct RelatedResolver<'a> {
    lookup: &'a LookupService,
}

impl<'a> RelatedResolver<'a> {
    pub fn new(lookup: &'a LookupService) -> Self {
        Self { lookup }
    }

    /// Resolve the related words of `source`.
    ///
    /// A source without any synonyms or antonyms gets its lists refreshed
    /// from the live page first; the refreshed entries come back as
    /// placeholders. Otherwise every entry is looked up in turn, and an entry
    /// that cannot be found becomes a placeholder.
    pub async fn resolve(&self, source: &mut Word, cancel: &CancellationToken) -> Result<RelatedWords> {
        if source.synonyms().is_empty() && source.antonyms().is_empty() {
            return self.refresh(source, cancel).await;
        }

        let language = source.language().to_string();
        let mut related = RelatedWords::new(source.clone());
        related.synonyms = self.resolve_all(source.synonyms(), &language, cancel).await?;
        related.antonyms = self.resolve_all(source.antonyms(), &language, cancel).await?;
        Ok(related)
    }

    async fn resolve_all(
        &self,
        entries: &[String],
        language: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<Word>> {
        let mut words = Vec::new();

        for entry in unique_entries(entries) {
            if cancel.is_cancelled() {
                return Err(AppError::Cancelled);
            }
            match self.lookup.search(entry, language, cancel).await {
                Ok(word) => words.push(word),
                Err(AppError::Cancelled) => return Err(AppError::Cancelled),
                Err(e) => {
                    log::debug!("Related word '{entry}' unresolved: {e}");
                    words.push(Word::placeholder(entry, language));
                }
            }
        }
        Ok(words)
    }

    async fn refresh(&self, source: &mut Word, cancel: &CancellationToken) -> Result<RelatedWords> {
        if cancel.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        let scraper = self.lookup.scraper(source.language())?;
        let fetched = scraper.scrape_related(source.text(), cancel).await?;

        source.replace_related(fetched.synonyms.clone(), fetched.antonyms.clone());
        self.lookup.persist(source).await;

        let language = source.language();
        let mut related = RelatedWords::new(source.clone());
        related.synonyms = unique_entries(&fetched.synonyms)
            .map(|s| Word::placeholder(s, language))
            .collect();
        related.antonyms = unique_entries(&fetched.antonyms)
            .map(|a| Word::placeholder(a, language))
            .collect();
        Ok(related)
    }
}

/// Trimmed, non-empty entries, skipping case-insensitive repeats.
fn unique_entries(entries: &[String]) -> impl Iterator<Item = &str> {
    let mut processed = HashSet::new();
    entries
        .iter()
        .map(|e| e.trim())
        .filter(move |e| !e.is_empty() && processed.insert(e.to_lowercase()))
}
