//! Storage abstractions for word persistence.
//!
//! Two backends share one trait:
//! - [`MemoryStore`]: process-local map, used by tests and one-shot runs
//! - [`LocalStore`]: a single JSON document on disk
//!
//! ```text
//! data/
//! └── words.json      # { "words": [ ... ] }, rewritten atomically on save
//! ```
//!
//! Saving is an upsert on `(text, language)`: a word that matches an existing
//! record keeps that record's id and replaces its content.

pub mod local;
pub mod memory;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Word;

// Re-export for convenience
pub use local::LocalStore;
pub use memory::MemoryStore;

/// Filter for listing stored words.
#[derive(Debug, Clone, Default)]
pub struct WordFilter {
    /// Restrict to one language code
    pub language: Option<String>,
}

/// Page window for listing stored words.
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub limit: usize,
    pub offset: usize,
}

impl Pagination {
    pub fn first(limit: usize) -> Self {
        Self { limit, offset: 0 }
    }
}

/// Trait for word storage backends.
#[async_trait]
pub trait WordStore: Send + Sync {
    /// Exact, case-insensitive match on the headword.
    async fn find_by_text(&self, text: &str, language: &str) -> Result<Option<Word>>;

    /// Match on any registered search term.
    async fn find_by_search_term(&self, term: &str, language: &str) -> Result<Option<Word>>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Word>>;

    /// Insert or replace a word, assigning its id.
    async fn save(&self, word: &mut Word) -> Result<()>;

    /// Most recently updated first.
    async fn list(&self, filter: &WordFilter, page: Pagination) -> Result<Vec<Word>>;

    /// Headwords and search terms starting with `prefix`, sorted and unique.
    async fn find_by_prefix(&self, prefix: &str, language: &str, limit: usize)
    -> Result<Vec<String>>;
}

/// In-memory word table shared by both backends.
#[derive(Debug, Default, Clone)]
pub(crate) struct WordTable {
    words: HashMap<String, Word>,
}

impl WordTable {
    pub(crate) fn from_words(words: Vec<Word>) -> Self {
        Self {
            words: words
                .into_iter()
                .filter(|w| !w.id().is_empty())
                .map(|w| (w.id().to_string(), w))
                .collect(),
        }
    }

    pub(crate) fn to_words(&self) -> Vec<Word> {
        let mut words: Vec<Word> = self.words.values().cloned().collect();
        words.sort_by(|a, b| a.created_at().cmp(&b.created_at()).then(a.id().cmp(b.id())));
        words
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    pub(crate) fn find_by_text(&self, text: &str, language: &str) -> Option<Word> {
        let text = text.trim().to_lowercase();
        self.in_language(language)
            .find(|w| w.text().to_lowercase() == text)
            .cloned()
    }

    pub(crate) fn find_by_search_term(&self, term: &str, language: &str) -> Option<Word> {
        self.in_language(language)
            .find(|w| w.answers_to(term))
            .cloned()
    }

    pub(crate) fn find_by_id(&self, id: &str) -> Option<Word> {
        self.words.get(id).cloned()
    }

    pub(crate) fn upsert(&mut self, word: &mut Word) {
        let existing = self
            .find_by_text(word.text(), word.language())
            .map(|w| w.id().to_string());

        match existing {
            Some(id) => {
                if word.id() != id {
                    if !word.id().is_empty() {
                        self.words.remove(word.id());
                    }
                    word.assign_id(id);
                }
            }
            None if word.id().is_empty() => word.assign_id(uuid::Uuid::new_v4().to_string()),
            None => {}
        }
        self.words.insert(word.id().to_string(), word.clone());
    }

    pub(crate) fn list(&self, filter: &WordFilter, page: Pagination) -> Vec<Word> {
        let mut words: Vec<&Word> = self
            .words
            .values()
            .filter(|w| {
                filter
                    .language
                    .as_deref()
                    .is_none_or(|l| w.language().eq_ignore_ascii_case(l))
            })
            .collect();
        words.sort_by(|a, b| b.updated_at().cmp(&a.updated_at()).then(a.text().cmp(b.text())));
        words
            .into_iter()
            .skip(page.offset)
            .take(page.limit)
            .cloned()
            .collect()
    }

    pub(crate) fn find_by_prefix(&self, prefix: &str, language: &str, limit: usize) -> Vec<String> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        let mut matches: Vec<String> = self
            .in_language(language)
            .flat_map(|w| w.search_terms().iter().map(String::as_str).chain([w.text()]))
            .filter(|t| t.to_lowercase().starts_with(&prefix))
            .map(str::to_string)
            .collect();
        matches.sort();
        matches.dedup();
        matches.truncate(limit);
        matches
    }

    fn in_language<'a>(&'a self, language: &'a str) -> impl Iterator<Item = &'a Word> {
        self.words
            .values()
            .filter(move |w| w.language().eq_ignore_ascii_case(language))
    }
}
