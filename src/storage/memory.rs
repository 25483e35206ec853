//! Process-local word store.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::Word;
use crate::storage::{Pagination, WordFilter, WordStore, WordTable};

/// Word store held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<WordTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with already-identified words.
    pub fn with_words(words: Vec<Word>) -> Self {
        Self {
            table: RwLock::new(WordTable::from_words(words)),
        }
    }

    fn read<T>(&self, f: impl FnOnce(&WordTable) -> T) -> Result<T> {
        let table = self
            .table
            .read()
            .map_err(|_| AppError::storage("memory store lock poisoned"))?;
        Ok(f(&table))
    }

    fn write<T>(&self, f: impl FnOnce(&mut WordTable) -> T) -> Result<T> {
        let mut table = self
            .table
            .write()
            .map_err(|_| AppError::storage("memory store lock poisoned"))?;
        Ok(f(&mut table))
    }
}

#[async_trait]
impl WordStore for MemoryStore {
    async fn find_by_text(&self, text: &str, language: &str) -> Result<Option<Word>> {
        self.read(|t| t.find_by_text(text, language))
    }

    async fn find_by_search_term(&self, term: &str, language: &str) -> Result<Option<Word>> {
        self.read(|t| t.find_by_search_term(term, language))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Word>> {
        self.read(|t| t.find_by_id(id))
    }

    async fn save(&self, word: &mut Word) -> Result<()> {
        self.write(|t| t.upsert(word))
    }

    async fn list(&self, filter: &WordFilter, page: Pagination) -> Result<Vec<Word>> {
        self.read(|t| t.list(filter, page))
    }

    async fn find_by_prefix(
        &self,
        prefix: &str,
        language: &str,
        limit: usize,
    ) -> Result<Vec<String>> {
        self.read(|t| t.find_by_prefix(prefix, language, limit))
    }
}
