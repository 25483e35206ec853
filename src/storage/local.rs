//! Local filesystem storage implementation.
//!
//! Keeps every word in one JSON document. The document is read on first use
//! and rewritten after each save.
//!
//! ## Storage Layout
//!
//! ```text
//! {path}             # { "updated_at": ..., "count": N, "words": [ ... ] }
//! {path}.tmp         # scratch file, renamed over {path} on write
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::error::{AppError, Result};
use crate::models::Word;
use crate::storage::{Pagination, WordFilter, WordStore, WordTable};

/// On-disk document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordsFile {
    /// ISO 8601 timestamp of last write
    pub updated_at: DateTime<Utc>,
    pub count: usize,
    pub words: Vec<Word>,
}

impl WordsFile {
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            updated_at: Utc::now(),
            count: words.len(),
            words,
        }
    }
}

/// JSON-file word store.
pub struct LocalStore {
    path: PathBuf,
    table: Mutex<Option<WordTable>>,
}

impl LocalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            table: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Ensure parent directory exists.
    async fn ensure_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir().await?;

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    /// Read the document, returning None if the file doesn't exist.
    async fn read_file(&self) -> Result<Option<WordsFile>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    /// The word table, loaded from disk on first use.
    async fn loaded<'a>(&self, slot: &'a mut Option<WordTable>) -> Result<&'a mut WordTable> {
        if slot.is_none() {
            let words = self
                .read_file()
                .await
                .map_err(|e| AppError::storage(format!("{}: {e}", self.path.display())))?
                .map(|file| file.words)
                .unwrap_or_default();
            let table = WordTable::from_words(words);
            log::debug!("Loaded {} words from {}", table.len(), self.path.display());
            *slot = Some(table);
        }
        slot.as_mut()
            .ok_or_else(|| AppError::storage("word table not loaded"))
    }

    async fn with_table<T>(&self, f: impl FnOnce(&WordTable) -> T) -> Result<T> {
        let mut guard = self.table.lock().await;
        let table = self.loaded(&mut guard).await?;
        Ok(f(table))
    }
}

#[async_trait]
impl WordStore for LocalStore {
    async fn find_by_text(&self, text: &str, language: &str) -> Result<Option<Word>> {
        self.with_table(|t| t.find_by_text(text, language)).await
    }

    async fn find_by_search_term(&self, term: &str, language: &str) -> Result<Option<Word>> {
        self.with_table(|t| t.find_by_search_term(term, language)).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Word>> {
        self.with_table(|t| t.find_by_id(id)).await
    }

    async fn save(&self, word: &mut Word) -> Result<()> {
        let mut guard = self.table.lock().await;
        let table = self.loaded(&mut guard).await?;

        let mut staged = word.clone();
        let mut updated = table.clone();
        updated.upsert(&mut staged);
        let bytes = serde_json::to_vec_pretty(&WordsFile::new(updated.to_words()))?;
        self.write_bytes(&bytes)
            .await
            .map_err(|e| AppError::storage(format!("{}: {e}", self.path.display())))?;

        *table = updated;
        *word = staged;
        log::debug!("Saved '{}' ({}) to {}", word.text(), word.language(), self.path.display());
        Ok(())
    }

    async fn list(&self, filter: &WordFilter, page: Pagination) -> Result<Vec<Word>> {
        self.with_table(|t| t.list(filter, page)).await
    }

    async fn find_by_prefix(
        &self,
        prefix: &str,
        language: &str,
        limit: usize,
    ) -> Result<Vec<String>> {
        self.with_table(|t| t.find_by_prefix(prefix, language, limit))
            .await
    }
}
