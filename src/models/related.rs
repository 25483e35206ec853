//! Related-word and enrichment structures.

use serde::{Deserialize, Serialize};

use crate::models::Word;

/// A source word with its synonyms and antonyms resolved to words.
///
/// Entries that could not be resolved are minimal placeholders
/// (id + text + language only).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelatedWords {
    pub source: Word,
    pub synonyms: Vec<Word>,
    pub antonyms: Vec<Word>,
}

impl RelatedWords {
    pub fn new(source: Word) -> Self {
        Self {
            source,
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }
}

/// Which fields of an existing word must be filled from a fresh fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentStatus {
    pub needs_definitions: bool,
    pub needs_etymology: bool,
    pub needs_translations: bool,
    pub needs_synonyms: bool,
    pub needs_antonyms: bool,
    pub needs_pronunciation: bool,
}

impl EnrichmentStatus {
    /// Every field flagged as missing.
    pub fn all() -> Self {
        Self {
            needs_definitions: true,
            needs_etymology: true,
            needs_translations: true,
            needs_synonyms: true,
            needs_antonyms: true,
            needs_pronunciation: true,
        }
    }

    /// Whether any field needs filling.
    pub fn any(&self) -> bool {
        self.needs_definitions
            || self.needs_etymology
            || self.needs_translations
            || self.needs_synonyms
            || self.needs_antonyms
            || self.needs_pronunciation
    }
}
