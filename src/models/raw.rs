//! Source-shaped scraper output.
//!
//! These structures mirror what the extraction rules find on a page and are
//! turned into a [`crate::models::Word`] by the adapter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Everything extracted from one page for one language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawWordResponse {
    pub word: String,
    pub language: String,
    #[serde(default)]
    pub definitions: Vec<RawDefinition>,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub etymology: String,
    #[serde(default)]
    pub pronunciation: BTreeMap<String, String>,
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
    #[serde(default)]
    pub search_terms: Vec<String>,
    #[serde(default)]
    pub lemma: String,
    #[serde(default)]
    pub usage_notes: Vec<String>,
    #[serde(default)]
    pub forms: Vec<RawForm>,
}

impl RawWordResponse {
    pub fn new(word: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            language: language.into(),
            ..Self::default()
        }
    }
}

/// One extracted definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDefinition {
    pub text: String,
    #[serde(default)]
    pub word_type: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub language_specific: BTreeMap<String, String>,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// One extracted inflected form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawForm {
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_lemma: bool,
}

/// Synonym/antonym text lists fetched for a source word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRelated {
    pub word: String,
    pub language: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}
