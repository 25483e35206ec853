// src/models/word.rs

//! The Word aggregate.
//!
//! A [`Word`] is only mutated through its own methods. Every `add_*` method
//! checks membership before appending, and every mutation refreshes
//! `updated_at`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::language;
use crate::models::EnrichmentStatus;

/// Grammar rule violations reported by [`Word::validate_definition`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("definition text is empty")]
    EmptyText,

    #[error("word type '{word_type}' is not valid for language '{language}'")]
    UnknownWordType { word_type: String, language: String },

    #[error("gender '{gender}' is not valid for language '{language}'")]
    UnknownGender { gender: String, language: String },

    #[error("no grammar rules for language '{0}'")]
    UnsupportedLanguage(String),
}

/// One sense of a word.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub text: String,

    /// Open string; validated per language only at the point of use
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub word_type: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    /// Overrides the word-level pronunciation for this sense
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pronunciation: Option<String>,

    /// Language-specific annotations (e.g. "plural")
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub language_specific: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl Definition {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_word_type(mut self, word_type: impl Into<String>) -> Self {
        self.word_type = word_type.into();
        self
    }
}

/// An inflected surface form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_lemma: bool,
}

/// Canonical dictionary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    /// Opaque id, assigned by the store
    #[serde(default)]
    id: String,
    text: String,
    language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    word_type: Option<String>,
    #[serde(default)]
    definitions: Vec<Definition>,
    #[serde(default)]
    examples: Vec<String>,
    /// Notation system (e.g. "ipa") -> rendering
    #[serde(default)]
    pronunciation: BTreeMap<String, String>,
    #[serde(default)]
    etymology: String,
    /// Language code -> translated text
    #[serde(default)]
    translations: BTreeMap<String, String>,
    #[serde(default)]
    synonyms: Vec<String>,
    #[serde(default)]
    antonyms: Vec<String>,
    #[serde(default)]
    search_terms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    lemma: Option<String>,
    #[serde(default)]
    usage_notes: Vec<String>,
    #[serde(default)]
    forms: Vec<Form>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Word {
    /// Create a word whose search terms are seeded with its text.
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        let text = text.into().trim().to_string();
        let now = Utc::now();
        Self {
            id: String::new(),
            search_terms: vec![text.clone()],
            text,
            language: language.into(),
            word_type: None,
            definitions: Vec::new(),
            examples: Vec::new(),
            pronunciation: BTreeMap::new(),
            etymology: String::new(),
            translations: BTreeMap::new(),
            synonyms: Vec::new(),
            antonyms: Vec::new(),
            lemma: None,
            usage_notes: Vec::new(),
            forms: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Minimal placeholder carrying only a locally generated id, text and language.
    pub fn placeholder(text: impl Into<String>, language: impl Into<String>) -> Self {
        let mut word = Self::new(text, language);
        word.id = uuid::Uuid::new_v4().to_string();
        word
    }

    // --- Accessors ---

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn word_type(&self) -> Option<&str> {
        self.word_type.as_deref()
    }

    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    pub fn pronunciation(&self) -> &BTreeMap<String, String> {
        &self.pronunciation
    }

    pub fn etymology(&self) -> &str {
        &self.etymology
    }

    pub fn translations(&self) -> &BTreeMap<String, String> {
        &self.translations
    }

    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    pub fn antonyms(&self) -> &[String] {
        &self.antonyms
    }

    pub fn search_terms(&self) -> &[String] {
        &self.search_terms
    }

    pub fn lemma(&self) -> Option<&str> {
        self.lemma.as_deref()
    }

    pub fn usage_notes(&self) -> &[String] {
        &self.usage_notes
    }

    pub fn forms(&self) -> &[Form] {
        &self.forms
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Whether the text or any registered search term matches `term`, ignoring case.
    pub fn answers_to(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        self.text.to_lowercase() == term
            || self.search_terms.iter().any(|t| t.to_lowercase() == term)
    }

    // --- Mutators ---

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Called by stores when persisting a word for the first time.
    pub fn assign_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
        self.touch();
    }

    pub fn set_word_type(&mut self, word_type: impl Into<String>) {
        let word_type = word_type.into();
        if !word_type.trim().is_empty() {
            self.word_type = Some(word_type);
        }
        self.touch();
    }

    /// Append a definition. The first typed definition backfills an unset
    /// primary word type.
    pub fn add_definition(&mut self, definition: Definition) {
        if self.word_type.is_none() && !definition.word_type.is_empty() {
            self.word_type = Some(definition.word_type.clone());
        }
        if !self.search_terms.contains(&self.text) {
            self.search_terms.insert(0, self.text.clone());
        }
        self.definitions.push(definition);
        self.touch();
    }

    pub fn add_example(&mut self, example: impl Into<String>) {
        push_unique(&mut self.examples, example.into());
        self.touch();
    }

    pub fn add_synonym(&mut self, synonym: impl Into<String>) {
        push_unique(&mut self.synonyms, synonym.into());
        self.touch();
    }

    pub fn add_antonym(&mut self, antonym: impl Into<String>) {
        push_unique(&mut self.antonyms, antonym.into());
        self.touch();
    }

    pub fn add_search_term(&mut self, term: impl Into<String>) {
        push_unique(&mut self.search_terms, term.into());
        self.touch();
    }

    /// Record a translation unless one already exists for the language.
    pub fn add_translation(&mut self, language: impl Into<String>, text: impl Into<String>) {
        let (language, text) = (language.into(), text.into());
        if !language.trim().is_empty() && !text.trim().is_empty() {
            self.translations
                .entry(language)
                .or_insert_with(|| text.trim().to_string());
        }
        self.touch();
    }

    pub fn set_etymology(&mut self, etymology: impl Into<String>) {
        self.etymology = etymology.into().trim().to_string();
        self.touch();
    }

    pub fn set_pronunciation(&mut self, system: impl Into<String>, value: impl Into<String>) {
        self.pronunciation.insert(system.into(), value.into());
        self.touch();
    }

    pub fn set_lemma(&mut self, lemma: impl Into<String>) {
        let lemma = lemma.into().trim().to_string();
        self.lemma = (!lemma.is_empty()).then_some(lemma);
        self.touch();
    }

    pub fn add_usage_note(&mut self, note: impl Into<String>) {
        push_unique(&mut self.usage_notes, note.into());
        self.touch();
    }

    pub fn add_form(&mut self, form: Form) {
        if !form.text.trim().is_empty() && !self.forms.contains(&form) {
            self.forms.push(form);
        }
        self.touch();
    }

    /// Replace the synonym/antonym lists wholesale (related-word refresh).
    pub fn replace_related(&mut self, synonyms: Vec<String>, antonyms: Vec<String>) {
        self.synonyms.clear();
        self.antonyms.clear();
        for s in synonyms {
            push_unique(&mut self.synonyms, s);
        }
        for a in antonyms {
            push_unique(&mut self.antonyms, a);
        }
        self.touch();
    }

    /// Which fields are missing and should be filled from a fresh fetch.
    pub fn enrichment_status(&self) -> EnrichmentStatus {
        EnrichmentStatus {
            needs_definitions: self.definitions.is_empty(),
            needs_etymology: self.etymology.is_empty(),
            needs_translations: self.translations.is_empty(),
            needs_synonyms: self.synonyms.is_empty(),
            needs_antonyms: self.antonyms.is_empty(),
            needs_pronunciation: self.pronunciation.is_empty(),
        }
    }

    /// Fill fields that are empty here from `other`.
    ///
    /// Non-empty fields are never overwritten. Search terms and forms are
    /// unioned since they only widen where the word can be found.
    pub fn merge_missing(&mut self, other: &Word) {
        if self.definitions.is_empty() {
            for definition in &other.definitions {
                self.add_definition(definition.clone());
            }
        }
        if self.word_type.is_none() {
            self.word_type = other.word_type.clone();
        }
        if self.examples.is_empty() {
            self.examples = other.examples.clone();
        }
        if self.pronunciation.is_empty() {
            self.pronunciation = other.pronunciation.clone();
        }
        if self.etymology.is_empty() {
            self.etymology = other.etymology.clone();
        }
        if self.translations.is_empty() {
            self.translations = other.translations.clone();
        }
        if self.synonyms.is_empty() {
            self.synonyms = other.synonyms.clone();
        }
        if self.antonyms.is_empty() {
            self.antonyms = other.antonyms.clone();
        }
        if self.lemma.is_none() {
            self.lemma = other.lemma.clone();
        }
        if self.usage_notes.is_empty() {
            self.usage_notes = other.usage_notes.clone();
        }
        for term in &other.search_terms {
            push_unique(&mut self.search_terms, term.clone());
        }
        for form in &other.forms {
            if !self.forms.contains(form) {
                self.forms.push(form.clone());
            }
        }
        self.touch();
    }

    /// Check a definition against this word's per-language grammar rules.
    pub fn validate_definition(&self, definition: &Definition) -> Result<(), ValidationError> {
        if definition.text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }

        let profile = language::profile(&self.language)
            .ok_or_else(|| ValidationError::UnsupportedLanguage(self.language.clone()))?;

        if !definition.word_type.is_empty() && !profile.is_valid_word_type(&definition.word_type)
        {
            return Err(ValidationError::UnknownWordType {
                word_type: definition.word_type.clone(),
                language: self.language.clone(),
            });
        }

        if let Some(gender) = &definition.gender {
            if !profile.is_valid_gender(gender) {
                return Err(ValidationError::UnknownGender {
                    gender: gender.clone(),
                    language: self.language.clone(),
                });
            }
        }

        Ok(())
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    let value = value.trim();
    if !value.is_empty() && !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}
