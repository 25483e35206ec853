// src/services/adapter.rs

//! Conversion from raw scraped data to the domain [`Word`].

use crate::error::{AppError, Result};
use crate::models::{
    Definition, EnrichmentStatus, Form, RawDefinition, RawWordResponse, ValidationError, Word,
};

/// Builds and enriches [`Word`]s from raw scraper output.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordAdapter;

impl WordAdapter {
    /// Convert a raw response into a new word, copying every non-empty field.
    pub fn to_word(&self, raw: &RawWordResponse) -> Word {
        let mut word = Word::new(raw.word.as_str(), raw.language.as_str());
        self.apply(raw, &EnrichmentStatus::all(), &mut word);
        word
    }

    /// Fill the fields flagged in `status` on an existing word.
    ///
    /// The flagged fields are first copied into a scratch word, which is then
    /// merged so that nothing already present on `existing` is overwritten.
    pub fn enrich(
        &self,
        raw: &RawWordResponse,
        status: &EnrichmentStatus,
        existing: Option<&mut Word>,
    ) -> Result<()> {
        let existing =
            existing.ok_or_else(|| AppError::validation("enrichment requires an existing word"))?;
        if !status.any() {
            return Ok(());
        }

        let mut scratch = Word::new(existing.text(), existing.language());
        self.apply(raw, status, &mut scratch);
        existing.merge_missing(&scratch);
        Ok(())
    }

    fn apply(&self, raw: &RawWordResponse, status: &EnrichmentStatus, word: &mut Word) {
        if status.needs_definitions {
            for raw_definition in &raw.definitions {
                if let Some(definition) = self.definition(raw_definition, word) {
                    for example in &definition.examples {
                        word.add_example(example.as_str());
                    }
                    word.add_definition(definition);
                }
            }
            for example in &raw.examples {
                word.add_example(example.as_str());
            }
            if !raw.lemma.is_empty() {
                word.set_lemma(raw.lemma.as_str());
            }
            for note in &raw.usage_notes {
                word.add_usage_note(note.as_str());
            }
            for form in &raw.forms {
                word.add_form(Form {
                    text: form.text.clone(),
                    tags: form.tags.clone(),
                    is_lemma: form.is_lemma,
                });
            }
            for term in &raw.search_terms {
                word.add_search_term(term.as_str());
            }
        }

        if status.needs_etymology && !raw.etymology.is_empty() {
            word.set_etymology(raw.etymology.as_str());
        }
        if status.needs_pronunciation {
            for (system, value) in &raw.pronunciation {
                if !value.is_empty() {
                    word.set_pronunciation(system.as_str(), value.as_str());
                }
            }
        }
        if status.needs_translations {
            for (language, text) in &raw.translations {
                word.add_translation(language.as_str(), text.as_str());
            }
        }
        if status.needs_synonyms {
            for synonym in &raw.synonyms {
                word.add_synonym(synonym.as_str());
            }
        }
        if status.needs_antonyms {
            for antonym in &raw.antonyms {
                word.add_antonym(antonym.as_str());
            }
        }
    }

    /// Convert one raw definition, sanitizing fields the language rejects.
    fn definition(&self, raw: &RawDefinition, word: &Word) -> Option<Definition> {
        let mut definition = Definition {
            text: raw.text.trim().to_string(),
            word_type: raw.word_type.trim().to_string(),
            examples: raw.examples.clone(),
            gender: non_empty(&raw.gender),
            pronunciation: non_empty(&raw.pronunciation),
            language_specific: raw.language_specific.clone(),
            notes: raw.notes.clone(),
        };

        loop {
            match word.validate_definition(&definition) {
                Ok(()) => return Some(definition),
                Err(ValidationError::EmptyText) => return None,
                Err(err @ ValidationError::UnknownWordType { .. }) => {
                    log::debug!("Dropping word type: {err}");
                    definition.word_type.clear();
                }
                Err(err @ ValidationError::UnknownGender { .. }) => {
                    log::debug!("Dropping gender: {err}");
                    definition.gender = None;
                }
                Err(err @ ValidationError::UnsupportedLanguage(_)) => {
                    log::debug!("Definition kept unvalidated: {err}");
                    return Some(definition);
                }
            }
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
