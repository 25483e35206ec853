//! Per-language source vocabulary.
//!
//! Every language-specific constant the scraper needs lives in a
//! [`LanguageProfile`] row. Supporting a new language means adding a row,
//! not a type.

mod english;
mod french;

pub use english::ENGLISH;
pub use french::FRENCH;

/// Semantic role of a page subsection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionRole {
    Etymology,
    Pronunciation,
    Synonyms,
    Antonyms,
    Translations,
    Derivatives,
    Related,
    Variants,
    SeeAlso,
    References,
    UsageNotes,
}

/// Result of classifying a section title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// A part-of-speech section holding definitions
    WordType(&'static str),
    /// One of the semantic roles
    Role(SectionRole),
}

/// Source vocabulary and markup conventions for one language edition.
#[derive(Debug)]
pub struct LanguageProfile {
    /// ISO-like language code (e.g. "en")
    pub code: &'static str,

    /// Host serving this language edition
    pub host: &'static str,

    /// Titles of the top-level language section
    pub section_names: &'static [&'static str],

    /// Role -> lowercase title fragments
    pub role_fragments: &'static [(SectionRole, &'static [&'static str])],

    /// Lowercase title fragment -> canonical word type, most specific first
    pub word_type_fragments: &'static [(&'static str, &'static str)],

    /// Word types accepted by definition validation
    pub valid_word_types: &'static [&'static str],

    /// Genders accepted by definition validation
    pub valid_genders: &'static [&'static str],

    /// Inline gender token -> canonical gender
    pub gender_markers: &'static [(&'static str, &'static str)],

    /// Inline span holding gender markers on the headword line
    pub gender_selector: &'static str,

    /// Inline span holding the pronunciation
    pub pronunciation_selector: &'static str,

    /// Accepted (open, close) delimiter pairs around a pronunciation
    pub pronunciation_delimiters: &'static [(char, char)],

    /// Inline sense label inside a definition item
    pub sense_label_selector: &'static str,

    /// Markup removed from a definition item before taking its text
    pub sense_strip_selector: &'static str,

    /// Example spans inside a definition item
    pub example_selector: &'static str,

    /// Links pointing at the lemma of an inflected form
    pub form_of_selector: &'static str,

    /// Regex capturing the lemma from "plural of X" style prose
    pub form_of_pattern: &'static str,

    /// Inflection table holding the plural form
    pub inflection_table_selector: Option<&'static str>,

    /// Column header fragment of the plural column
    pub plural_header: &'static str,

    /// Inline plural marker on the headword line
    pub plural_inline_selector: Option<&'static str>,

    /// Container flagged as a translation box
    pub translation_box_selector: &'static str,

    /// Language display name -> code, for translation entries
    pub language_names: &'static [(&'static str, &'static str)],

    /// Lowercase prefixes identifying etymology prose
    pub etymology_markers: &'static [&'static str],
}

/// All built-in profiles.
pub static PROFILES: &[&LanguageProfile] = &[&ENGLISH, &FRENCH];

/// Look up the built-in profile for a language code.
pub fn profile(code: &str) -> Option<&'static LanguageProfile> {
    PROFILES
        .iter()
        .copied()
        .find(|p| p.code.eq_ignore_ascii_case(code))
}

impl LanguageProfile {
    /// Whether a section title names this language.
    pub fn names_language(&self, title: &str) -> bool {
        let title = title.trim();
        self.section_names
            .iter()
            .any(|name| name.to_lowercase() == title.to_lowercase())
    }

    /// Classify a section title by substring match against the vocabulary.
    ///
    /// Roles are checked before word types so "Translations" never reads as
    /// a part of speech.
    pub fn classify(&self, title: &str) -> Option<SectionKind> {
        let lower = title.trim().to_lowercase();
        if lower.is_empty() {
            return None;
        }

        for (role, fragments) in self.role_fragments {
            if fragments.iter().any(|f| lower.contains(f)) {
                return Some(SectionKind::Role(*role));
            }
        }

        self.word_type_fragments
            .iter()
            .find(|(fragment, _)| lower.contains(fragment))
            .map(|(_, word_type)| SectionKind::WordType(word_type))
    }

    /// Map a translation entry's language name to a code.
    pub fn language_code(&self, name: &str) -> Option<&'static str> {
        let name = name.trim().to_lowercase();
        self.language_names
            .iter()
            .find(|(n, _)| n.to_lowercase() == name)
            .map(|(_, code)| *code)
    }

    /// Map an inline gender token to its canonical gender.
    pub fn gender_for(&self, text: &str) -> Option<&'static str> {
        let tokens: Vec<String> = text
            .split(|c: char| !c.is_alphabetic())
            .filter(|t| !t.is_empty())
            .map(|t| t.to_lowercase())
            .collect();

        self.gender_markers
            .iter()
            .find(|(marker, _)| tokens.iter().any(|t| t == marker))
            .map(|(_, gender)| *gender)
    }

    /// Strip a valid delimiter pair, returning the inner notation.
    pub fn validate_pronunciation(&self, raw: &str) -> Option<String> {
        let raw = raw.trim();
        self.pronunciation_delimiters.iter().find_map(|(open, close)| {
            let inner = raw.strip_prefix(*open)?.strip_suffix(*close)?;
            (!inner.trim().is_empty()).then(|| raw.to_string())
        })
    }

    /// Whether a paragraph reads like etymology prose.
    pub fn looks_like_etymology(&self, text: &str) -> bool {
        let lower = text.trim().to_lowercase();
        self.etymology_markers.iter().any(|m| lower.starts_with(m))
    }

    pub fn is_valid_word_type(&self, word_type: &str) -> bool {
        self.valid_word_types.contains(&word_type)
    }

    pub fn is_valid_gender(&self, gender: &str) -> bool {
        self.valid_genders.contains(&gender)
    }
}
