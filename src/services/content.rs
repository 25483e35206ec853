// src/services/content.rs

//! Targeted content extraction.
//!
//! Walks the sections found by structure discovery and pulls definitions,
//! examples, pronunciation, etymology, related words, translations and
//! inflected forms into a [`RawWordResponse`]. When the targeted pass finds
//! no definitions, a broad fallback pass scans every ordered list and, failing
//! that, every paragraph on the page.

use std::collections::HashSet;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use unicode_segmentation::UnicodeSegmentation;

use crate::error::{AppError, Result};
use crate::language::{LanguageProfile, SectionRole};
use crate::models::{RawDefinition, RawForm, RawRelated, RawWordResponse};
use crate::services::structure::{PageStructure, WordTypeSection};
use crate::utils::html::{
    element_text, matches_or_contains, parse_selector, section_elements, text_without,
};
use crate::utils::{normalize_text, normalize_whitespace};

/// Fallback candidates must be strictly longer than this many graphemes.
pub const FALLBACK_MIN_GRAPHEMES: usize = 10;

/// Markers that end the definition body of a list item.
const BODY_DELIMITERS: &[&str] = &[" : ", " — ", "«", "“"];

/// Tag and key used for plural forms.
const PLURAL: &str = "plural";

const BLOCK_ELEMENTS: &[&str] = &["p", "div", "ul", "ol", "dl", "table", "blockquote"];

/// Selectors and patterns for one language, compiled once per scraper.
pub struct ExtractionRules {
    pub profile: &'static LanguageProfile,
    list_item: Selector,
    unordered: Selector,
    link: Selector,
    table_row: Selector,
    table_cell: Selector,
    lang_tagged: Selector,
    nested_lists: Selector,
    definition_skip: Selector,
    example: Selector,
    sense_label: Selector,
    gender: Selector,
    pronunciation: Selector,
    form_of: Selector,
    form_of_pattern: Regex,
    inflection_table: Option<Selector>,
    plural_inline: Option<Selector>,
    translation_box: Selector,
    fallback_items: Selector,
    paragraphs: Selector,
}

impl ExtractionRules {
    pub fn new(profile: &'static LanguageProfile) -> Result<Self> {
        let definition_skip = format!(
            "ol, ul, dl, {}, {}",
            profile.example_selector, profile.sense_strip_selector
        );
        let form_of_pattern = Regex::new(profile.form_of_pattern)
            .map_err(|e| AppError::config(format!("form-of pattern for {}: {e}", profile.code)))?;

        Ok(Self {
            profile,
            list_item: parse_selector("li")?,
            unordered: parse_selector("ul")?,
            link: parse_selector("a")?,
            table_row: parse_selector("tr")?,
            table_cell: parse_selector("th, td")?,
            lang_tagged: parse_selector("[lang]")?,
            nested_lists: parse_selector("ol, ul, dl")?,
            definition_skip: parse_selector(&definition_skip)?,
            example: parse_selector(profile.example_selector)?,
            sense_label: parse_selector(profile.sense_label_selector)?,
            gender: parse_selector(profile.gender_selector)?,
            pronunciation: parse_selector(profile.pronunciation_selector)?,
            form_of: parse_selector(profile.form_of_selector)?,
            form_of_pattern,
            inflection_table: profile.inflection_table_selector.map(parse_selector).transpose()?,
            plural_inline: profile.plural_inline_selector.map(parse_selector).transpose()?,
            translation_box: parse_selector(profile.translation_box_selector)?,
            fallback_items: parse_selector("ol > li")?,
            paragraphs: parse_selector("p")?,
        })
    }
}

/// Extract a full entry. The flag reports whether any definition was found.
pub fn extract_entry(
    document: &Html,
    structure: &PageStructure,
    rules: &ExtractionRules,
    word: &str,
) -> (RawWordResponse, bool) {
    let mut extractor = Extractor::new(document, rules, word);

    for section in &structure.word_types {
        extractor.word_type_section(section);
    }
    extractor.roles(structure);
    if extractor.raw.pronunciation.is_empty() {
        extractor.page_pronunciation();
    }

    if extractor.raw.definitions.is_empty() {
        log::debug!("No definitions in targeted sections for '{word}', running fallback pass");
        extractor.fallback();
    }

    let found = !extractor.raw.definitions.is_empty();
    (extractor.raw, found)
}

/// Extract only the synonym and antonym lists.
pub fn extract_related(
    document: &Html,
    structure: &PageStructure,
    rules: &ExtractionRules,
    word: &str,
) -> RawRelated {
    let mut related = RawRelated {
        word: word.to_string(),
        language: rules.profile.code.to_string(),
        ..RawRelated::default()
    };
    for id in structure.role_ids(SectionRole::Synonyms) {
        for entry in word_list(document, rules, id, word) {
            push_unique(&mut related.synonyms, entry);
        }
    }
    for id in structure.role_ids(SectionRole::Antonyms) {
        for entry in word_list(document, rules, id, word) {
            push_unique(&mut related.antonyms, entry);
        }
    }
    related
}

struct Extractor<'a> {
    document: &'a Html,
    rules: &'a ExtractionRules,
    word: &'a str,
    seen_examples: HashSet<String>,
    raw: RawWordResponse,
}

impl<'a> Extractor<'a> {
    fn new(document: &'a Html, rules: &'a ExtractionRules, word: &'a str) -> Self {
        Self {
            document,
            rules,
            word,
            seen_examples: HashSet::new(),
            raw: RawWordResponse::new(word, rules.profile.code),
        }
    }

    fn word_type_section(&mut self, section: &WordTypeSection) {
        let elements = section_elements(self.document, &section.id);
        if elements.is_empty() {
            return;
        }

        let headword = headword_line(&elements);
        let gender = headword
            .and_then(|p| p.select(&self.rules.gender).next())
            .and_then(|g| self.rules.profile.gender_for(&element_text(g)))
            .unwrap_or_default()
            .to_string();

        if let Some(line) = headword {
            if let Some(lemma) = self.form_of_in(line) {
                self.record_lemma(&lemma);
            }
        }

        let plural = self.plural_for(headword, &elements);
        if let Some(plural) = &plural {
            self.record_plural(plural);
        }

        let Some(list) = nearest_ordered_list(&elements) else {
            log::debug!("Section '{}' has no definition list", section.title);
            return;
        };

        for item in list.children().filter_map(ElementRef::wrap) {
            if item.value().name() != "li" {
                continue;
            }
            let Some(mut definition) = self.definition(item) else {
                continue;
            };
            definition.word_type = section.word_type.to_string();
            definition.gender = gender.clone();
            if let Some(plural) = &plural {
                definition
                    .language_specific
                    .insert(PLURAL.to_string(), plural.clone());
            }
            if let Some(lemma) = self.form_of_in(item) {
                self.record_lemma(&lemma);
            }
            self.raw.definitions.push(definition);
        }
    }

    fn definition(&mut self, item: ElementRef) -> Option<RawDefinition> {
        let mut body = text_without(item, &self.rules.definition_skip);
        if body.is_empty() {
            body = cut_at_delimiter(&element_text(item));
        }
        if body.is_empty() {
            return None;
        }

        let label = item
            .select(&self.rules.sense_label)
            .map(element_text)
            .map(|l| l.trim_matches(|c| c == '(' || c == ')').trim().to_string())
            .find(|l| !l.is_empty());
        let text = match label {
            Some(label) => format!("({label}) {body}"),
            None => body,
        };

        let mut examples = Vec::new();
        for example in item.select(&self.rules.example) {
            let example = element_text(example);
            if example.is_empty() || !self.seen_examples.insert(normalize_text(&example)) {
                continue;
            }
            self.raw.examples.push(example.clone());
            examples.push(example);
        }

        Some(RawDefinition {
            text,
            examples,
            ..RawDefinition::default()
        })
    }

    fn form_of_in(&self, element: ElementRef) -> Option<String> {
        if let Some(link) = element.select(&self.rules.form_of).next() {
            let lemma = element_text(link);
            if !lemma.is_empty() {
                return Some(lemma);
            }
        }
        let text = text_without(element, &self.rules.nested_lists);
        self.rules
            .form_of_pattern
            .captures(&text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .filter(|lemma| !lemma.eq_ignore_ascii_case(self.word))
    }

    fn record_lemma(&mut self, lemma: &str) {
        if self.raw.lemma.is_empty() {
            self.raw.lemma = lemma.to_string();
        }
        let form = RawForm {
            text: lemma.to_string(),
            tags: vec!["lemma".to_string()],
            is_lemma: true,
        };
        if !self.raw.forms.contains(&form) {
            self.raw.forms.push(form);
        }
    }

    fn plural_for(&self, headword: Option<ElementRef>, elements: &[ElementRef]) -> Option<String> {
        let from_table = self.rules.inflection_table.as_ref().and_then(|sel| {
            elements
                .iter()
                .find_map(|e| matches_or_contains(*e, sel))
                .and_then(|table| self.plural_from_table(table))
        });
        let from_line = || {
            let sel = self.rules.plural_inline.as_ref()?;
            let line = headword?;
            line.select(sel).map(element_text).find(|t| !t.is_empty())
        };
        from_table
            .or_else(from_line)
            .filter(|p| !p.eq_ignore_ascii_case(self.word))
    }

    fn plural_from_table(&self, table: ElementRef) -> Option<String> {
        let mut column = None;
        for row in table.select(&self.rules.table_row) {
            let cells: Vec<ElementRef> = row.select(&self.rules.table_cell).collect();
            match column {
                None => {
                    column = cells.iter().position(|c| {
                        element_text(*c)
                            .to_lowercase()
                            .contains(self.rules.profile.plural_header)
                    });
                }
                Some(index) => {
                    if !cells.iter().any(|c| c.value().name() == "td") {
                        continue;
                    }
                    let cell = cells.get(index)?;
                    return cell
                        .select(&self.rules.link)
                        .map(element_text)
                        .find(|t| !t.is_empty())
                        .or_else(|| {
                            cell.text()
                                .map(normalize_whitespace)
                                .find(|t| !t.is_empty())
                        });
                }
            }
        }
        None
    }

    fn record_plural(&mut self, plural: &str) {
        self.raw
            .translations
            .entry(PLURAL.to_string())
            .or_insert_with(|| plural.to_string());
        let form = RawForm {
            text: plural.to_string(),
            tags: vec![PLURAL.to_string()],
            is_lemma: false,
        };
        if !self.raw.forms.contains(&form) {
            self.raw.forms.push(form);
        }
        push_unique(&mut self.raw.search_terms, plural.to_string());
    }

    fn roles(&mut self, structure: &PageStructure) {
        if let Some(id) = structure.role_id(SectionRole::Etymology) {
            if let Some(text) = first_block_text(&section_elements(self.document, id)) {
                self.raw.etymology = text;
            }
        }

        for id in structure.role_ids(SectionRole::UsageNotes) {
            if let Some(text) = first_block_text(&section_elements(self.document, id)) {
                push_unique(&mut self.raw.usage_notes, text);
            }
        }

        for id in structure.role_ids(SectionRole::Pronunciation) {
            let elements = section_elements(self.document, id);
            let found = elements.iter().find_map(|e| {
                pronunciations_in(*e, &self.rules.pronunciation)
                    .find_map(|p| self.rules.profile.validate_pronunciation(&element_text(p)))
            });
            if let Some(ipa) = found {
                self.raw.pronunciation.insert("ipa".to_string(), ipa);
                break;
            }
        }

        for id in structure.role_ids(SectionRole::Synonyms) {
            for entry in word_list(self.document, self.rules, id, self.word) {
                push_unique(&mut self.raw.synonyms, entry);
            }
        }
        for id in structure.role_ids(SectionRole::Antonyms) {
            for entry in word_list(self.document, self.rules, id, self.word) {
                push_unique(&mut self.raw.antonyms, entry);
            }
        }
        for id in structure.role_ids(SectionRole::Variants) {
            for entry in word_list(self.document, self.rules, id, self.word) {
                push_unique(&mut self.raw.search_terms, entry);
            }
        }

        if let Some(id) = structure.role_id(SectionRole::Translations) {
            self.translations(id);
        }
    }

    fn page_pronunciation(&mut self) {
        let found = self
            .document
            .select(&self.rules.pronunciation)
            .find_map(|p| self.rules.profile.validate_pronunciation(&element_text(p)));
        if let Some(ipa) = found {
            self.raw.pronunciation.insert("ipa".to_string(), ipa);
        }
    }

    fn translations(&mut self, id: &str) {
        let elements = section_elements(self.document, id);
        let Some(container) = elements
            .iter()
            .find_map(|e| matches_or_contains(*e, &self.rules.translation_box))
        else {
            return;
        };

        for item in container.select(&self.rules.list_item) {
            let line = text_without(item, &self.rules.nested_lists);
            let Some((name, rest)) = line.split_once(':') else {
                continue;
            };
            let Some(code) = self.rules.profile.language_code(name) else {
                continue;
            };
            if self.raw.translations.contains_key(code) {
                continue;
            }

            let value = item
                .select(&self.rules.lang_tagged)
                .filter(|e| e.value().attr("lang") != Some(self.rules.profile.code))
                .map(element_text)
                .find(|t| !t.is_empty())
                .unwrap_or_else(|| {
                    rest.split(',').next().unwrap_or_default().trim().to_string()
                });
            if !value.is_empty() {
                self.raw.translations.insert(code.to_string(), value);
            }
        }
    }

    fn fallback(&mut self) {
        for item in self.document.select(&self.rules.fallback_items) {
            let in_references = item
                .parent()
                .and_then(ElementRef::wrap)
                .is_some_and(|ol| ol.value().classes().any(|c| c == "references"));
            if in_references {
                continue;
            }
            let text = text_without(item, &self.rules.nested_lists);
            if long_enough(&text) {
                self.raw.definitions.push(RawDefinition {
                    text,
                    ..RawDefinition::default()
                });
            }
        }
        if !self.raw.definitions.is_empty() {
            return;
        }

        for paragraph in self.document.select(&self.rules.paragraphs) {
            let text = element_text(paragraph);
            if long_enough(&text) && !self.rules.profile.looks_like_etymology(&text) {
                self.raw.definitions.push(RawDefinition {
                    text,
                    ..RawDefinition::default()
                });
            }
        }
    }
}

/// First paragraph of a part-of-speech section, before its definition list.
fn headword_line<'a>(elements: &[ElementRef<'a>]) -> Option<ElementRef<'a>> {
    elements
        .iter()
        .take_while(|e| e.value().name() != "ol")
        .find(|e| e.value().name() == "p")
        .copied()
}

/// The definition list: a direct sibling, or one paragraph removed.
fn nearest_ordered_list<'a>(elements: &[ElementRef<'a>]) -> Option<ElementRef<'a>> {
    let mut paragraphs = 0;
    for element in elements {
        match element.value().name() {
            "ol" => return Some(*element),
            "p" => {
                paragraphs += 1;
                if paragraphs > 1 {
                    return None;
                }
            }
            _ => {}
        }
    }
    None
}

fn first_block_text(elements: &[ElementRef]) -> Option<String> {
    elements
        .iter()
        .filter(|e| BLOCK_ELEMENTS.contains(&e.value().name()))
        .map(|e| element_text(*e))
        .find(|t| !t.is_empty())
}

fn pronunciations_in<'a, 'b>(
    element: ElementRef<'a>,
    selector: &'b Selector,
) -> impl Iterator<Item = ElementRef<'a>> + use<'a, 'b> {
    let own = selector.matches(&element).then_some(element);
    own.into_iter().chain(element.select(selector))
}

/// Entries of the first unordered list in a section.
fn word_list(document: &Html, rules: &ExtractionRules, id: &str, word: &str) -> Vec<String> {
    let elements = section_elements(document, id);
    let Some(list) = elements
        .iter()
        .find_map(|e| matches_or_contains(*e, &rules.unordered))
    else {
        return Vec::new();
    };

    let mut entries: Vec<String> = list
        .select(&rules.link)
        .map(element_text)
        .filter(|t| !t.contains(':'))
        .collect();
    if entries.is_empty() {
        entries = list
            .select(&rules.list_item)
            .flat_map(|li| {
                text_without(li, &rules.nested_lists)
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect::<Vec<_>>()
            })
            .collect();
    }

    let mut unique = Vec::new();
    for entry in entries {
        if !entry.eq_ignore_ascii_case(word) {
            push_unique(&mut unique, entry);
        }
    }
    unique
}

fn cut_at_delimiter(text: &str) -> String {
    let end = BODY_DELIMITERS
        .iter()
        .filter_map(|d| text.find(d))
        .min()
        .unwrap_or(text.len());
    text[..end].trim().to_string()
}

fn long_enough(text: &str) -> bool {
    text.trim().graphemes(true).count() > FALLBACK_MIN_GRAPHEMES
}

fn push_unique(list: &mut Vec<String>, value: String) {
    let value = value.trim();
    if !value.is_empty() && !list.iter().any(|v| v == value) {
        list.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::{ENGLISH, FRENCH};
    use crate::services::structure::{StructureSelectors, discover};

    fn extract(html: &str, profile: &'static LanguageProfile, word: &str) -> (RawWordResponse, bool) {
        let document = Html::parse_document(html);
        let structure = discover(&document, profile, &StructureSelectors::new().unwrap());
        let rules = ExtractionRules::new(profile).unwrap();
        extract_entry(&document, &structure, &rules, word)
    }

    const ENGLISH_PAGE: &str = r#"
        <html><body>
        <h2><span class="mw-headline" id="English">English</span></h2>
        <h3><span class="mw-headline" id="Etymology">Etymology</span></h3>
        <p>From Old French <i>test</i>, from Latin <i>testum</i>.</p>
        <h3><span class="mw-headline" id="Pronunciation">Pronunciation</span></h3>
        <ul><li>IPA: <span class="IPA">/tɛst/</span></li></ul>
        <h3><span class="mw-headline" id="Noun">Noun</span></h3>
        <p><strong class="headword">test</strong> (plural <b class="p-form-of"><a>tests</a></b>)</p>
        <ol>
          <li><span class="ib-brac">(</span><span class="ib-content">academia</span><span class="ib-brac">)</span> An examination given to students.
            <dl><dd><i>We have a test tomorrow.</i></dd></dl></li>
          <li>A challenge or trial.
            <dl><dd><i>We have a test tomorrow.</i></dd></dl></li>
        </ol>
        <h4><span class="mw-headline" id="Synonyms">Synonyms</span></h4>
        <ul><li><a>exam</a>, <a>trial</a>, <a>Thesaurus:test</a></li><li><a>exam</a></li></ul>
        <h4><span class="mw-headline" id="Translations">Translations</span></h4>
        <div class="translations"><ul>
          <li>French: <span lang="fr">test</span> m, <span lang="fr">examen</span> m</li>
          <li>German: Test m</li>
          <li>Klingon: something</li>
        </ul></div>
        <h3><span class="mw-headline" id="Verb">Verb</span></h3>
        <p><strong class="headword">test</strong></p>
        <ol><li>To challenge.</li></ol>
        <h4><span class="mw-headline" id="Antonyms">Antonyms</span></h4>
        <ul><li>ignore</li></ul>
        <h2><span class="mw-headline" id="French">French</span></h2>
        <h3><span class="mw-headline" id="Noun_2">Noun</span></h3>
        <ol><li>test (examination)</li></ol>
        </body></html>
    "#;

    #[test]
    fn test_english_entry() {
        let (raw, found) = extract(ENGLISH_PAGE, &ENGLISH, "test");
        assert!(found);
        assert_eq!(raw.definitions.len(), 3);

        let first = &raw.definitions[0];
        assert_eq!(first.text, "(academia) An examination given to students.");
        assert_eq!(first.word_type, "noun");
        assert_eq!(first.examples, vec!["We have a test tomorrow."]);
        assert_eq!(first.language_specific.get("plural").map(String::as_str), Some("tests"));
        // Same example under the second sense is not repeated
        assert!(raw.definitions[1].examples.is_empty());
        assert_eq!(raw.examples.len(), 1);

        assert_eq!(raw.definitions[2].word_type, "verb");
        assert_eq!(raw.etymology, "From Old French test, from Latin testum.");
        assert_eq!(raw.pronunciation.get("ipa").map(String::as_str), Some("/tɛst/"));
        assert_eq!(raw.synonyms, vec!["exam", "trial"]);
        assert_eq!(raw.antonyms, vec!["ignore"]);
        assert_eq!(raw.translations.get("fr").map(String::as_str), Some("test"));
        assert_eq!(raw.translations.get("de").map(String::as_str), Some("Test m"));
        assert_eq!(raw.translations.get("plural").map(String::as_str), Some("tests"));
        assert!(raw.search_terms.contains(&"tests".to_string()));
        assert!(raw.forms.iter().any(|f| f.text == "tests" && f.tags == ["plural"]));
    }

    #[test]
    fn test_form_of_sets_lemma() {
        let html = r#"
            <html><body>
            <h2><span class="mw-headline" id="English">English</span></h2>
            <h3><span class="mw-headline" id="Noun">Noun</span></h3>
            <p><strong class="headword">tests</strong></p>
            <ol><li><span class="form-of-definition">plural of <span class="form-of-definition-link"><a>test</a></span></span></li></ol>
            </body></html>
        "#;
        let (raw, found) = extract(html, &ENGLISH, "tests");
        assert!(found);
        assert_eq!(raw.lemma, "test");
        assert!(raw.forms.iter().any(|f| f.text == "test" && f.is_lemma));
        assert!(!raw.search_terms.contains(&"test".to_string()));
    }

    const FRENCH_PAGE: &str = r#"
        <html><body>
        <h2><span class="mw-headline" id="Français">Français</span></h2>
        <h3><span class="mw-headline" id="Étymologie">Étymologie</span></h3>
        <dl><dd>Du latin <i>cattus</i>.</dd></dl>
        <h3><span class="mw-headline" id="Nom_commun"><span class="titredef">Nom commun</span></span></h3>
        <table class="flextable"><tr><th>Singulier</th><th>Pluriel</th></tr>
          <tr><td><a>chat</a><br><span class="API">\ʃa\</span></td><td><a>chats</a><br><span class="API">\ʃa\</span></td></tr></table>
        <p><b>chat</b> <span class="API">\ʃa\</span> <span class="ligne-de-forme"><i>masculin</i></span></p>
        <ol>
          <li><span class="emploi">(Zoologie)</span> Mammifère carnivore félin de taille moyenne.
            <ul><li><span class="example"><q>Le chat miaule.</q></span></li></ul></li>
        </ol>
        <h4><span class="mw-headline" id="Synonymes">Synonymes</span></h4>
        <ul><li><a>matou</a></li><li><a>minet</a></li></ul>
        <h4><span class="mw-headline" id="Traductions">Traductions</span></h4>
        <div class="boite"><ul><li>Anglais : <span lang="en">cat</span> (en)</li></ul></div>
        </body></html>
    "#;

    #[test]
    fn test_french_entry() {
        let (raw, found) = extract(FRENCH_PAGE, &FRENCH, "chat");
        assert!(found);
        assert_eq!(raw.definitions.len(), 1);

        let def = &raw.definitions[0];
        assert_eq!(def.text, "(Zoologie) Mammifère carnivore félin de taille moyenne.");
        assert_eq!(def.word_type, "noun");
        assert_eq!(def.gender, "masculine");
        assert_eq!(def.examples, vec!["Le chat miaule."]);

        assert_eq!(raw.pronunciation.get("ipa").map(String::as_str), Some("\\ʃa\\"));
        assert_eq!(raw.translations.get("plural").map(String::as_str), Some("chats"));
        assert_eq!(raw.translations.get("en").map(String::as_str), Some("cat"));
        assert_eq!(raw.synonyms, vec!["matou", "minet"]);
        assert_eq!(raw.etymology, "Du latin cattus.");
    }

    #[test]
    fn test_no_definition_list_runs_fallback_and_finds_nothing() {
        let html = r#"
            <html><body>
            <h2><span class="mw-headline" id="Français">Français</span></h2>
            <h3><span class="mw-headline" id="Nom_commun">Nom commun</span></h3>
            <p>court</p>
            </body></html>
        "#;
        let (raw, found) = extract(html, &FRENCH, "mot");
        assert!(!found);
        assert!(raw.definitions.is_empty());
    }

    #[test]
    fn test_fallback_collects_long_list_items() {
        let html = r#"
            <html><body>
            <h2><span class="mw-headline" id="English">English</span></h2>
            <ol><li>short</li><li>A sufficiently long description.</li></ol>
            <ol class="references"><li>Some reference that is long enough.</li></ol>
            </body></html>
        "#;
        let (raw, found) = extract(html, &ENGLISH, "thing");
        assert!(found);
        assert_eq!(raw.definitions.len(), 1);
        assert_eq!(raw.definitions[0].text, "A sufficiently long description.");
        assert!(raw.definitions[0].word_type.is_empty());
    }

    #[test]
    fn test_fallback_paragraphs_skip_etymology() {
        let html = r#"
            <html><body>
            <h2><span class="mw-headline" id="English">English</span></h2>
            <p>From Latin, a long origin story here.</p>
            <p>Something used for testing other things.</p>
            </body></html>
        "#;
        let (raw, found) = extract(html, &ENGLISH, "thing");
        assert!(found);
        assert_eq!(raw.definitions.len(), 1);
        assert_eq!(raw.definitions[0].text, "Something used for testing other things.");
    }

    #[test]
    fn test_body_cut_at_delimiter() {
        assert_eq!(cut_at_delimiter("Un essai : « exemple »"), "Un essai");
        assert_eq!(cut_at_delimiter("A test — with aside"), "A test");
        assert_eq!(cut_at_delimiter("Plain"), "Plain");
    }

    #[test]
    fn test_grapheme_threshold() {
        assert!(!long_enough("0123456789"));
        assert!(long_enough("0123456789a"));
        // Combining accents count once per grapheme
        assert!(!long_enough("e\u{301}e\u{301}e\u{301}e\u{301}e\u{301}e\u{301}"));
    }

    #[test]
    fn test_extract_related_only() {
        let document = Html::parse_document(ENGLISH_PAGE);
        let structure = discover(&document, &ENGLISH, &StructureSelectors::new().unwrap());
        let rules = ExtractionRules::new(&ENGLISH).unwrap();
        let related = extract_related(&document, &structure, &rules, "test");
        assert_eq!(related.synonyms, vec!["exam", "trial"]);
        assert_eq!(related.antonyms, vec!["ignore"]);
        assert_eq!(related.language, "en");
    }
}
