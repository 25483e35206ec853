// src/services/structure.rs

//! Page structure discovery.
//!
//! Builds an index of the sections under the target language, preferring the
//! page's navigation outline and falling back to a heading scan. Both the
//! classic `#toc` list and the newer `.vector-toc` sidebar are recognized.

use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};

use crate::error::Result;
use crate::language::{LanguageProfile, SectionKind, SectionRole};
use crate::utils::decode_anchor;
use crate::utils::html::{
    element_text, heading_id, heading_level, heading_title, parse_selector, text_without,
};

/// Outline levels followed below the language entry.
const OUTLINE_DEPTH: usize = 3;

/// A section holding definitions for one part of speech.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordTypeSection {
    pub title: String,
    pub id: String,
    pub word_type: &'static str,
}

/// Index of the sections found under the target language.
#[derive(Debug, Clone, Default)]
pub struct PageStructure {
    /// Section title to anchor id; a repeated title keeps the last id
    pub sections: HashMap<String, String>,
    /// Whether the page has a section for the language at all
    pub language_found: bool,
    /// Part-of-speech sections in page order
    pub word_types: Vec<WordTypeSection>,
    /// Anchor ids per semantic role in page order
    pub roles: HashMap<SectionRole, Vec<String>>,
}

impl PageStructure {
    /// First section carrying a role.
    pub fn role_id(&self, role: SectionRole) -> Option<&str> {
        self.roles.get(&role).and_then(|ids| ids.first()).map(String::as_str)
    }

    /// Every section carrying a role.
    pub fn role_ids(&self, role: SectionRole) -> &[String] {
        self.roles.get(&role).map(Vec::as_slice).unwrap_or(&[])
    }

    fn record(&mut self, profile: &LanguageProfile, title: &str, id: &str) {
        if title.is_empty() || id.is_empty() {
            return;
        }
        self.sections.insert(title.to_string(), id.to_string());

        match profile.classify(title) {
            Some(SectionKind::WordType(word_type)) => {
                if !self.word_types.iter().any(|s| s.id == id) {
                    self.word_types.push(WordTypeSection {
                        title: title.to_string(),
                        id: id.to_string(),
                        word_type,
                    });
                }
            }
            Some(SectionKind::Role(role)) => {
                let ids = self.roles.entry(role).or_default();
                if !ids.iter().any(|existing| existing == id) {
                    ids.push(id.to_string());
                }
            }
            None => {}
        }
    }
}

/// Compiled selectors for outline and heading discovery.
pub struct StructureSelectors {
    outline_roots: Vec<Selector>,
    outline_title: Selector,
    vector_text: Selector,
    vector_number: Selector,
    headings: Selector,
}

impl StructureSelectors {
    pub fn new() -> Result<Self> {
        Ok(Self {
            outline_roots: vec![
                parse_selector("#toc > ul")?,
                parse_selector("div.toc > ul")?,
                parse_selector("ul.vector-toc-contents")?,
                parse_selector("#mw-panel-toc-list")?,
            ],
            outline_title: parse_selector(".toctext")?,
            vector_text: parse_selector(".vector-toc-text")?,
            vector_number: parse_selector(".vector-toc-numb")?,
            headings: parse_selector("h2, h3, h4")?,
        })
    }
}

/// Discover the section structure of a parsed article for one language.
pub fn discover(
    document: &Html,
    profile: &LanguageProfile,
    selectors: &StructureSelectors,
) -> PageStructure {
    if let Some(structure) = from_outline(document, profile, selectors) {
        if structure.language_found {
            return structure;
        }
        log::debug!(
            "Outline has no '{}' entry, scanning headings",
            profile.section_names.join("/")
        );
    }
    from_headings(document, profile, selectors)
}

fn from_outline(
    document: &Html,
    profile: &LanguageProfile,
    selectors: &StructureSelectors,
) -> Option<PageStructure> {
    let root = selectors
        .outline_roots
        .iter()
        .find_map(|sel| document.select(sel).next())?;

    let mut structure = PageStructure::default();
    for entry in child_items(root) {
        let Some((title, id)) = outline_entry(entry, selectors) else {
            continue;
        };
        if !profile.names_language(&title) {
            continue;
        }

        structure.language_found = true;
        structure.sections.insert(title, id);
        walk_outline(entry, profile, selectors, &mut structure, 1);
        break;
    }
    Some(structure)
}

fn walk_outline(
    entry: ElementRef,
    profile: &LanguageProfile,
    selectors: &StructureSelectors,
    structure: &mut PageStructure,
    depth: usize,
) {
    if depth > OUTLINE_DEPTH {
        return;
    }
    for list in entry.children().filter_map(ElementRef::wrap) {
        if list.value().name() != "ul" {
            continue;
        }
        for child in child_items(list) {
            if let Some((title, id)) = outline_entry(child, selectors) {
                structure.record(profile, &title, &id);
            }
            walk_outline(child, profile, selectors, structure, depth + 1);
        }
    }
}

fn child_items(list: ElementRef) -> impl Iterator<Item = ElementRef> {
    list.children()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().name() == "li")
}

/// Title and anchor id of an outline list item.
fn outline_entry(item: ElementRef, selectors: &StructureSelectors) -> Option<(String, String)> {
    let link = item
        .children()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == "a")?;
    let id = decode_anchor(link.value().attr("href")?);
    if id.is_empty() {
        return None;
    }

    let title = if let Some(text) = link.select(&selectors.outline_title).next() {
        element_text(text)
    } else if let Some(text) = link.select(&selectors.vector_text).next() {
        text_without(text, &selectors.vector_number)
    } else {
        element_text(link)
    };
    Some((title, id))
}

fn from_headings(
    document: &Html,
    profile: &LanguageProfile,
    selectors: &StructureSelectors,
) -> PageStructure {
    let mut structure = PageStructure::default();
    let mut in_language = false;

    for heading in document.select(&selectors.headings) {
        let Some(level) = heading_level(heading) else {
            continue;
        };
        let title = heading_title(heading);
        let id = heading_id(heading).unwrap_or_default();

        if profile.names_language(&title) {
            structure.language_found = true;
            structure.sections.insert(title, id);
            in_language = true;
            continue;
        }
        if level <= 2 {
            in_language = false;
            continue;
        }
        if in_language {
            structure.record(profile, &title, &id);
        }
    }
    structure
}
