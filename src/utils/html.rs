//! DOM helpers for MediaWiki article markup.
//!
//! Headings come in two layouts:
//! `<h2><span class="mw-headline" id="English">English</span></h2>` and
//! `<div class="mw-heading mw-heading2"><h2 id="English">English</h2></div>`.
//! A section's content is the run of element siblings after its heading
//! block, up to the next heading block.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::utils::normalize_whitespace;

/// Parse a CSS selector, mapping failures into [`AppError::Selector`].
pub fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

/// Heading level of an `h1`-`h6` element or a `div.mw-heading` wrapper.
pub fn heading_level(element: ElementRef) -> Option<u8> {
    let name = element.value().name();
    if let Some(level) = name
        .strip_prefix('h')
        .and_then(|n| n.parse::<u8>().ok())
        .filter(|n| (1..=6).contains(n))
    {
        return Some(level);
    }

    if name == "div" && element.value().classes().any(|c| c == "mw-heading") {
        return element
            .children()
            .filter_map(ElementRef::wrap)
            .find_map(heading_level);
    }

    None
}

/// Whether an element starts a new section.
pub fn is_heading(element: ElementRef) -> bool {
    heading_level(element).is_some()
}

/// Anchor id of a heading element.
pub fn heading_id(heading: ElementRef) -> Option<String> {
    if let Some(id) = heading.value().attr("id") {
        return Some(id.to_string());
    }
    heading
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|e| e.value().classes().any(|c| c == "mw-headline") || is_heading(*e))
        .find_map(|e| e.value().attr("id"))
        .map(str::to_string)
}

/// Visible title of a heading, without edit-section links.
pub fn heading_title(heading: ElementRef) -> String {
    if let Some(headline) = heading
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().classes().any(|c| c == "mw-headline"))
    {
        return element_text(headline);
    }
    text_where(heading, &|e| {
        e.value().classes().any(|c| c == "mw-editsection")
    })
}

/// Locate the element carrying an anchor id.
pub fn find_by_id<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().id() == Some(id))
}

/// Climb from an anchor element to the block that precedes section content.
pub fn heading_block(anchor: ElementRef) -> ElementRef {
    let mut current = anchor;
    loop {
        let Some(parent) = current.parent().and_then(ElementRef::wrap) else {
            return current;
        };
        let is_wrapper = parent.value().classes().any(|c| c == "mw-heading");
        if is_heading(current) && !is_wrapper {
            return current;
        }
        if !is_heading(current) && !is_heading(parent) && !is_wrapper {
            return current;
        }
        current = parent;
    }
}

/// Element siblings that make up the section anchored at `id`.
pub fn section_elements<'a>(document: &'a Html, id: &str) -> Vec<ElementRef<'a>> {
    let Some(anchor) = find_by_id(document, id) else {
        return Vec::new();
    };
    following_until_heading(heading_block(anchor))
}

/// Element siblings after `start`, up to the next heading.
pub fn following_until_heading(start: ElementRef) -> Vec<ElementRef> {
    start
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .take_while(|e| !is_heading(*e))
        .collect()
}

/// Whitespace-normalized text of an element.
pub fn element_text(element: ElementRef) -> String {
    normalize_whitespace(&element.text().collect::<String>())
}

/// Whitespace-normalized text of an element, skipping matching descendants.
pub fn text_without(element: ElementRef, skip: &Selector) -> String {
    text_where(element, &|e| skip.matches(&e))
}

fn text_where(element: ElementRef, skip: &dyn Fn(ElementRef) -> bool) -> String {
    let mut out = String::new();
    collect_text(element, skip, &mut out);
    normalize_whitespace(&out)
}

fn collect_text(element: ElementRef, skip: &dyn Fn(ElementRef) -> bool, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
        } else if let Some(child_el) = ElementRef::wrap(child) {
            if !skip(child_el) {
                collect_text(child_el, skip, out);
            }
        }
    }
}

/// Whether `element` matches `selector` or contains a match.
pub fn matches_or_contains<'a>(element: ElementRef<'a>, selector: &Selector) -> Option<ElementRef<'a>> {
    if selector.matches(&element) {
        return Some(element);
    }
    element.select(selector).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str = r#"
        <html><body>
        <h2><span class="mw-headline" id="English">English</span><span class="mw-editsection">[edit]</span></h2>
        <h3><span class="mw-headline" id="Noun">Noun</span></h3>
        <p><strong class="headword">test</strong></p>
        <ol><li>A trial.</li></ol>
        <h3><span class="mw-headline" id="Verb">Verb</span></h3>
        <ol><li>To try.</li></ol>
        </body></html>
    "#;

    const MODERN: &str = r#"
        <html><body>
        <div class="mw-heading mw-heading2"><h2 id="English">English</h2><span class="mw-editsection">[edit]</span></div>
        <div class="mw-heading mw-heading3"><h3 id="Noun">Noun</h3></div>
        <p><strong class="headword">test</strong></p>
        <ol><li>A trial.</li></ol>
        <div class="mw-heading mw-heading3"><h3 id="Verb">Verb</h3></div>
        <ol><li>To try.</li></ol>
        </body></html>
    "#;

    #[test]
    fn test_section_elements_classic_layout() {
        let doc = Html::parse_document(CLASSIC);
        let names: Vec<_> = section_elements(&doc, "Noun")
            .iter()
            .map(|e| e.value().name().to_string())
            .collect();
        assert_eq!(names, vec!["p", "ol"]);
    }

    #[test]
    fn test_section_elements_modern_layout() {
        let doc = Html::parse_document(MODERN);
        let names: Vec<_> = section_elements(&doc, "Noun")
            .iter()
            .map(|e| e.value().name().to_string())
            .collect();
        assert_eq!(names, vec!["p", "ol"]);
        assert_eq!(section_elements(&doc, "Verb").len(), 1);
    }

    #[test]
    fn test_heading_title_skips_edit_links() {
        let doc = Html::parse_document(MODERN);
        let sel = parse_selector("div.mw-heading2").unwrap();
        let heading = doc.select(&sel).next().unwrap();
        assert_eq!(heading_title(heading), "English");
        assert_eq!(heading_level(heading), Some(2));
        assert_eq!(heading_id(heading).as_deref(), Some("English"));

        let doc = Html::parse_document(CLASSIC);
        let sel = parse_selector("h2").unwrap();
        let heading = doc.select(&sel).next().unwrap();
        assert_eq!(heading_title(heading), "English");
        assert_eq!(heading_id(heading).as_deref(), Some("English"));
    }

    #[test]
    fn test_text_without() {
        let doc = Html::parse_fragment(
            r#"<li>A  <b>trial</b>. <dl><dd><i>This is a test.</i></dd></dl></li>"#,
        );
        let li = doc.select(&parse_selector("li").unwrap()).next().unwrap();
        let skip = parse_selector("dl").unwrap();
        assert_eq!(text_without(li, &skip), "A trial.");
    }

    #[test]
    fn test_missing_id_yields_empty_section() {
        let doc = Html::parse_document(CLASSIC);
        assert!(section_elements(&doc, "Adjective").is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let doc = Html::parse_document(MODERN);
        assert_eq!(find_by_id(&doc, "Verb").map(|e| e.value().name()), Some("h3"));
        assert!(find_by_id(&doc, "verb").is_none());
        assert!(find_by_id(&doc, "").is_none());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector("[[invalid").is_err());
        assert!(parse_selector("div.translations, table.translations").is_ok());
    }
}
