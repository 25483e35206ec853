//! French Wiktionary.

use super::{LanguageProfile, SectionRole};

pub static FRENCH: LanguageProfile = LanguageProfile {
    code: "fr",
    host: "fr.wiktionary.org",
    section_names: &["Français"],
    role_fragments: &[
        (SectionRole::Etymology, &["étymologie"]),
        (SectionRole::Pronunciation, &["prononciation"]),
        (SectionRole::Synonyms, &["synonymes"]),
        (SectionRole::Antonyms, &["antonymes"]),
        (SectionRole::Translations, &["traductions"]),
        (SectionRole::Derivatives, &["dérivés"]),
        (SectionRole::Related, &["apparentés", "vocabulaire apparenté"]),
        (SectionRole::Variants, &["variantes"]),
        (SectionRole::SeeAlso, &["voir aussi"]),
        (SectionRole::References, &["références", "sources"]),
        (SectionRole::UsageNotes, &["notes", "remarques"]),
    ],
    word_type_fragments: &[
        ("nom propre", "proper noun"),
        ("nom commun", "noun"),
        ("pronom", "pronoun"),
        ("adverbe", "adverb"),
        ("verbe", "verb"),
        ("adjectif", "adjective"),
        ("préposition", "preposition"),
        ("conjonction", "conjunction"),
        ("interjection", "interjection"),
        ("article", "article"),
        ("numéral", "numeral"),
        ("particule", "particle"),
        ("locution", "phrase"),
        ("préfixe", "prefix"),
        ("suffixe", "suffix"),
        ("nom", "noun"),
    ],
    valid_word_types: &[
        "noun",
        "proper noun",
        "pronoun",
        "verb",
        "adverb",
        "adjective",
        "preposition",
        "conjunction",
        "interjection",
        "article",
        "numeral",
        "particle",
        "phrase",
        "prefix",
        "suffix",
    ],
    valid_genders: &["masculine", "feminine", "common"],
    gender_markers: &[
        ("masculin", "masculine"),
        ("féminin", "feminine"),
        ("épicène", "common"),
    ],
    gender_selector: "span.ligne-de-forme",
    pronunciation_selector: "span.API",
    pronunciation_delimiters: &[('\\', '\\'), ('[', ']')],
    sense_label_selector: "span.term, span.emploi",
    sense_strip_selector: "span.term, span.emploi",
    example_selector: "span.example q, ul > li > i",
    form_of_selector: "span.form-of a",
    form_of_pattern: r"(?i)\b(?:pluriel|féminin|masculin|participe passé|participe présent|forme conjuguée)\s+(?:de|du|d’|d')\s*([^\s.,;()]+)",
    inflection_table_selector: Some("table.flextable"),
    plural_header: "pluriel",
    plural_inline_selector: None,
    translation_box_selector: "div.boite, div.translations",
    language_names: &[
        ("Anglais", "en"),
        ("Allemand", "de"),
        ("Espagnol", "es"),
        ("Italien", "it"),
        ("Portugais", "pt"),
        ("Néerlandais", "nl"),
        ("Russe", "ru"),
        ("Japonais", "ja"),
        ("Chinois", "zh"),
        ("Arabe", "ar"),
        ("Coréen", "ko"),
        ("Polonais", "pl"),
        ("Suédois", "sv"),
        ("Turc", "tr"),
        ("Grec", "el"),
        ("Latin", "la"),
    ],
    etymology_markers: &[
        "du latin",
        "du grec",
        "de l’",
        "étymologie",
        "(date à préciser)",
        "dérivé de",
        "composé de",
        "emprunté",
    ],
};
