//! English Wiktionary.

use super::{LanguageProfile, SectionRole};

pub static ENGLISH: LanguageProfile = LanguageProfile {
    code: "en",
    host: "en.wiktionary.org",
    section_names: &["English"],
    role_fragments: &[
        (SectionRole::Etymology, &["etymology"]),
        (SectionRole::Pronunciation, &["pronunciation"]),
        (SectionRole::Synonyms, &["synonyms"]),
        (SectionRole::Antonyms, &["antonyms"]),
        (SectionRole::Translations, &["translations"]),
        (SectionRole::Derivatives, &["derived terms", "compounds"]),
        (SectionRole::Related, &["related terms"]),
        (SectionRole::Variants, &["alternative forms", "alternative spellings"]),
        (SectionRole::SeeAlso, &["see also"]),
        (SectionRole::References, &["references", "further reading"]),
        (SectionRole::UsageNotes, &["usage notes"]),
    ],
    word_type_fragments: &[
        ("proper noun", "proper noun"),
        ("pronoun", "pronoun"),
        ("noun", "noun"),
        ("adverb", "adverb"),
        ("verb", "verb"),
        ("adjective", "adjective"),
        ("preposition", "preposition"),
        ("conjunction", "conjunction"),
        ("interjection", "interjection"),
        ("article", "article"),
        ("determiner", "determiner"),
        ("numeral", "numeral"),
        ("particle", "particle"),
        ("phrase", "phrase"),
        ("proverb", "phrase"),
        ("prefix", "prefix"),
        ("suffix", "suffix"),
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
        "determiner",
        "numeral",
        "particle",
        "phrase",
        "prefix",
        "suffix",
    ],
    valid_genders: &["masculine", "feminine", "neuter", "common"],
    gender_markers: &[
        ("m", "masculine"),
        ("f", "feminine"),
        ("n", "neuter"),
        ("c", "common"),
    ],
    gender_selector: "span.gender",
    pronunciation_selector: "span.IPA",
    pronunciation_delimiters: &[('/', '/'), ('[', ']')],
    sense_label_selector: "span.ib-content",
    sense_strip_selector: "span.ib-brac, span.ib-content, span.ib-comma",
    example_selector: ".e-example, dd > i",
    form_of_selector: ".form-of-definition-link a",
    form_of_pattern: r"(?i)\b(?:plural|singular|past tense|past participle|present participle|comparative|superlative|alternative (?:form|spelling)|inflection) of ([^\s.,;()]+)",
    inflection_table_selector: None,
    plural_header: "plural",
    plural_inline_selector: Some("b.p-form-of"),
    translation_box_selector: "div.translations, table.translations",
    language_names: &[
        ("French", "fr"),
        ("Spanish", "es"),
        ("German", "de"),
        ("Italian", "it"),
        ("Portuguese", "pt"),
        ("Dutch", "nl"),
        ("Russian", "ru"),
        ("Japanese", "ja"),
        ("Chinese", "zh"),
        ("Mandarin", "zh"),
        ("Arabic", "ar"),
        ("Korean", "ko"),
        ("Polish", "pl"),
        ("Swedish", "sv"),
        ("Turkish", "tr"),
        ("Greek", "el"),
        ("Latin", "la"),
    ],
    etymology_markers: &[
        "from ",
        "etymology",
        "borrowed from",
        "inherited from",
        "compound of",
        "coined by",
    ],
};
