use jiten_core::{ColumnMap, DictionarySiteProfile};
use regex::Regex;

use super::JITENON_NETLOC;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KotowazaFields {
    pub origin: String,
    pub example: String,
    pub english: String,
    pub related_phrases: Vec<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// kotowaza.jitenon.jp
pub struct KotowazaProfile {
    columns: ColumnMap<KotowazaFields>,
}

impl KotowazaProfile {
    pub fn new() -> Self {
        let columns = ColumnMap::<KotowazaFields>::new()
            .single("言葉", "expression", |e| &e.expression, |e| &mut e.expression)
            .single("読み方", "yomikata", |e| &e.yomikata, |e| &mut e.yomikata)
            .single("意味", "definition", |e| &e.definition, |e| &mut e.definition)
            .list("異形", "other_forms", |e| &e.other_forms, |e| &mut e.other_forms)
            .single("出典", "origin", |e| &e.fields.origin, |e| &mut e.fields.origin)
            .single("例文", "example", |e| &e.fields.example, |e| &mut e.fields.example)
            .list(
                "類句",
                "related_phrases",
                |e| &e.fields.related_phrases,
                |e| &mut e.fields.related_phrases,
            )
            .list("類義語", "synonyms", |e| &e.fields.synonyms, |e| &mut e.fields.synonyms)
            .list("対義語", "antonyms", |e| &e.fields.antonyms, |e| &mut e.fields.antonyms)
            .single("英語", "english", |e| &e.fields.english, |e| &mut e.fields.english);

        Self { columns }
    }
}

impl Default for KotowazaProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionarySiteProfile for KotowazaProfile {
    type Fields = KotowazaFields;

    fn name(&self) -> &str {
        "jitenonkotowaza"
    }

    fn target(&self) -> &str {
        "jitenon-kotowaza"
    }

    fn netloc_pattern(&self) -> &Regex {
        &JITENON_NETLOC
    }

    fn column_map(&self) -> &ColumnMap<KotowazaFields> {
        &self.columns
    }
}
