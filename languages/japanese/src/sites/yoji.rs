use jiten_core::{ColumnMap, DictionarySiteProfile};
use regex::Regex;

use super::JITENON_NETLOC;

/// 四字熟語辞典オンライン columns not shared with other sites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YojiFields {
    pub source: String,
    pub kanken_level: String,
    pub usage: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

/// yoji.jitenon.jp
pub struct YojiProfile {
    columns: ColumnMap<YojiFields>,
}

impl YojiProfile {
    pub fn new() -> Self {
        let columns = ColumnMap::<YojiFields>::new()
            .single("四字熟語", "expression", |e| &e.expression, |e| &mut e.expression)
            .single("読み方", "yomikata", |e| &e.yomikata, |e| &mut e.yomikata)
            .single("意味", "definition", |e| &e.definition, |e| &mut e.definition)
            .list("異形", "other_forms", |e| &e.other_forms, |e| &mut e.other_forms)
            .single("出典", "source", |e| &e.fields.source, |e| &mut e.fields.source)
            .single(
                "漢検級",
                "kanken_level",
                |e| &e.fields.kanken_level,
                |e| &mut e.fields.kanken_level,
            )
            .single("場面用途", "usage", |e| &e.fields.usage, |e| &mut e.fields.usage)
            .list("類義語", "synonyms", |e| &e.fields.synonyms, |e| &mut e.fields.synonyms)
            .list("対義語", "antonyms", |e| &e.fields.antonyms, |e| &mut e.fields.antonyms);

        Self { columns }
    }
}

impl Default for YojiProfile {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionarySiteProfile for YojiProfile {
    type Fields = YojiFields;

    fn name(&self) -> &str {
        "jitenonyoji"
    }

    fn target(&self) -> &str {
        "jitenon-yoji"
    }

    fn netloc_pattern(&self) -> &Regex {
        &JITENON_NETLOC
    }

    fn column_map(&self) -> &ColumnMap<YojiFields> {
        &self.columns
    }
}
