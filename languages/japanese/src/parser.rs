use std::sync::{Arc, LazyLock};

use chrono::NaiveDate;
use jiten_core::{
    DefaultPreprocessor, DictionaryEntry, DictionarySiteProfile, ParseError, Preprocessor,
};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static DATE_MODIFIED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""dateModified"\s*:\s*"(\d{4}-\d{2}-\d{2})"#).expect("valid regex")
});
static DATA_TABLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".kanjirighttb").expect("valid selector"));
static COPYRIGHT: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".copyright").expect("valid selector"));

/// Turns cached jitenon pages into [`DictionaryEntry`] values
pub struct EntryParser<P: DictionarySiteProfile> {
    profile: Arc<P>,
    preprocessor: DefaultPreprocessor,
}

impl<P: DictionarySiteProfile> EntryParser<P> {
    pub fn new(profile: Arc<P>) -> Self {
        Self {
            profile,
            preprocessor: DefaultPreprocessor,
        }
    }

    pub fn parse(
        &self,
        entry_id: u32,
        page: &str,
    ) -> Result<DictionaryEntry<P::Fields>, ParseError> {
        let mut entry = DictionaryEntry::new(self.profile.target(), entry_id);
        let document = Html::parse_document(page);

        if let Some(date) = modified_date(page) {
            entry.modified_date = date;
        }

        entry.attribution = document
            .select(&COPYRIGHT)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let table = document
            .select(&DATA_TABLE)
            .next()
            .ok_or(ParseError::MissingTable)?;

        let columns = self.profile.column_map();
        let mut label = String::new();
        for row in rows(table) {
            if let Some(th) = child(row, "th") {
                let text = th.text().collect::<String>();
                let text = text.trim();
                // Blank label cells continue the previous row's field
                if !text.is_empty() {
                    label = text.to_string();
                }
            }

            let td = child(row, "td").ok_or_else(|| ParseError::MissingValueCell(label.clone()))?;
            let value = self.preprocessor.process(&td.text().collect::<String>());
            columns.set(&mut entry, &label, value)?;
        }

        entry.page = table.html();
        Ok(entry)
    }
}

fn modified_date(page: &str) -> Option<NaiveDate> {
    let caps = DATE_MODIFIED.captures(page)?;
    NaiveDate::parse_from_str(&caps[1], "%Y-%m-%d").ok()
}

/// `tr` rows of `table` itself, skipping tables nested in cells
fn rows(table: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    table
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|e| matches!(e.value().name(), "thead" | "tbody" | "tfoot"))
        .flat_map(|section| section.children().filter_map(ElementRef::wrap))
        .filter(|e| e.value().name() == "tr")
}

fn child<'a>(row: ElementRef<'a>, name: &str) -> Option<ElementRef<'a>> {
    row.children()
        .filter_map(ElementRef::wrap)
        .find(|e| e.value().name() == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sites::{KotowazaProfile, YojiProfile};

    fn yoji_page(rows: &str) -> String {
        format!(
            r#"<html><head>
<script type="application/ld+json">{{
  "@type": "WebPage",
  "dateModified": "2023-04-05T10:00:00+09:00"
}}</script>
</head><body>
<table class="kanjirighttb"><tbody>{rows}</tbody></table>
<div class="copyright">Copyright (C) 四字熟語辞典オンライン</div>
</body></html>"#
        )
    }

    fn parser() -> EntryParser<YojiProfile> {
        EntryParser::new(Arc::new(YojiProfile::new()))
    }

    #[test]
    fn test_full_yoji_page() {
        let page = yoji_page(
            "<tr><th>四字熟語</th><td>一期一会</td></tr>
             <tr><th>読み方</th><td>いちごいちえ</td></tr>
             <tr><th>意味</th><td>一生に一度だけの機会。\n生涯に一度限りであること。</td></tr>
             <tr><th>異形</th><td>一期一會（いちごいちえ）</td></tr>
             <tr><th>出典</th><td>『茶湯一会集』</td></tr>
             <tr><th>漢検級</th><td>3級</td></tr>",
        );

        let entry = parser().parse(1234, &page).unwrap();
        assert_eq!(entry.global_identifier(), "@jitenon-yoji-001234");
        assert_eq!(entry.expression, "一期一会");
        assert_eq!(entry.yomikata, "いちごいちえ");
        assert_eq!(entry.definition, "一生に一度だけの機会。生涯に一度限りであること。");
        assert_eq!(entry.other_forms, vec!["一期一會（いちごいちえ）"]);
        assert_eq!(entry.fields.source, "『茶湯一会集』");
        assert_eq!(entry.fields.kanken_level, "3級");
        assert_eq!(entry.modified_date, NaiveDate::from_ymd_opt(2023, 4, 5).unwrap());
        assert_eq!(entry.attribution, "Copyright (C) 四字熟語辞典オンライン");
        assert!(entry.page.starts_with("<table class=\"kanjirighttb\">"));
        assert!(!entry.page.contains("copyright"));
    }

    #[test]
    fn test_missing_table() {
        let page = "<html><body><p>メンテナンス中</p></body></html>";
        assert_eq!(parser().parse(1, page).unwrap_err(), ParseError::MissingTable);
    }

    #[test]
    fn test_blank_label_inherits_previous() {
        let page = yoji_page(
            "<tr><th>四字熟語</th><td>青天白日</td></tr>
             <tr><th>異形</th><td>晴天白日（せいてんはくじつ）</td></tr>
             <tr><th></th><td>青天白昼（せいてんはくちゅう）</td></tr>
             <tr><td>晴天白昼（せいてんはくちゅう）</td></tr>",
        );

        let entry = parser().parse(2, &page).unwrap();
        assert_eq!(
            entry.other_forms,
            vec![
                "晴天白日（せいてんはくじつ）",
                "青天白昼（せいてんはくちゅう）",
                "晴天白昼（せいてんはくちゅう）",
            ]
        );
    }

    #[test]
    fn test_unknown_label_is_fatal() {
        let page = yoji_page(
            "<tr><th>四字熟語</th><td>一石二鳥</td></tr>
             <tr><th>画数</th><td>20</td></tr>",
        );
        assert_eq!(
            parser().parse(3, &page).unwrap_err(),
            ParseError::UnknownColumn("画数".to_string())
        );
    }

    #[test]
    fn test_row_without_value_cell() {
        let page = yoji_page("<tr><th>四字熟語</th></tr>");
        assert_eq!(
            parser().parse(4, &page).unwrap_err(),
            ParseError::MissingValueCell("四字熟語".to_string())
        );
    }

    #[test]
    fn test_missing_date_and_attribution_are_tolerated() {
        let page = r#"<table class="kanjirighttb">
            <tr><th>四字熟語</th><td>温故知新</td></tr>
        </table>"#;
        let entry = parser().parse(5, page).unwrap();
        assert_eq!(entry.expression, "温故知新");
        assert_eq!(entry.modified_date, NaiveDate::default());
        assert_eq!(entry.attribution, "");
    }

    #[test]
    fn test_nested_table_rows_are_ignored() {
        let page = yoji_page(
            "<tr><th>四字熟語</th><td>一石二鳥<table>
             <tr><th>画数</th><td>20</td></tr>
             </table></td></tr>",
        );
        let entry = parser().parse(6, &page).unwrap();
        assert_eq!(entry.expression, "一石二鳥画数20");
    }

    #[test]
    fn test_values_are_normalized() {
        let page = yoji_page("<tr><th>類義語</th><td>一挙両得, 一箭双雕\n</td></tr>");
        let entry = parser().parse(7, &page).unwrap();
        assert_eq!(entry.fields.synonyms, vec!["一挙両得、一箭双雕"]);
    }

    #[test]
    fn test_kotowaza_profile() {
        let page = r#"<table class="kanjirighttb"><tbody>
            <tr><th>言葉</th><td>猿も木から落ちる</td></tr>
            <tr><th>読み方</th><td>さるもきからおちる</td></tr>
            <tr><th>意味</th><td>その道の名人でも失敗することがある。</td></tr>
            <tr><th>類句</th><td>弘法にも筆の誤り</td></tr>
            <tr><th></th><td>河童の川流れ</td></tr>
        </tbody></table>"#;

        let parser = EntryParser::new(Arc::new(KotowazaProfile::new()));
        let entry = parser.parse(42, page).unwrap();
        assert_eq!(entry.global_identifier(), "@jitenon-kotowaza-000042");
        assert_eq!(entry.expression, "猿も木から落ちる");
        assert_eq!(entry.fields.related_phrases, vec!["弘法にも筆の誤り", "河童の川流れ"]);
    }
}
