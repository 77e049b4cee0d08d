use std::sync::LazyLock;

use jiten_core::DataWarning;
use regex::Regex;

use crate::expressions::expand_abbreviation;

// Kana (ぁ..ヿ) plus the ideographic comma
static KANA_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ぁ-ヿ、]+$").expect("valid regex"));
static KANA_FOOTNOTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([ぁ-ヿ、]+)※").expect("valid regex"));
static KANA_ABBREVIATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[ぁ-ヿ、]+（[ぁ-ヿ、]）[ぁ-ヿ、]+$").expect("valid regex")
});
static KANA_ALTERNATIVES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([ぁ-ヿ、]+)（([ぁ-ヿ/\s、]+)）$").expect("valid regex")
});

/// Canonical readings from a raw 読み方 cell
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadingResolver;

impl ReadingResolver {
    /// Readings in priority order, or `None` if no rule applies
    pub fn try_resolve(&self, yomikata: &str) -> Option<Vec<String>> {
        if KANA_ONLY.is_match(yomikata) {
            return Some(vec![yomikata.to_string()]);
        }

        if let Some(caps) = KANA_FOOTNOTE.captures(yomikata) {
            return Some(vec![caps[1].to_string()]);
        }

        if KANA_ABBREVIATION.is_match(yomikata) {
            return Some(expand_abbreviation(yomikata));
        }

        if let Some(caps) = KANA_ALTERNATIVES.captures(yomikata) {
            let mut readings = vec![caps[1].to_string()];
            readings.extend(caps[2].split('/').map(|alt| alt.trim().to_string()));
            return Some(readings);
        }

        None
    }

    /// Like [`try_resolve`](Self::try_resolve), but a malformed cell is
    /// logged and yields a single empty reading.
    pub fn resolve(&self, yomikata: &str) -> Vec<String> {
        self.try_resolve(yomikata).unwrap_or_else(|| {
            let warning = DataWarning::MalformedReading(yomikata.to_string());
            tracing::warn!("{warning}");
            vec![String::new()]
        })
    }
}
