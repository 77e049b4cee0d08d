use std::sync::LazyLock;

use jiten_core::{DataWarning, HeadwordMap};
use regex::Regex;

static OTHER_FORM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^（]+)（([ぁ-ヿ、]+)）$").expect("valid regex"));

/// Headwords from 異形 annotations shaped `expression（reading）`
#[derive(Debug, Clone, Copy, Default)]
pub struct OtherFormsResolver;

impl OtherFormsResolver {
    /// Reading → expressions for every well-formed annotation.
    /// Malformed ones are logged and skipped.
    pub fn resolve(&self, other_forms: &[String]) -> HeadwordMap {
        let mut headwords = HeadwordMap::new();

        for form in other_forms {
            let Some(caps) = OTHER_FORM.captures(form) else {
                let warning = DataWarning::MalformedOtherForm(form.clone());
                tracing::warn!("{warning}");
                continue;
            };
            headwords.insert(&caps[2], &caps[1]);
        }

        headwords
    }

    /// Merge the other-form headwords into `primary`
    pub fn merge_into(&self, primary: &mut HeadwordMap, other_forms: &[String]) {
        primary.merge(&self.resolve(other_forms));
    }
}
