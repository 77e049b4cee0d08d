use chrono::NaiveDate;

/// A parsed dictionary page.
///
/// `F` carries the columns only one site has. Identity is
/// (target, entry id); both are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEntry<F> {
    target: String,
    entry_id: u32,
    pub expression: String,
    /// Raw 読み方 cell text
    pub yomikata: String,
    pub definition: String,
    /// Raw 異形 annotations, `expression（reading）`
    pub other_forms: Vec<String>,
    pub modified_date: NaiveDate,
    pub attribution: String,
    /// Outer HTML of the data table only
    pub page: String,
    pub fields: F,
}

impl<F: Default> DictionaryEntry<F> {
    pub fn new(target: impl Into<String>, entry_id: u32) -> Self {
        Self {
            target: target.into(),
            entry_id,
            expression: String::new(),
            yomikata: String::new(),
            definition: String::new(),
            other_forms: Vec::new(),
            modified_date: NaiveDate::default(),
            attribution: String::new(),
            page: String::new(),
            fields: F::default(),
        }
    }
}

impl<F> DictionaryEntry<F> {
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn entry_id(&self) -> u32 {
        self.entry_id
    }

    /// `@{target}-{id}` with the id zero-padded to six digits
    pub fn global_identifier(&self) -> String {
        format!("@{}-{:06}", self.target, self.entry_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_defaults_to_epoch() {
        let entry = DictionaryEntry::<()>::new("jitenon-yoji", 7);
        assert_eq!(entry.modified_date, NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert!(entry.other_forms.is_empty());
    }

    #[test]
    fn test_global_identifier_is_zero_padded() {
        let entry = DictionaryEntry::<()>::new("jitenon-kotowaza", 123);
        assert_eq!(entry.global_identifier(), "@jitenon-kotowaza-000123");
    }
}
