use jiten_core::DictionaryEntry;

/// Dictionary revision string from the newest modified date,
/// e.g. `2023年04月05日閲覧`
pub fn revision<'a, F: 'a>(
    entries: impl IntoIterator<Item = &'a DictionaryEntry<F>>,
) -> Option<String> {
    entries
        .into_iter()
        .map(|e| e.modified_date)
        .max()
        .map(|date| date.format("%Y年%m月%d日閲覧").to_string())
}

/// Attribution of the most recently modified entry; the first one wins ties
pub fn latest_attribution<'a, F: 'a>(
    entries: impl IntoIterator<Item = &'a DictionaryEntry<F>>,
) -> Option<&'a str> {
    entries
        .into_iter()
        .fold(None::<&'a DictionaryEntry<F>>, |latest, entry| match latest {
            Some(current) if current.modified_date >= entry.modified_date => Some(current),
            _ => Some(entry),
        })
        .map(|e| e.attribution.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: u32, date: (i32, u32, u32), attribution: &str) -> DictionaryEntry<()> {
        let mut entry = DictionaryEntry::new("jitenon-yoji", id);
        entry.modified_date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        entry.attribution = attribution.to_string();
        entry
    }

    #[test]
    fn test_revision_uses_newest_date() {
        let entries = vec![
            entry(1, (2022, 12, 1), "old"),
            entry(2, (2023, 4, 5), "new"),
            entry(3, (2021, 1, 1), "older"),
        ];
        assert_eq!(revision(&entries).as_deref(), Some("2023年04月05日閲覧"));
        assert_eq!(latest_attribution(&entries), Some("new"));
    }

    #[test]
    fn test_ties_keep_first_seen() {
        let entries = vec![entry(1, (2023, 1, 1), "first"), entry(2, (2023, 1, 1), "second")];
        assert_eq!(latest_attribution(&entries), Some("first"));
    }

    #[test]
    fn test_empty_collection() {
        let entries: Vec<DictionaryEntry<()>> = Vec::new();
        assert_eq!(revision(&entries), None);
        assert_eq!(latest_attribution(&entries), None);
    }
}
