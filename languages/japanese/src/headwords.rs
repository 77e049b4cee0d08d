use jiten_core::{DictionaryEntry, HeadwordMap};

use crate::other_forms::OtherFormsResolver;
use crate::reading::ReadingResolver;

/// Headword derivation for parsed entries
pub trait Headwords {
    /// Readings of the 読み方 cell mapped to the expression, then merged
    /// with the 異形 headwords. Warnings are logged inside an `entry` span
    /// carrying the global identifier.
    fn headwords(&self) -> HeadwordMap;
}

impl<F> Headwords for DictionaryEntry<F> {
    fn headwords(&self) -> HeadwordMap {
        let span = tracing::info_span!("entry", id = %self.global_identifier());
        let _guard = span.enter();

        let readings = ReadingResolver.resolve(&self.yomikata);
        let mut headwords = HeadwordMap::from_primary(&self.expression, &readings);
        OtherFormsResolver.merge_into(&mut headwords, &self.other_forms);
        headwords
    }
}
