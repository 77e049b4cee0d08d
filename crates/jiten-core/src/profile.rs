use std::fmt;

use regex::Regex;

use crate::entry::DictionaryEntry;
use crate::error::ParseError;

/// Per-site capabilities the scraper and parser are generic over
pub trait DictionarySiteProfile: Send + Sync {
    /// Site-specific columns beyond the shared entry fields
    type Fields: Default + Clone + fmt::Debug + Send + Sync;

    /// Cache directory name for this site
    fn name(&self) -> &str;

    /// Target identifier used in global entry identifiers
    fn target(&self) -> &str;

    /// Pattern the URL netloc must match. Capture group 1, when present, is
    /// the subdomain and gets its own cache directory.
    fn netloc_pattern(&self) -> &Regex;

    /// Table label → entry field dispatch
    fn column_map(&self) -> &ColumnMap<Self::Fields>;
}

/// How a column reads and writes its entry field
pub enum Accessor<F> {
    /// Overwritten on every write
    Single {
        get: fn(&DictionaryEntry<F>) -> &String,
        get_mut: fn(&mut DictionaryEntry<F>) -> &mut String,
    },
    /// Appended to on every write
    List {
        get: fn(&DictionaryEntry<F>) -> &Vec<String>,
        get_mut: fn(&mut DictionaryEntry<F>) -> &mut Vec<String>,
    },
}

pub struct Column<F> {
    pub label: &'static str,
    pub field: &'static str,
    pub accessor: Accessor<F>,
}

impl<F> Column<F> {
    pub fn set(&self, entry: &mut DictionaryEntry<F>, value: String) {
        match &self.accessor {
            Accessor::Single { get_mut, .. } => *get_mut(entry) = value,
            Accessor::List { get_mut, .. } => get_mut(entry).push(value),
        }
    }

    /// Field value as shown in a row dump, list items joined with `；`
    pub fn render(&self, entry: &DictionaryEntry<F>) -> String {
        match &self.accessor {
            Accessor::Single { get, .. } => get(entry).clone(),
            Accessor::List { get, .. } => get(entry).join("；"),
        }
    }
}

/// Ordered, static mapping from table labels to entry fields.
///
/// Built once per profile; lookups are by exact label.
pub struct ColumnMap<F> {
    columns: Vec<Column<F>>,
}

impl<F> ColumnMap<F> {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    pub fn single(
        mut self,
        label: &'static str,
        field: &'static str,
        get: fn(&DictionaryEntry<F>) -> &String,
        get_mut: fn(&mut DictionaryEntry<F>) -> &mut String,
    ) -> Self {
        self.columns.push(Column {
            label,
            field,
            accessor: Accessor::Single { get, get_mut },
        });
        self
    }

    pub fn list(
        mut self,
        label: &'static str,
        field: &'static str,
        get: fn(&DictionaryEntry<F>) -> &Vec<String>,
        get_mut: fn(&mut DictionaryEntry<F>) -> &mut Vec<String>,
    ) -> Self {
        self.columns.push(Column {
            label,
            field,
            accessor: Accessor::List { get, get_mut },
        });
        self
    }

    pub fn get(&self, label: &str) -> Option<&Column<F>> {
        self.columns.iter().find(|c| c.label == label)
    }

    /// Write `value` into the field mapped to `label`
    pub fn set(
        &self,
        entry: &mut DictionaryEntry<F>,
        label: &str,
        value: String,
    ) -> Result<(), ParseError> {
        let column = self
            .get(label)
            .ok_or_else(|| ParseError::UnknownColumn(label.to_string()))?;
        column.set(entry, value);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Column<F>> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Entry id followed by every mapped field, comma separated
    pub fn render_row(&self, entry: &DictionaryEntry<F>) -> String {
        std::iter::once(entry.entry_id().to_string())
            .chain(self.columns.iter().map(|c| c.render(entry)))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<F> Default for ColumnMap<F> {
    fn default() -> Self {
        Self::new()
    }
}
