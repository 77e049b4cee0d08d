/// Structural problems with a dictionary page.
///
/// Any of these means the site's markup no longer matches its profile;
/// the entry is dropped and the profile needs updating.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Table data not found in page")]
    MissingTable,

    #[error("Unknown column label: {0:?}")]
    UnknownColumn(String),

    #[error("Row labelled {0:?} has no value cell")]
    MissingValueCell(String),
}

/// Data-quality problems in free-text fields. Logged, never fatal.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum DataWarning {
    #[error("Invalid 読み方 format: {0}")]
    MalformedReading(String),

    #[error("Invalid 異形 format: {0}")]
    MalformedOtherForm(String),
}
