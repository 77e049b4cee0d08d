pub mod entry;
pub mod error;
pub mod headwords;
pub mod preprocess;
pub mod profile;

pub use entry::DictionaryEntry;
pub use error::{DataWarning, ParseError};
pub use headwords::HeadwordMap;
pub use preprocess::{DefaultPreprocessor, Preprocessor};
pub use profile::{Accessor, Column, ColumnMap, DictionarySiteProfile};
