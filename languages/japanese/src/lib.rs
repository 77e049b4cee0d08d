pub mod export;
pub mod expressions;
pub mod headwords;
pub mod other_forms;
pub mod parser;
pub mod reading;
pub mod sites;

pub use export::{latest_attribution, revision};
pub use expressions::expand_abbreviation;
pub use headwords::Headwords;
pub use other_forms::OtherFormsResolver;
pub use parser::EntryParser;
pub use reading::ReadingResolver;
pub use sites::{KotowazaProfile, YojiProfile, entry_id_from_url};
