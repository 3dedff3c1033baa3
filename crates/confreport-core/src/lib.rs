pub mod docket;
pub mod error;
pub mod selector;
pub mod sort_key;
pub mod source;
pub mod term;

pub use docket::{CaseType, ConferencePayload, DocketRecord, Labeled, RecordFlags, StatusFlag, StatusFlags, Tag, TagSet};
pub use error::{DocketNumberError, SourceError};
pub use selector::{SelectOption, conference_options, select_highest_term, term_options};
pub use sort_key::DocketNumber;
pub use source::DocketSource;
pub use term::{ConferenceDate, Term, TermIndex};
