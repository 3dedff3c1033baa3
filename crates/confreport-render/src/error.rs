use confreport_core::SourceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("term index lists no terms")]
    NoTerms,

    #[error("term {0} is not in the term index")]
    UnknownTerm(i32),

    #[error("{0:?} is not a YYYYMMDD conference key")]
    BadConferenceKey(String),
}
