use thiserror::Error;

/// A docket string that does not follow the `YEAR-SEQ` convention.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocketNumberError {
    #[error("docket number is empty")]
    Empty,

    #[error("docket number {0:?} has no '-' separator")]
    MissingSeparator(String),

    #[error("docket number {0:?} has a non-numeric year")]
    BadYear(String),

    #[error("docket number {0:?} has a non-numeric sequence")]
    BadSequence(String),

    #[error("docket number {0:?} has a sequence wider than five digits")]
    SequenceOverflow(String),
}

/// Failure to obtain one of the report's JSON documents.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("document not found: {0}")]
    NotFound(String),

    #[error("request for {resource} failed: {message}")]
    Fetch { resource: String, message: String },

    #[error("JSON parse error in {resource}: {source}")]
    Json {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
