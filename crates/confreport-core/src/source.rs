//! Where the report's JSON documents come from.

use async_trait::async_trait;

use crate::docket::ConferencePayload;
use crate::error::SourceError;
use crate::term::TermIndex;

/// Relative path of the term index.
pub const TERM_INDEX_PATH: &str = "data/confdates.json";

/// Relative path of one conference's docket list.
pub fn conference_path(key: &str) -> String {
    format!("data/conf/{key}.json")
}

/// Relative path of a case's question-presented document.
pub fn qp_path(term: i32, case_number: &str) -> String {
    format!("data/qps/{term}/{case_number}.json")
}

/// Relative path of a case's detail document.
pub fn case_path(term: i32, case_number: &str) -> String {
    format!("data/cases/{term}/{case_number}.json")
}

/// A provider of the report's JSON documents.
///
/// Every call fetches afresh; implementations must not cache.
#[async_trait]
pub trait DocketSource: Send + Sync {
    /// Fetch and parse `confdates.json`.
    async fn term_index(&self) -> Result<TermIndex, SourceError>;

    /// Fetch and parse `conf/<key>.json` for a `YYYYMMDD` key.
    async fn conference(&self, key: &str) -> Result<ConferencePayload, SourceError>;
}

#[async_trait]
impl<S: DocketSource + ?Sized> DocketSource for std::sync::Arc<S> {
    async fn term_index(&self) -> Result<TermIndex, SourceError> {
        (**self).term_index().await
    }

    async fn conference(&self, key: &str) -> Result<ConferencePayload, SourceError> {
        (**self).conference(key).await
    }
}
