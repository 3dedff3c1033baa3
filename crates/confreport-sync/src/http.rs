//! HTTP source reading the report's JSON from the published site.

use async_trait::async_trait;
use confreport_core::source::{TERM_INDEX_PATH, case_path, conference_path, qp_path};
use confreport_core::{ConferencePayload, DocketSource, SourceError, TermIndex};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::SyncError;

/// HTTP client for the site's `data/` tree.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Create a new source for the given site root.
    ///
    /// `base_url` should be like `https://example.org` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL of a document, with a `_=<millis>` cache-busting query
    /// when `bust` is set.
    fn url(&self, path: &str, bust: bool) -> String {
        let mut url = format!("{}/{}", self.base_url, path);
        if bust {
            url.push_str(&format!("?_={}", chrono::Utc::now().timestamp_millis()));
        }
        url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, bust: bool) -> Result<T, SyncError> {
        let url = self.url(path, bust);

        info!(url = %url, "fetching");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(SyncError::Server {
                url,
                status: status.as_u16(),
                body,
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|source| SyncError::Json {
            resource: url,
            source,
        })
    }

    /// Question-presented document of one case, as untyped JSON.
    pub async fn question_presented(
        &self,
        term: i32,
        case_number: &str,
    ) -> Result<serde_json::Value, SyncError> {
        self.get_json(&qp_path(term, case_number), false).await
    }

    /// Case detail document of one case, as untyped JSON.
    pub async fn case_data(
        &self,
        term: i32,
        case_number: &str,
    ) -> Result<serde_json::Value, SyncError> {
        self.get_json(&case_path(term, case_number), true).await
    }
}

#[async_trait]
impl DocketSource for HttpSource {
    async fn term_index(&self) -> Result<TermIndex, SourceError> {
        let index: TermIndex = self.get_json(TERM_INDEX_PATH, true).await?;
        info!(terms = index.terms.len(), "loaded term index");
        Ok(index)
    }

    async fn conference(&self, key: &str) -> Result<ConferencePayload, SourceError> {
        let payload: ConferencePayload = self.get_json(&conference_path(key), true).await?;
        info!(conference = key, dockets = payload.dockets.len(), "loaded conference");
        Ok(payload)
    }
}
