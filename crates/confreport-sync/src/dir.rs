//! Source reading the report's JSON from a local copy of the site.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use confreport_core::source::{TERM_INDEX_PATH, conference_path};
use confreport_core::{ConferencePayload, DocketSource, SourceError, TermIndex};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::error::SyncError;

/// Reads `data/confdates.json` and `data/conf/*.json` under a site root.
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn read_json<T: DeserializeOwned>(&self, rel: &str) -> Result<T, SyncError> {
        let path = self.root.join(rel);
        debug!(path = %path.display(), "reading");
        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| SyncError::Io {
                path: path.display().to_string(),
                source,
            })?;
        serde_json::from_str(&raw).map_err(|source| SyncError::Json {
            resource: path.display().to_string(),
            source,
        })
    }
}

#[async_trait]
impl DocketSource for DirSource {
    async fn term_index(&self) -> Result<TermIndex, SourceError> {
        let index: TermIndex = self.read_json(TERM_INDEX_PATH).await?;
        info!(terms = index.terms.len(), root = %self.root.display(), "loaded term index");
        Ok(index)
    }

    async fn conference(&self, key: &str) -> Result<ConferencePayload, SourceError> {
        let payload: ConferencePayload = self.read_json(&conference_path(key)).await?;
        info!(conference = key, dockets = payload.dockets.len(), "loaded conference");
        Ok(payload)
    }
}
