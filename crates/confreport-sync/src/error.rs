use confreport_core::SourceError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[cfg(feature = "http")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status} for {url}: {body}")]
    Server {
        url: String,
        status: u16,
        body: String,
    },

    #[error("JSON parse error in {resource}: {source}")]
    Json {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<SyncError> for SourceError {
    fn from(err: SyncError) -> Self {
        match err {
            SyncError::Server { url, status: 404, .. } => SourceError::NotFound(url),
            SyncError::Server { url, status, body } => SourceError::Fetch {
                resource: url,
                message: format!("status {status}: {body}"),
            },
            SyncError::Json { resource, source } => SourceError::Json { resource, source },
            SyncError::Io { path, source } if source.kind() == std::io::ErrorKind::NotFound => {
                SourceError::NotFound(path)
            }
            SyncError::Io { source, .. } => SourceError::Io(source),
            #[cfg(feature = "http")]
            SyncError::Http(e) => SourceError::Fetch {
                resource: e
                    .url()
                    .map(|u| u.to_string())
                    .unwrap_or_else(|| "<unknown>".into()),
                message: e.to_string(),
            },
        }
    }
}
