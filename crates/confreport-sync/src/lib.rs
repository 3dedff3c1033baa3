//! Document sources: the published site over HTTP, or a local data directory.

mod dir;
mod error;

#[cfg(feature = "http")]
pub mod http;

pub use dir::DirSource;
pub use error::SyncError;

#[cfg(feature = "http")]
pub use http::HttpSource;
