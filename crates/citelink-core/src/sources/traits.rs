//! Common traits for metadata source plugins

use async_trait::async_trait;
use thiserror::Error;

use crate::http::HttpError;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("http error: {0}")]
    Http(HttpError),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("rate limited")]
    RateLimit,
    #[error("not found")]
    NotFound,
}

impl From<HttpError> for SourceError {
    fn from(e: HttpError) -> Self {
        match e {
            HttpError::RateLimited => SourceError::RateLimit,
            other => SourceError::Http(other),
        }
    }
}

/// Title lookup by normalized DOI.
///
/// Single attempt per call; the engine issues at most one call per unique
/// DOI per pass and never retries.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch_title(&self, doi: &str) -> Result<String, SourceError>;
}
