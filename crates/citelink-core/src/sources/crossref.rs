//! Crossref source plugin for DOI metadata
//!
//! API docs: https://api.crossref.org/swagger-ui/index.html
//! Single-work lookup: GET /works/{doi}, JSON body with `status` and
//! `message.title` as an ordered list of title strings.

use async_trait::async_trait;
use serde::Deserialize;

use super::traits::{MetadataSource, SourceError};
use crate::http::{HttpClient, HttpError};

#[derive(Debug, Deserialize)]
struct CrossrefResponse {
    status: String,
    message: CrossrefWork,
}

#[derive(Debug, Deserialize)]
struct CrossrefWork {
    title: Option<Vec<String>>,
}

pub struct CrossrefSource {
    client: HttpClient,
    base_url: String,
}

impl CrossrefSource {
    pub fn new() -> Self {
        Self {
            client: HttpClient::new("citelink/0.1 (https://github.com/citelink/citelink)"),
            base_url: "https://api.crossref.org/works".to_string(),
        }
    }

    /// Parse a single-work response, yielding the primary title.
    pub fn parse_title_response(json: &str) -> Result<String, SourceError> {
        let response: CrossrefResponse = serde_json::from_str(json)
            .map_err(|e| SourceError::Parse(format!("invalid Crossref JSON: {}", e)))?;

        if response.status != "ok" {
            return Err(SourceError::Parse(format!(
                "unexpected status: {}",
                response.status
            )));
        }

        response
            .message
            .title
            .and_then(|titles| titles.into_iter().next())
            .filter(|title| !title.is_empty())
            .ok_or(SourceError::NotFound)
    }
}

impl Default for CrossrefSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetadataSource for CrossrefSource {
    async fn fetch_title(&self, doi: &str) -> Result<String, SourceError> {
        let url = format!("{}/{}", self.base_url, doi);
        let response = self.client.get(&url).await?;

        if response.status == 404 {
            return Err(SourceError::NotFound);
        }
        if !response.is_success() {
            return Err(SourceError::Http(HttpError::RequestFailed {
                message: format!("status {}", response.status),
            }));
        }

        Self::parse_title_response(&response.body)
    }
}
