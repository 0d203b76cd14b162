//! EBI Proteins API client for fetching annotation documents.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::document::ProteinDocument;
use crate::error::{AnnotationError, NotFoundReason, Result};

/// EBI Proteins API base URL; the accession is appended as a path segment.
pub const DEFAULT_ENDPOINT: &str = "https://www.ebi.ac.uk/proteins/api/proteins";

/// Seconds before a request is abandoned.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("proteinvista/", env!("CARGO_PKG_VERSION"));

/// Anything that can produce the annotation document for an accession.
pub trait AnnotationSource {
    /// Fetch the document, or [`AnnotationError::NotFound`] when none is available.
    fn fetch(&self, accession: &str) -> Result<ProteinDocument>;
}

/// Connection settings for [`EbiProteinsClient`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: USER_AGENT_VALUE.to_string(),
        }
    }
}

/// Blocking client for the EBI Proteins API.
#[derive(Debug, Clone)]
pub struct EbiProteinsClient {
    client: Client,
    endpoint: Url,
}

impl EbiProteinsClient {
    /// Creates a client with JSON accept headers and the configured timeout.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AnnotationError::Client(e.to_string()))?;

        Self::with_client(client, &config.endpoint)
    }

    /// Wraps an already configured HTTP client.
    pub fn with_client(client: Client, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| AnnotationError::Client(format!("invalid endpoint {endpoint}: {e}")))?;
        if endpoint.cannot_be_a_base() {
            return Err(AnnotationError::Client(format!(
                "endpoint {endpoint} cannot take a path"
            )));
        }
        Ok(Self { client, endpoint })
    }

    /// Endpoint with `accession` appended as one percent-encoded path segment.
    pub fn url_for(&self, accession: &str) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(accession);
        }
        url
    }
}

impl AnnotationSource for EbiProteinsClient {
    fn fetch(&self, accession: &str) -> Result<ProteinDocument> {
        let url = self.url_for(accession);
        debug!(%url, accession, "fetching annotation document");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| AnnotationError::not_found(accession, request_failure(&e)))?;
        check_status(accession, response.status())?;

        let value: Value = response.json().map_err(|e| {
            let reason = if e.is_timeout() {
                NotFoundReason::Timeout
            } else {
                NotFoundReason::InvalidBody(e.to_string())
            };
            AnnotationError::not_found(accession, reason)
        })?;

        Ok(ProteinDocument::new(value))
    }
}

/// Only `200 OK` carries a document; every other status is `NotFound`.
pub fn check_status(accession: &str, status: StatusCode) -> Result<()> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(AnnotationError::not_found(
            accession,
            NotFoundReason::Status(status.as_u16()),
        ))
    }
}

fn request_failure(err: &reqwest::Error) -> NotFoundReason {
    if err.is_timeout() {
        NotFoundReason::Timeout
    } else {
        NotFoundReason::Transport(err.to_string())
    }
}
