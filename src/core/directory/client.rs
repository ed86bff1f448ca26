use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use super::models::EmployeeRecord;
use crate::config::DirectoryConfig;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Directory service returned HTTP {0}")]
    Status(u16),

    #[error("Malformed directory response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type DirectoryResult<T> = std::result::Result<T, DirectoryError>;

/// Envelope returned by the randomuser.me API. `info` and friends are ignored.
///
/// Entries are decoded one by one so a malformed record cannot sink the rest.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    results: Vec<serde_json::Value>,
}

/// Anything that can produce the session's employee records.
#[async_trait]
pub trait EmployeeSource: Send + Sync {
    async fn fetch_employees(&self) -> DirectoryResult<Vec<EmployeeRecord>>;
}

/// HTTP client for the randomuser.me generator.
pub struct RandomUserClient {
    client: Client,
    endpoint: String,
    results: usize,
    nationality: String,
}

impl RandomUserClient {
    pub fn new(endpoint: impl Into<String>, results: usize, nationality: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            results,
            nationality: nationality.into(),
        }
    }

    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::new(&config.endpoint, config.results, &config.nationality)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn query(&self) -> [(&'static str, String); 2] {
        [
            ("results", self.results.to_string()),
            ("nat", self.nationality.clone()),
        ]
    }
}

#[async_trait]
impl EmployeeSource for RandomUserClient {
    async fn fetch_employees(&self) -> DirectoryResult<Vec<EmployeeRecord>> {
        info!(
            endpoint = %self.endpoint,
            results = self.results,
            nat = %self.nationality,
            "Fetching employee directory"
        );

        let response = self
            .client
            .get(&self.endpoint)
            .query(&self.query())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let payload: ApiResponse = serde_json::from_str(&body)?;
        let records: Vec<EmployeeRecord> = payload
            .results
            .into_iter()
            .map(EmployeeRecord::from_json)
            .collect();
        debug!(count = records.len(), "Directory payload decoded");
        Ok(records)
    }
}
