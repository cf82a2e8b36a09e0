use anyhow::{Context, Result};
use reqwest::Client;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::data_models::{SearchRequest, SearchResponse};
use crate::error::SearchError;

/// What came back from the back-end, plus how long it took.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub response: SearchResponse,
    pub elapsed: Duration,
}

/// Client for the back-end `/search` endpoint. One attempt per query, no retries.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client for the search back-end")?;

        let endpoint = endpoint.into();
        log::info!("Search back-end endpoint: {} (timeout {:?})", endpoint, timeout);

        Ok(Self { http, endpoint })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.backend_search_url(), config.backend_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Forward the query as a form post and decode the JSON answer.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchOutcome, SearchError> {
        let started = Instant::now();

        let response = self
            .http
            .post(&self.endpoint)
            .form(request)
            .send()
            .await
            .map_err(SearchError::CollaboratorUnreachable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::CollaboratorStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(SearchError::CollaboratorUnreachable)?;
        let elapsed = started.elapsed();

        let response: SearchResponse = serde_json::from_slice(&body)
            .map_err(|e| SearchError::MalformedCollaboratorResponse(e.to_string()))?;

        log::debug!(
            "back-end returned {} of {} results in {:?}",
            response.results.len(),
            response.total,
            elapsed
        );

        Ok(SearchOutcome { response, elapsed })
    }
}
