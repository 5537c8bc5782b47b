use crate::utils::{CsvTokenizerError, Result, TokenizationConfig};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for the remote batch-tokenization endpoint. One synchronous call
/// per batch, bounded by the configured timeout; no retries.
pub struct TokenClient {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct TokenizeRequest {
    data: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct TokenizeResponse {
    results: Vec<Vec<Option<String>>>,
}

impl TokenClient {
    pub fn new(config: &TokenizationConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            endpoint: config.endpoint.clone(),
        }
    }

    /// Exchanges `values` for tokens, one per input in input order. Each
    /// value travels in its own single-element group, matching the batch
    /// shape the remote service expects. An empty input returns an empty
    /// result with no network call.
    ///
    /// Any transport error, non-success status, undecodable body, or
    /// result-count mismatch is returned as an error; the caller decides
    /// the fallback policy.
    pub async fn tokenize(&self, values: &[String]) -> Result<Vec<Option<String>>> {
        if values.is_empty() {
            return Ok(Vec::new());
        }

        let request = TokenizeRequest {
            data: values.iter().map(|v| vec![v.clone()]).collect(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(CsvTokenizerError::ApiError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let body: TokenizeResponse = response.json().await?;

        if body.results.len() != values.len() {
            return Err(CsvTokenizerError::TokenCountMismatch {
                expected: values.len(),
                got: body.results.len(),
            });
        }

        Ok(body
            .results
            .into_iter()
            .map(|mut group| {
                if group.is_empty() {
                    None
                } else {
                    group.swap_remove(0)
                }
            })
            .collect())
    }
}
