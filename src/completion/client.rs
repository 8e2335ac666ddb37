//! Completion service client
//!
//! The pipeline's calling contract is synchronous, so the HTTP client is
//! blocking with an explicit timeout - the invocation either returns a
//! response, fails, or times out; nothing is retried.

use super::{CompletionRequest, CompletionResponse};
use crate::{Error, Result};
use reqwest::blocking::Client as HttpClient;
use std::time::Duration;

/// Default completion endpoint base
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Seam between the pipeline and the completion service.
///
/// Tests inject fixed-response implementations; production uses
/// [`OpenAiClient`].
pub trait CompletionClient: Send + Sync {
    /// Send one request and return the raw response, or fail. No retries.
    fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse>;
}

/// Blocking HTTP client for an OpenAI-compatible completions endpoint.
pub struct OpenAiClient {
    base_url: String,
    api_key: String,
    http: HttpClient,
}

impl OpenAiClient {
    /// Create a client against the default endpoint.
    ///
    /// Fails at construction when the credential is empty - the completion
    /// path must not start a run it cannot finish.
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL, timeout)
    }

    /// Create a client against a custom endpoint (tests, proxies).
    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingCredential);
        }

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Completion(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            http,
        })
    }
}

impl CompletionClient for OpenAiClient {
    fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse> {
        let url = format!("{}/completions", self.base_url);
        tracing::debug!("Sending completion request to {}", url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .map_err(|e| Error::Completion(format!("Failed to reach completion service: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(Error::Completion(format!(
                "Completion service returned {}: {}",
                status, body
            )));
        }

        response
            .json::<CompletionResponse>()
            .map_err(|e| Error::Completion(format!("Failed to parse completion response: {}", e)))
    }
}
