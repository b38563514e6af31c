//! Gemini generateContent client
//!
//! Implements the TextGenerator trait for the generateContent endpoint with
//! bounded exponential backoff on throttling and transport failures.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, info, warn};

use super::prompt::{self, Intent};
use super::retry::{RetryPolicy, Sleeper, TokioSleeper};
use super::types::{GenerateContentRequest, GenerateContentResponse};
use super::{RemoteError, TextGenerator};
use crate::config::LlmConfig;
use crate::domain::Category;

/// Header carrying the API key; keys never go in the URL
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Default per-attempt timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest error body kept in an Http error
const MAX_ERROR_BODY: usize = 512;

/// Gemini API client
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    policy: RetryPolicy,
    sleeper: Arc<dyn Sleeper>,
}

impl GeminiClient {
    /// Create a client with default timeout and retry policy
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, RemoteError> {
        Self::build(base_url.into(), model.into(), api_key.into(), DEFAULT_TIMEOUT, RetryPolicy::default())
    }

    /// Create a new client from configuration
    ///
    /// Reads the API key from the environment variable or file named in config.
    pub fn from_config(config: &LlmConfig) -> Result<Self, RemoteError> {
        debug!(model = %config.model, base_url = %config.base_url, "from_config: called");
        let api_key = config.get_api_key().map_err(|e| RemoteError::Config(e.to_string()))?;
        let policy = RetryPolicy::new(config.max_attempts, config.initial_backoff());
        Self::build(
            config.base_url.clone(),
            config.model.clone(),
            api_key,
            config.timeout(),
            policy,
        )
    }

    fn build(
        base_url: String,
        model: String,
        api_key: String,
        timeout: Duration,
        policy: RetryPolicy,
    ) -> Result<Self, RemoteError> {
        if api_key.trim().is_empty() {
            return Err(RemoteError::Config("API key is empty".to_string()));
        }
        if model.trim().is_empty() {
            return Err(RemoteError::Config("model is empty".to_string()));
        }
        Url::parse(&base_url).map_err(|e| RemoteError::Config(format!("invalid base URL '{}': {}", base_url, e)))?;

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            model,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            policy,
            sleeper: Arc::new(TokioSleeper),
        })
    }

    /// Replace the retry policy
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Replace the backoff sleeper
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub fn policy(&self) -> RetryPolicy {
        self.policy
    }

    /// Full generateContent URL for the configured model
    pub fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }

    /// Build the request body for a prompt
    fn build_request_body(&self, prompt: &str, category: Category) -> (Intent, GenerateContentRequest) {
        let (intent, text) = prompt::compose(prompt, category);
        (intent, GenerateContentRequest::user_text(text))
    }

    /// One HTTP round trip, classified into success or a RemoteError
    async fn attempt(&self, url: &str, body: &GenerateContentRequest) -> Result<String, RemoteError> {
        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            debug!("attempt: rate limited (429)");
            return Err(RemoteError::RateLimited {
                status: status.as_u16(),
            });
        }

        if !status.is_success() {
            let mut message = response.text().await.unwrap_or_default();
            if message.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY).rev().find(|i| message.is_char_boundary(*i)).unwrap_or(0);
                message.truncate(cut);
            }
            debug!(status = status.as_u16(), "attempt: API error");
            return Err(RemoteError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = response.bytes().await?;
        let envelope: GenerateContentResponse =
            serde_json::from_slice(&bytes).map_err(|e| RemoteError::MalformedResponse(e.to_string()))?;

        envelope
            .first_text()
            .ok_or_else(|| RemoteError::MalformedResponse("no candidate text in response".to_string()))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn request_remote(&self, prompt: &str, category: Category) -> Result<String, RemoteError> {
        debug!(model = %self.model, %category, prompt_len = prompt.len(), "request_remote: called");
        let url = self.endpoint();
        let (intent, body) = self.build_request_body(prompt, category);

        let mut state = self.policy.start();
        loop {
            let attempt = state.begin_attempt();
            let err = match self.attempt(&url, &body).await {
                Ok(text) => {
                    info!(attempt, ?intent, len = text.len(), "request_remote: success");
                    return Ok(text);
                }
                Err(e) => e,
            };

            if !err.is_retryable() {
                warn!(attempt, kind = err.kind(), error = %err, "request_remote: terminal error");
                return Err(err);
            }

            match state.next_delay() {
                Some(delay) => {
                    warn!(
                        attempt,
                        max_attempts = state.max_attempts(),
                        backoff_ms = delay.as_millis() as u64,
                        kind = err.kind(),
                        "request_remote: retrying after transient error"
                    );
                    self.sleeper.sleep(delay).await;
                }
                None => {
                    warn!(attempt, kind = err.kind(), "request_remote: retries exhausted");
                    return Err(RemoteError::RetriesExhausted {
                        attempts: attempt,
                        last: Box::new(err),
                    });
                }
            }
        }
    }
}
