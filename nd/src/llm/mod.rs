//! Remote generation client for NeuroDesk
//!
//! Builds the prompt payload, calls the generation backend under a bounded
//! retry policy, and extracts the generated text.

use std::sync::Arc;

use tracing::debug;

pub mod client;
mod error;
mod gemini;
pub mod prompt;
pub mod retry;
mod types;

pub use client::TextGenerator;
pub use error::RemoteError;
pub use gemini::GeminiClient;
pub use prompt::{Intent, detect_intent};
pub use retry::{RetryPolicy, RetryState, Sleeper, TokioSleeper};
pub use types::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};

use crate::config::LlmConfig;

/// Create the remote client from config
///
/// Fails only on misconfiguration (missing key, bad URL); call at startup.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn TextGenerator>, RemoteError> {
    debug!(model = %config.model, "create_client: called");
    Ok(Arc::new(GeminiClient::from_config(config)?))
}
