//! TextGenerator trait definition

use async_trait::async_trait;

use super::RemoteError;
use crate::domain::Category;

/// Stateless remote text generator - each call is independent
///
/// Implementations own their retry policy; a returned error is terminal for
/// the call.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for a prompt, retrying transient failures
    async fn request_remote(&self, prompt: &str, category: Category) -> Result<String, RemoteError>;
}
