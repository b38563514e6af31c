//! Remote generation error types

use thiserror::Error;

/// Errors that can occur while talking to the generation backend
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Rate limited (status {status})")]
    RateLimited { status: u16 },

    #[error("API error {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Retries exhausted after {attempts} attempts: {last}")]
    RetriesExhausted { attempts: u32, last: Box<RemoteError> },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl RemoteError {
    /// Check if this error is retryable
    ///
    /// Only throttling and transport failures are retried; every other
    /// outcome is terminal for the call.
    pub fn is_retryable(&self) -> bool {
        match self {
            RemoteError::Transport(_) => true,
            RemoteError::RateLimited { .. } => true,
            RemoteError::Http { .. } => false,
            RemoteError::MalformedResponse(_) => false,
            RemoteError::RetriesExhausted { .. } => false,
            RemoteError::Config(_) => false,
        }
    }

    /// Check if this is a rate limit error
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, RemoteError::RateLimited { .. })
    }

    /// Short stable label for logs and counters
    pub fn kind(&self) -> &'static str {
        match self {
            RemoteError::Transport(_) => "transport",
            RemoteError::RateLimited { .. } => "rate_limited",
            RemoteError::Http { .. } => "http",
            RemoteError::MalformedResponse(_) => "malformed_response",
            RemoteError::RetriesExhausted { .. } => "retries_exhausted",
            RemoteError::Config(_) => "config",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_retryable() {
        assert!(RemoteError::RateLimited { status: 429 }.is_retryable());

        // Server errors are terminal, not retried
        assert!(
            !RemoteError::Http {
                status: 503,
                message: "Unavailable".to_string()
            }
            .is_retryable()
        );
        assert!(
            !RemoteError::Http {
                status: 400,
                message: "Bad request".to_string()
            }
            .is_retryable()
        );

        assert!(!RemoteError::MalformedResponse("no candidates".to_string()).is_retryable());
        assert!(!RemoteError::Config("missing key".to_string()).is_retryable());
    }

    #[test]
    fn test_exhausted_wraps_last_error() {
        let err = RemoteError::RetriesExhausted {
            attempts: 5,
            last: Box::new(RemoteError::RateLimited { status: 429 }),
        };
        assert!(!err.is_retryable());
        assert_eq!(err.kind(), "retries_exhausted");
        assert_eq!(
            err.to_string(),
            "Retries exhausted after 5 attempts: Rate limited (status 429)"
        );
    }

    #[test]
    fn test_is_rate_limit() {
        assert!(RemoteError::RateLimited { status: 429 }.is_rate_limit());
        assert!(!RemoteError::MalformedResponse(String::new()).is_rate_limit());
    }
}
