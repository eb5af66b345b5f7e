//! Text Generator Port - Interface to the generative text engine.
//!
//! The engine is a black box: one prompt in, one text blob out. Failure is
//! always an explicit `GenerationError`; callers must never infer failure
//! from apology-like phrasing in a successful reply.

use async_trait::async_trait;
use thiserror::Error;

/// Port for one-shot text generation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a reply for the prompt.
    ///
    /// A successful result is guaranteed non-empty; engines that return
    /// empty output must map it to [`GenerationError::EmptyOutput`].
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Generation engine errors.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    /// Engine produced no content.
    #[error("engine returned empty output")]
    EmptyOutput,

    /// Rate limited or quota exhausted.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Engine is unavailable.
    #[error("engine unavailable: {message}")]
    Unavailable { message: String },

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse the engine response.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request was rejected as invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl GenerationError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if a retry might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GenerationError::RateLimited { .. }
                | GenerationError::Unavailable { .. }
                | GenerationError::Network(_)
                | GenerationError::Timeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retryable_classification() {
        assert!(GenerationError::rate_limited(30).is_retryable());
        assert!(GenerationError::unavailable("down").is_retryable());
        assert!(GenerationError::network("reset").is_retryable());
        assert!(GenerationError::Timeout { timeout_secs: 60 }.is_retryable());

        assert!(!GenerationError::EmptyOutput.is_retryable());
        assert!(!GenerationError::AuthenticationFailed.is_retryable());
        assert!(!GenerationError::parse("bad json").is_retryable());
        assert!(!GenerationError::InvalidRequest("nope".into()).is_retryable());
    }

    #[test]
    fn errors_display_correctly() {
        assert_eq!(
            GenerationError::rate_limited(30).to_string(),
            "rate limited: retry after 30s"
        );
        assert_eq!(
            GenerationError::EmptyOutput.to_string(),
            "engine returned empty output"
        );
    }
}
