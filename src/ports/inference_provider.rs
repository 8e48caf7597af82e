//! Inference Provider Port - Interface for generative-inference backends.
//!
//! This port abstracts the two inference capabilities the service needs,
//! turning a description into a schema and turning text into a vector,
//! so that handlers never depend on a specific backend (Ollama, a hosted
//! API, or a stub in tests).
//!
//! # Design
//!
//! - Non-streaming, single round trip per call
//! - No retries: failures surface to the caller immediately
//! - Every call takes the caller's [`CallContext`] and must stop when it fires
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct FixedProvider;
//!
//! #[async_trait]
//! impl InferenceProvider for FixedProvider {
//!     async fn generate_schema(&self, _ctx: &CallContext, _d: &str) -> Result<String, InferenceError> {
//!         Ok("{}".to_string())
//!     }
//!     // ... other methods
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::CallContext;

/// Port for generative-inference interactions.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Generate a structured schema from a natural-language description.
    ///
    /// The returned text is whatever the backend produced. It is not parsed
    /// or validated here.
    async fn generate_schema(
        &self,
        ctx: &CallContext,
        description: &str,
    ) -> Result<String, InferenceError>;

    /// Embed text into a vector whose length the backend decides.
    async fn embed(&self, ctx: &CallContext, text: &str) -> Result<Vec<f32>, InferenceError>;

    /// Get provider information (name, model).
    fn provider_info(&self) -> ProviderInfo;
}

/// Provider information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g., "ollama").
    pub name: String,
    /// Model identifier (e.g., "llama3").
    pub model: String,
}

impl ProviderInfo {
    /// Creates new provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Inference provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InferenceError {
    /// The endpoint answered with a non-success status.
    #[error("inference endpoint returned status {status}")]
    Upstream {
        /// HTTP status code from the endpoint.
        status: u16,
    },

    /// The caller's cancellation signal or deadline fired first.
    #[error("inference call canceled")]
    Canceled,

    /// The HTTP client's own timeout elapsed.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl InferenceError {
    /// Creates an upstream status error.
    pub fn upstream(status: u16) -> Self {
        Self::Upstream { status }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// True for errors caused by the caller's deadline rather than the backend.
    pub fn is_cancellation(&self) -> bool {
        matches!(self, InferenceError::Canceled | InferenceError::Timeout { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inference_provider_is_object_safe() {
        fn _accepts_dyn(_provider: &dyn InferenceProvider) {}
    }

    #[test]
    fn upstream_error_carries_status() {
        let err = InferenceError::upstream(500);
        assert_eq!(err, InferenceError::Upstream { status: 500 });
        assert_eq!(err.to_string(), "inference endpoint returned status 500");
    }

    #[test]
    fn cancellation_classification() {
        assert!(InferenceError::Canceled.is_cancellation());
        assert!(InferenceError::Timeout { timeout_secs: 5 }.is_cancellation());
        assert!(!InferenceError::upstream(503).is_cancellation());
        assert!(!InferenceError::network("refused").is_cancellation());
    }

    #[test]
    fn provider_info_new_works() {
        let info = ProviderInfo::new("ollama", "llama3");
        assert_eq!(info.name, "ollama");
        assert_eq!(info.model, "llama3");
    }
}
