//! Mock inference provider for testing.
//!
//! Returns canned answers, records how often it was called and can be told
//! to fail or stall. Stalled calls still honor the caller's `CallContext`.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::ports::{CallContext, InferenceError, InferenceProvider, ProviderInfo};

/// Configurable stand-in for a real inference backend.
#[derive(Debug, Clone)]
pub struct MockInferenceProvider {
    schema: String,
    embedding: Vec<f32>,
    error: Option<InferenceError>,
    delay: Option<Duration>,
    calls: Arc<AtomicUsize>,
    last_input: Arc<Mutex<Option<String>>>,
}

impl MockInferenceProvider {
    /// A provider that answers `{}` and `[0.0, 0.0, 0.0]`.
    pub fn new() -> Self {
        Self {
            schema: "{}".to_string(),
            embedding: vec![0.0; 3],
            error: None,
            delay: None,
            calls: Arc::new(AtomicUsize::new(0)),
            last_input: Arc::new(Mutex::new(None)),
        }
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = embedding;
        self
    }

    /// Every call fails with `error`.
    pub fn failing_with(mut self, error: InferenceError) -> Self {
        self.error = Some(error);
        self
    }

    /// Every call waits `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of calls received so far, across all clones.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Description or text passed on the most recent call.
    pub fn last_input(&self) -> Option<String> {
        self.last_input.lock().ok().and_then(|guard| guard.clone())
    }

    async fn respond<T>(&self, ctx: &CallContext, input: &str, ok: T) -> Result<T, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_input.lock() {
            *guard = Some(input.to_string());
        }

        let answer = async {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            match &self.error {
                Some(err) => Err(err.clone()),
                None => Ok(ok),
            }
        };

        ctx.race(answer).await.unwrap_or(Err(InferenceError::Canceled))
    }
}

impl Default for MockInferenceProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InferenceProvider for MockInferenceProvider {
    async fn generate_schema(
        &self,
        ctx: &CallContext,
        description: &str,
    ) -> Result<String, InferenceError> {
        self.respond(ctx, description, self.schema.clone()).await
    }

    async fn embed(&self, ctx: &CallContext, text: &str) -> Result<Vec<f32>, InferenceError> {
        self.respond(ctx, text, self.embedding.clone()).await
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-model")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_configured_schema_and_counts_calls() {
        let provider = MockInferenceProvider::new().with_schema(r#"{"type":"object"}"#);
        let clone = provider.clone();

        let schema = clone
            .generate_schema(&CallContext::new(), "a user")
            .await
            .unwrap();

        assert_eq!(schema, r#"{"type":"object"}"#);
        assert_eq!(provider.call_count(), 1);
        assert_eq!(provider.last_input().as_deref(), Some("a user"));
    }

    #[tokio::test]
    async fn failing_provider_returns_error() {
        let provider = MockInferenceProvider::new().failing_with(InferenceError::upstream(503));

        let err = provider.embed(&CallContext::new(), "x").await.unwrap_err();

        assert_eq!(err, InferenceError::upstream(503));
    }

    #[tokio::test]
    async fn delayed_provider_honors_deadline() {
        let provider = MockInferenceProvider::new().with_delay(Duration::from_secs(5));
        let ctx = CallContext::with_timeout(Duration::from_millis(20));

        let err = provider.generate_schema(&ctx, "x").await.unwrap_err();

        assert_eq!(err, InferenceError::Canceled);
    }
}
