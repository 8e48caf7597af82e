//! Ollama Provider - Implementation of InferenceProvider for Ollama's HTTP API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = OllamaConfig::new("http://localhost:11434", "llama3")
//!     .with_timeout(Duration::from_secs(60));
//!
//! let provider = OllamaProvider::new(config)?;
//! ```
//!
//! # Wire format
//!
//! - `POST {endpoint}/api/generate` with `{"model", "prompt", "stream": false}`,
//!   answered by `{"response": "..."}`
//! - `POST {endpoint}/api/embeddings` with `{"model", "prompt"}`,
//!   answered by `{"embedding": [...]}`
//!
//! Each call is a single round trip. Nothing is retried or cached.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{CallContext, InferenceError, InferenceProvider, ProviderInfo};

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "llama3";

/// Configuration for the Ollama provider.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Base URL, without trailing slash.
    pub endpoint: String,
    /// Model name passed on every request.
    pub model: String,
    /// HTTP client timeout.
    pub timeout: Duration,
}

impl OllamaConfig {
    /// Creates a configuration. Empty values fall back to
    /// [`DEFAULT_ENDPOINT`] and [`DEFAULT_MODEL`].
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let endpoint = endpoint.trim().trim_end_matches('/');
        let model = model.into();
        let model = model.trim();

        Self {
            endpoint: if endpoint.is_empty() {
                DEFAULT_ENDPOINT.to_string()
            } else {
                endpoint.to_string()
            },
            model: if model.is_empty() {
                DEFAULT_MODEL.to_string()
            } else {
                model.to_string()
            },
            timeout: Duration::from_secs(120),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }
}

/// Ollama API provider implementation.
///
/// Holds one pooled `reqwest::Client`; clone the provider (or share it in an
/// `Arc`) rather than building a new one per request.
#[derive(Debug, Clone)]
pub struct OllamaProvider {
    config: OllamaConfig,
    client: Client,
}

impl OllamaProvider {
    /// Creates a provider with its own HTTP client.
    pub fn new(config: OllamaConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| InferenceError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(config, client))
    }

    /// Creates a provider that reuses an existing client.
    pub fn with_client(config: OllamaConfig, client: Client) -> Self {
        Self { config, client }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.endpoint)
    }

    fn embeddings_url(&self) -> String {
        format!("{}/api/embeddings", self.config.endpoint)
    }

    /// Wraps the description in the schema instruction.
    ///
    /// The description is inserted verbatim.
    fn schema_prompt(description: &str) -> String {
        format!(
            "Generate a JSON schema for the following description. \
             Return ONLY the JSON schema, no markdown or explanation.\n\n\
             Description: {}",
            description
        )
    }

    /// POSTs `body` to `url` and decodes the JSON reply, abandoning the call
    /// if `ctx` fires first.
    async fn post_json<B, R>(
        &self,
        ctx: &CallContext,
        url: String,
        body: &B,
    ) -> Result<R, InferenceError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        tracing::debug!(url = %url, model = %self.config.model, "calling inference endpoint");

        let round_trip = async {
            let response = self
                .client
                .post(&url)
                .json(body)
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;

            let status = response.status();
            if !status.is_success() {
                tracing::warn!(url = %url, status = status.as_u16(), "inference endpoint error");
                return Err(InferenceError::upstream(status.as_u16()));
            }

            response.json::<R>().await.map_err(|e| {
                if e.is_timeout() {
                    self.transport_error(e)
                } else {
                    InferenceError::parse(format!("Failed to parse response: {}", e))
                }
            })
        };

        match ctx.race(round_trip).await {
            Some(result) => result,
            None => {
                tracing::warn!(url = %url, "inference call canceled by caller");
                Err(InferenceError::Canceled)
            }
        }
    }

    fn transport_error(&self, e: reqwest::Error) -> InferenceError {
        if e.is_timeout() {
            InferenceError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            }
        } else if e.is_connect() {
            InferenceError::network(format!("Connection failed: {}", e))
        } else {
            InferenceError::network(e.to_string())
        }
    }
}

#[async_trait]
impl InferenceProvider for OllamaProvider {
    async fn generate_schema(
        &self,
        ctx: &CallContext,
        description: &str,
    ) -> Result<String, InferenceError> {
        let request = GenerateRequest {
            model: &self.config.model,
            prompt: Self::schema_prompt(description),
            stream: false,
        };

        let response: GenerateResponse = self.post_json(ctx, self.generate_url(), &request).await?;
        Ok(response.response)
    }

    async fn embed(&self, ctx: &CallContext, text: &str) -> Result<Vec<f32>, InferenceError> {
        let request = EmbeddingsRequest {
            model: &self.config.model,
            prompt: text,
        };

        let response: EmbeddingsResponse =
            self.post_json(ctx, self.embeddings_url(), &request).await?;
        Ok(response.embedding)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("ollama", &self.config.model)
    }
}

// ----- Ollama API Types -----

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

#[derive(Debug, Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct EmbeddingsResponse {
    embedding: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn provider_for(server: &MockServer) -> OllamaProvider {
        OllamaProvider::new(OllamaConfig::new(server.uri(), "llama3")).unwrap()
    }

    #[test]
    fn config_falls_back_to_defaults() {
        let config = OllamaConfig::new("", "");
        assert_eq!(config.endpoint, "http://localhost:11434");
        assert_eq!(config.model, "llama3");
    }

    #[test]
    fn config_strips_trailing_slash() {
        let config = OllamaConfig::new("http://gpu-box:11434/", "mistral");
        assert_eq!(config.endpoint, "http://gpu-box:11434");
        assert_eq!(config.model, "mistral");
    }

    #[test]
    fn schema_prompt_embeds_description_after_instruction() {
        let prompt = OllamaProvider::schema_prompt("a blog post");
        assert!(prompt.starts_with("Generate a JSON schema for the following description."));
        assert!(prompt.contains("Return ONLY the JSON schema"));
        assert!(prompt.ends_with("\n\nDescription: a blog post"));
    }

    #[test]
    fn provider_info_reports_model() {
        let provider = OllamaProvider::new(OllamaConfig::new("", "phi3")).unwrap();
        assert_eq!(provider.provider_info(), ProviderInfo::new("ollama", "phi3"));
    }

    #[tokio::test]
    async fn generate_schema_sends_non_streaming_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .and(body_json(json!({
                "model": "llama3",
                "prompt": OllamaProvider::schema_prompt("a user"),
                "stream": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "{}"})))
            .expect(1)
            .mount(&server)
            .await;

        let schema = provider_for(&server)
            .generate_schema(&CallContext::new(), "a user")
            .await
            .unwrap();

        assert_eq!(schema, "{}");
    }

    #[tokio::test]
    async fn generate_schema_returns_response_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"response": "X", "done": true, "model": "llama3"})),
            )
            .mount(&server)
            .await;

        let schema = provider_for(&server)
            .generate_schema(&CallContext::new(), "anything")
            .await
            .unwrap();

        assert_eq!(schema, "X");
    }

    #[tokio::test]
    async fn generate_schema_passes_malformed_schema_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"response": "```json\n{not json"})),
            )
            .mount(&server)
            .await;

        let schema = provider_for(&server)
            .generate_schema(&CallContext::new(), "anything")
            .await
            .unwrap();

        assert_eq!(schema, "```json\n{not json");
    }

    #[tokio::test]
    async fn generate_schema_surfaces_upstream_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let provider = provider_for(&server);
        for description in ["", "a user", "orders with line items"] {
            let err = provider
                .generate_schema(&CallContext::new(), description)
                .await
                .unwrap_err();
            assert_eq!(err, InferenceError::Upstream { status: 500 });
        }
    }

    #[tokio::test]
    async fn generate_schema_reports_unparseable_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .generate_schema(&CallContext::new(), "a user")
            .await
            .unwrap_err();

        assert!(matches!(err, InferenceError::Parse(_)));
    }

    #[tokio::test]
    async fn generate_schema_abandons_call_when_context_fires() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"response": "late"}))
                    .set_delay(Duration::from_secs(10)),
            )
            .mount(&server)
            .await;

        let ctx = CallContext::with_timeout(Duration::from_millis(50));
        let started = std::time::Instant::now();

        let err = provider_for(&server)
            .generate_schema(&ctx, "a user")
            .await
            .unwrap_err();

        assert_eq!(err, InferenceError::Canceled);
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn pre_cancelled_context_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"response": "x"})))
            .expect(0)
            .mount(&server)
            .await;

        let ctx = CallContext::new();
        ctx.cancel();

        let err = provider_for(&server)
            .generate_schema(&ctx, "a user")
            .await
            .unwrap_err();

        assert_eq!(err, InferenceError::Canceled);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_network_error() {
        let provider = OllamaProvider::new(OllamaConfig::new("http://127.0.0.1:1", "llama3"))
            .unwrap();

        let err = provider
            .generate_schema(&CallContext::new(), "a user")
            .await
            .unwrap_err();

        assert!(matches!(err, InferenceError::Network(_)));
    }

    #[tokio::test]
    async fn embed_sends_text_as_prompt_and_returns_vector() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/embeddings"))
            .and(body_json(json!({"model": "llama3", "prompt": "hello world"})))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"embedding": [0.5, -1.25, 3.0]})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let embedding = provider_for(&server)
            .embed(&CallContext::new(), "hello world")
            .await
            .unwrap();

        assert_eq!(embedding, vec![0.5, -1.25, 3.0]);
    }

    #[tokio::test]
    async fn embed_surfaces_upstream_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/embeddings"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = provider_for(&server)
            .embed(&CallContext::new(), "hello")
            .await
            .unwrap_err();

        assert_eq!(err, InferenceError::upstream(404));
    }
}
