//! Inference adapters - implementations of the `InferenceProvider` port.
//!
//! - `OllamaProvider` - talks to an Ollama server over HTTP
//! - `MockInferenceProvider` - canned answers for tests

mod mock_provider;
mod ollama_provider;

pub use mock_provider::MockInferenceProvider;
pub use ollama_provider::{OllamaConfig, OllamaProvider, DEFAULT_ENDPOINT, DEFAULT_MODEL};
