//! Process wiring: tracing, adapters and the router, built from [`AppConfig`].
//!
//! Kept in the library so integration tests assemble the same graph the
//! binary serves.

use std::sync::Arc;

use axum::Router;
use tracing_subscriber::EnvFilter;

use crate::adapters::ai::{MockInferenceProvider, OllamaConfig, OllamaProvider};
use crate::adapters::http::{app_router, AppState};
use crate::adapters::memory::InMemoryProjectRepository;
use crate::application::ProjectService;
use crate::config::{AiConfig, AiProvider, AppConfig, ServerConfig};
use crate::ports::{InferenceError, InferenceProvider};

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over `server.log_level`. Production logs are JSON.
/// Calling this twice is harmless; the second call is ignored.
pub fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if server.is_production() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Builds the inference provider selected by `ai.provider`.
pub fn build_inference(ai: &AiConfig) -> Result<Arc<dyn InferenceProvider>, InferenceError> {
    match ai.provider {
        AiProvider::Ollama => {
            let config =
                OllamaConfig::new(&ai.endpoint, &ai.default_model).with_timeout(ai.timeout());
            tracing::info!(endpoint = %config.endpoint, model = %config.model, "using ollama provider");
            Ok(Arc::new(OllamaProvider::new(config)?))
        }
        AiProvider::Mock => {
            tracing::warn!("using mock inference provider");
            Ok(Arc::new(MockInferenceProvider::new()))
        }
    }
}

/// Wires repository, service and provider into the application router.
pub fn build_app(config: &AppConfig) -> Result<Router, InferenceError> {
    let repository = Arc::new(InMemoryProjectRepository::new());
    let projects = ProjectService::new(repository);
    let inference = build_inference(&config.ai)?;

    let state = AppState::new(projects, inference, config.server.write_timeout());
    Ok(app_router(state, &config.server))
}
