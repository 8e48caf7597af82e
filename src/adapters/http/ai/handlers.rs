//! HTTP handlers for inference endpoints.
//!
//! Bodies are decoded from raw bytes so that nothing reaches the provider
//! unless it decoded cleanly.

use axum::{body::Bytes, extract::State, Json};

use super::dto::{EmbedRequest, EmbedResponse, GenerateSchemaRequest, GenerateSchemaResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::decode_json;
use crate::adapters::http::state::AppState;

/// POST /api/ai/schema - Turn a description into a schema
pub async fn generate_schema(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateSchemaResponse>, ApiError> {
    let request: GenerateSchemaRequest = decode_json(&body)?;

    let ctx = state.call_context();
    let provider = state.inference.provider_info();
    tracing::info!(
        provider = %provider.name,
        model = %provider.model,
        description_len = request.description.len(),
        "generating schema"
    );

    let schema = state
        .inference
        .generate_schema(&ctx, &request.description)
        .await?;

    Ok(Json(GenerateSchemaResponse { schema }))
}

/// POST /api/ai/embeddings - Embed text into a vector
pub async fn embed(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<EmbedResponse>, ApiError> {
    let request: EmbedRequest = decode_json(&body)?;

    let ctx = state.call_context();
    let embedding = state.inference.embed(&ctx, &request.text).await?;

    tracing::debug!(dimensions = embedding.len(), "embedding produced");
    Ok(Json(EmbedResponse { embedding }))
}
