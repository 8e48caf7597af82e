//! Route configuration for inference endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::{embed, generate_schema};
use crate::adapters::http::state::AppState;

/// Creates the inference router.
///
/// Routes:
/// - `POST /api/ai/schema` - Generate a schema from a description
/// - `POST /api/ai/embeddings` - Embed text
pub fn ai_router() -> Router<AppState> {
    Router::new()
        .route("/api/ai/schema", post(generate_schema))
        .route("/api/ai/embeddings", post(embed))
}
