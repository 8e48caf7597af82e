//! Request and response bodies for inference endpoints.

use serde::{Deserialize, Serialize};

/// Body for `POST /api/ai/schema`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateSchemaRequest {
    pub description: String,
}

/// Reply for `POST /api/ai/schema`. The schema is passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerateSchemaResponse {
    pub schema: String,
}

/// Body for `POST /api/ai/embeddings`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmbedRequest {
    pub text: String,
}

/// Reply for `POST /api/ai/embeddings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbedResponse {
    pub embedding: Vec<f32>,
}
