//! HTTP adapter for inference endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{EmbedRequest, EmbedResponse, GenerateSchemaRequest, GenerateSchemaResponse};
pub use routes::ai_router;
