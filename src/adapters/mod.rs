//! Adapters - Implementations of port interfaces.
//!
//! - `ai` - inference providers (Ollama over HTTP, mock)
//! - `memory` - in-memory repositories
//! - `http` - axum router exposing the service

pub mod ai;
pub mod http;
pub mod memory;
