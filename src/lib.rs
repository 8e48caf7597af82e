//! SchemaForge - project management and schema generation backend
//!
//! Users own projects and turn natural-language descriptions into schemas
//! through a pluggable inference provider. The crate follows a hexagonal
//! layout: `domain` and `application` hold the rules, `ports` define the
//! capability contracts and `adapters` plug in Ollama, storage and HTTP.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
