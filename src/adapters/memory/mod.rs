//! In-memory persistence adapters.
//!
//! Used by the server binary until a durable store is wired in, and by tests.

mod in_memory_project_repository;

pub use in_memory_project_repository::InMemoryProjectRepository;
