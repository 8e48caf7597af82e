//! Application layer - services that orchestrate domain operations.
//!
//! Services here apply business rules and coordinate between ports. They
//! know nothing about HTTP or storage engines.

pub mod project_service;

pub use project_service::{ProjectError, ProjectService};
