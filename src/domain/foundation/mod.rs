//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types that form the
//! vocabulary of the project domain.

mod errors;
mod ids;
mod ownership;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DeploymentId, OwnerId, ProjectId};
pub use ownership::OwnedResource;
pub use timestamp::Timestamp;
