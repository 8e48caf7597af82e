//! Project repository port.
//!
//! Defines the contract for persisting and retrieving Project aggregates.
//! Implementations own storage and locking; access rules live in the
//! application layer, never here.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, OwnerId, ProjectId};
use crate::domain::project::Project;

/// Repository port for Project aggregate persistence.
///
/// Each call is expected to be atomic with respect to the single project it
/// touches. Concurrent calls for the same ID must not corrupt state.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Persist a new project.
    ///
    /// # Errors
    ///
    /// - `Conflict` if a project with the same ID already exists
    /// - `DatabaseError` on persistence failure
    async fn create(&self, project: &Project) -> Result<(), DomainError>;

    /// Find a project by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError>;

    /// All projects owned by `owner_id`, oldest first.
    async fn list_by_owner(&self, owner_id: &OwnerId) -> Result<Vec<Project>, DomainError>;

    /// Replace a stored project.
    ///
    /// # Errors
    ///
    /// - `ProjectNotFound` if it doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn update(&self, project: &Project) -> Result<(), DomainError>;
}
