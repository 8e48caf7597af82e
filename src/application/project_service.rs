//! ProjectService - lifecycle and ownership rules for projects.
//!
//! This is the only place that decides whether a requester may see or change
//! a project. The repository stores, the HTTP layer translates, and both stay
//! free of access rules.

use std::sync::Arc;

use crate::domain::foundation::{
    DomainError, OwnedResource, OwnerId, ProjectId, ValidationError,
};
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

/// Error type for project operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectError {
    /// Input failed validation (e.g., empty name).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No project with this ID exists.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// The project exists but belongs to someone else.
    #[error("not authorized to access project {0}")]
    Unauthorized(ProjectId),

    /// The repository failed.
    #[error("persistence failure: {0}")]
    Persistence(#[source] DomainError),
}

/// Application service for the Project aggregate.
#[derive(Clone)]
pub struct ProjectService {
    repository: Arc<dyn ProjectRepository>,
}

impl ProjectService {
    /// Creates a service over the given repository.
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }

    /// Create a project owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is empty
    /// - `Persistence` if the repository rejects the write
    pub async fn create_project(
        &self,
        name: &str,
        owner_id: OwnerId,
    ) -> Result<Project, ProjectError> {
        let project = Project::new(ProjectId::new(), name, owner_id)?;

        self.repository
            .create(&project)
            .await
            .map_err(ProjectError::Persistence)?;

        tracing::info!(
            project_id = %project.id(),
            owner_id = %project.owner_id(),
            "project created"
        );
        Ok(project)
    }

    /// Fetch a project on behalf of `requester`.
    ///
    /// Existence is checked first, so a foreign project reports
    /// `Unauthorized` and a missing one reports `NotFound`.
    pub async fn get_project(
        &self,
        id: ProjectId,
        requester: &OwnerId,
    ) -> Result<Project, ProjectError> {
        let project = self.load(id).await?;
        Self::authorize(&project, requester)?;
        Ok(project)
    }

    /// List projects owned by `owner_id`.
    pub async fn list_projects(&self, owner_id: &OwnerId) -> Result<Vec<Project>, ProjectError> {
        self.repository
            .list_by_owner(owner_id)
            .await
            .map_err(ProjectError::Persistence)
    }

    /// Rename a project on behalf of `requester`.
    ///
    /// The owner is carried over unchanged and `updated_at` is re-stamped.
    pub async fn rename_project(
        &self,
        id: ProjectId,
        requester: &OwnerId,
        new_name: &str,
    ) -> Result<Project, ProjectError> {
        let mut project = self.load(id).await?;
        Self::authorize(&project, requester)?;

        project.rename(new_name)?;

        self.repository
            .update(&project)
            .await
            .map_err(ProjectError::Persistence)?;

        tracing::info!(project_id = %id, "project renamed");
        Ok(project)
    }

    async fn load(&self, id: ProjectId) -> Result<Project, ProjectError> {
        self.repository
            .find_by_id(&id)
            .await
            .map_err(ProjectError::Persistence)?
            .ok_or(ProjectError::NotFound(id))
    }

    fn authorize(project: &Project, requester: &OwnerId) -> Result<(), ProjectError> {
        if project.is_owned_by(requester) {
            Ok(())
        } else {
            tracing::warn!(
                project_id = %project.id(),
                requester = %requester,
                "ownership check failed"
            );
            Err(ProjectError::Unauthorized(project.id()))
        }
    }
}
