//! In-Memory Project Repository
//!
//! Stores projects in a map behind an async `RwLock`. Each operation holds
//! the lock for its whole read-modify-write, so concurrent calls for the
//! same ID never interleave.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, OwnedResource, OwnerId, ProjectId};
use crate::domain::project::Project;
use crate::ports::ProjectRepository;

/// In-memory storage for projects
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<HashMap<ProjectId, Project>>>,
}

impl InMemoryProjectRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored projects
    pub async fn len(&self) -> usize {
        self.projects.read().await.len()
    }

    /// True when no project is stored
    pub async fn is_empty(&self) -> bool {
        self.projects.read().await.is_empty()
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn create(&self, project: &Project) -> Result<(), DomainError> {
        let mut projects = self.projects.write().await;
        if projects.contains_key(&project.id()) {
            return Err(DomainError::new(
                ErrorCode::Conflict,
                format!("Project {} already exists", project.id()),
            ));
        }
        projects.insert(project.id(), project.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &ProjectId) -> Result<Option<Project>, DomainError> {
        Ok(self.projects.read().await.get(id).cloned())
    }

    async fn list_by_owner(&self, owner_id: &OwnerId) -> Result<Vec<Project>, DomainError> {
        let projects = self.projects.read().await;
        let mut owned: Vec<Project> = projects
            .values()
            .filter(|p| p.is_owned_by(owner_id))
            .cloned()
            .collect();
        owned.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().as_uuid().cmp(b.id().as_uuid()))
        });
        Ok(owned)
    }

    async fn update(&self, project: &Project) -> Result<(), DomainError> {
        let mut projects = self.projects.write().await;
        match projects.get_mut(&project.id()) {
            Some(stored) => {
                *stored = project.clone();
                Ok(())
            }
            None => Err(DomainError::new(
                ErrorCode::ProjectNotFound,
                format!("Project {} not found", project.id()),
            )
            .with_detail("project_id", project.id().to_string())),
        }
    }
}
