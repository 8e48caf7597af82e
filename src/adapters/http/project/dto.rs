//! Request and response bodies for project endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::OwnedResource;
use crate::domain::project::Project;

/// Body for `POST /api/projects`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProjectRequest {
    pub name: String,
}

/// Body for `PATCH /api/projects/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct RenameProjectRequest {
    pub name: String,
}

/// A project as returned to its owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectResponse {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id().to_string(),
            name: project.name().to_string(),
            owner_id: project.owner_id().to_string(),
            created_at: project.created_at().to_rfc3339(),
            updated_at: project.updated_at().to_rfc3339(),
        }
    }
}
