//! Deployment records returned by hosting providers.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DeploymentId, ProjectId, Timestamp};

/// Lifecycle state of a deployment as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentStatus {
    Pending,
    Live,
    Failed,
}

/// A single deployment of a project's content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: DeploymentId,
    pub project_id: ProjectId,
    /// Public URL once the host has assigned one.
    pub url: Option<String>,
    pub status: DeploymentStatus,
    pub created_at: Timestamp,
}

impl Deployment {
    /// A freshly requested deployment with no URL yet.
    pub fn pending(id: DeploymentId, project_id: ProjectId) -> Self {
        Self {
            id,
            project_id,
            url: None,
            status: DeploymentStatus::Pending,
            created_at: Timestamp::now(),
        }
    }

    /// Marks the deployment live at `url`.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self.status = DeploymentStatus::Live;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_deployment_has_no_url() {
        let deployment = Deployment::pending(DeploymentId::new(), ProjectId::new());
        assert_eq!(deployment.status, DeploymentStatus::Pending);
        assert!(deployment.url.is_none());
    }

    #[test]
    fn with_url_marks_live() {
        let deployment = Deployment::pending(DeploymentId::new(), ProjectId::new())
            .with_url("https://example.app");
        assert_eq!(deployment.status, DeploymentStatus::Live);
        assert_eq!(deployment.url.as_deref(), Some("https://example.app"));
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&DeploymentStatus::Live).unwrap();
        assert_eq!(json, "\"live\"");
    }
}
