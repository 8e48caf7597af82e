//! Hosting provider port for publishing project content.
//!
//! No adapter ships with this crate.

use async_trait::async_trait;

use super::CallContext;
use crate::domain::deployment::Deployment;
use crate::domain::foundation::{DeploymentId, ProjectId};

/// Publishes project content and reports on deployments.
#[async_trait]
pub trait HostingProvider: Send + Sync {
    /// Deploy `content` for a project.
    ///
    /// # Errors
    ///
    /// - `Rejected` if the host refuses the content
    /// - `Unavailable` on transient host failures
    /// - `Canceled` when the context fires mid-call
    async fn deploy(
        &self,
        ctx: &CallContext,
        project_id: &ProjectId,
        content: Vec<u8>,
    ) -> Result<Deployment, HostingError>;

    /// Look up a deployment by ID.
    async fn get_deployment(
        &self,
        ctx: &CallContext,
        deployment_id: &DeploymentId,
    ) -> Result<Deployment, HostingError>;
}

/// Hosting provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostingError {
    #[error("deployment not found: {0}")]
    NotFound(DeploymentId),

    #[error("deployment rejected: {0}")]
    Rejected(String),

    #[error("hosting provider unavailable: {0}")]
    Unavailable(String),

    #[error("hosting call canceled")]
    Canceled,
}
