//! Ownership trait for owner-scoped resources.
//!
//! Every owned aggregate exposes its owner through `OwnedResource`, so the
//! rule "only the owner may access it" reads the same everywhere.
//!
//! # Example
//!
//! ```ignore
//! impl OwnedResource for Project {
//!     fn owner_id(&self) -> &OwnerId {
//!         &self.owner_id
//!     }
//! }
//!
//! if !project.is_owned_by(&requester) {
//!     return Err(ProjectError::unauthorized(project.id()));
//! }
//! ```

use super::OwnerId;

/// Trait for aggregates that have a single owner.
///
/// Single-owner only. Shared or group ownership would need a different
/// mechanism and is not modelled.
pub trait OwnedResource {
    /// Returns the identity that owns this resource.
    fn owner_id(&self) -> &OwnerId;

    /// Exact string comparison against the stored owner.
    fn is_owned_by(&self, requester: &OwnerId) -> bool {
        self.owner_id() == requester
    }
}
