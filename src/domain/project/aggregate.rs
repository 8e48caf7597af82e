//! Project aggregate entity.
//!
//! A project is a named container owned by exactly one identity.
//!
//! # Ownership
//!
//! The owner is fixed at construction. There is deliberately no mutator for
//! it, so no operation can transfer a project.

use crate::domain::foundation::{OwnedResource, OwnerId, ProjectId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

/// Project aggregate.
///
/// # Invariants
///
/// - `id` is unique and never changes
/// - `name` is non-empty and stored exactly as given
/// - `owner_id` never changes
/// - `updated_at` is never before `created_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier for this project.
    id: ProjectId,

    /// Display name.
    name: String,

    /// Identity that owns this project.
    owner_id: OwnerId,

    /// When the project was created.
    created_at: Timestamp,

    /// When the project was last updated.
    updated_at: Timestamp,
}

impl Project {
    /// Create a new project stamped with the current instant.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the name is empty
    pub fn new(id: ProjectId, name: &str, owner_id: OwnerId) -> Result<Self, ValidationError> {
        let name = Self::validate_name(name)?;

        let now = Timestamp::now();
        Ok(Self {
            id,
            name,
            owner_id,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstitute a project from persistence (no validation).
    pub fn reconstitute(
        id: ProjectId,
        name: String,
        owner_id: OwnerId,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            name,
            owner_id,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the project ID.
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns when the project was created.
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Returns when the project was last updated.
    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Rename the project and re-stamp `updated_at`.
    ///
    /// Returns the previous name.
    pub fn rename(&mut self, new_name: &str) -> Result<String, ValidationError> {
        let new_name = Self::validate_name(new_name)?;

        let old_name = std::mem::replace(&mut self.name, new_name);
        self.updated_at = Timestamp::now().max(self.created_at);
        Ok(old_name)
    }

    fn validate_name(name: &str) -> Result<String, ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(name.to_string())
    }
}

impl OwnedResource for Project {
    fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }
}
