//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors, ownership)
//! - `project` - Project aggregate and its invariants
//! - `deployment` - Deployment records exchanged with hosting providers

pub mod deployment;
pub mod foundation;
pub mod project;
