//! Project module - user-owned projects and their lifecycle rules.

mod aggregate;

pub use aggregate::Project;
