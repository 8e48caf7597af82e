//! HTTP adapter for project endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CreateProjectRequest, ProjectResponse, RenameProjectRequest};
pub use routes::project_router;
