//! HTTP handlers for project endpoints.
//!
//! Every handler requires the `X-User-Id` header and delegates all access
//! decisions to `ProjectService`.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::dto::{CreateProjectRequest, ProjectResponse, RenameProjectRequest};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{decode_json, RequireOwner};
use crate::adapters::http::state::AppState;
use crate::domain::foundation::ProjectId;

/// POST /api/projects - Create a project owned by the caller
pub async fn create_project(
    State(state): State<AppState>,
    RequireOwner(owner): RequireOwner,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request: CreateProjectRequest = decode_json(&body)?;

    let project = state.projects.create_project(&request.name, owner).await?;

    Ok((StatusCode::CREATED, Json(ProjectResponse::from(&project))))
}

/// GET /api/projects - List the caller's projects, oldest first
pub async fn list_projects(
    State(state): State<AppState>,
    RequireOwner(owner): RequireOwner,
) -> Result<Json<Vec<ProjectResponse>>, ApiError> {
    let projects = state.projects.list_projects(&owner).await?;
    Ok(Json(projects.iter().map(ProjectResponse::from).collect()))
}

/// GET /api/projects/:id - Fetch one of the caller's projects
pub async fn get_project(
    State(state): State<AppState>,
    RequireOwner(owner): RequireOwner,
    Path(id): Path<String>,
) -> Result<Json<ProjectResponse>, ApiError> {
    let id = parse_project_id(&id)?;
    let project = state.projects.get_project(id, &owner).await?;
    Ok(Json(ProjectResponse::from(&project)))
}

/// PATCH /api/projects/:id - Rename one of the caller's projects
pub async fn rename_project(
    State(state): State<AppState>,
    RequireOwner(owner): RequireOwner,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<ProjectResponse>, ApiError> {
    let id = parse_project_id(&id)?;
    let request: RenameProjectRequest = decode_json(&body)?;

    let project = state
        .projects
        .rename_project(id, &owner, &request.name)
        .await?;

    Ok(Json(ProjectResponse::from(&project)))
}

fn parse_project_id(raw: &str) -> Result<ProjectId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid project ID format"))
}
