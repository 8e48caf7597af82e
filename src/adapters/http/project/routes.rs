//! Route configuration for project endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{create_project, get_project, list_projects, rename_project};
use crate::adapters::http::state::AppState;

/// Creates the project router.
///
/// Routes:
/// - `POST /api/projects` - Create a project for the caller
/// - `GET /api/projects` - List the caller's projects
/// - `GET /api/projects/:id` - Fetch a project the caller owns
/// - `PATCH /api/projects/:id` - Rename a project the caller owns
pub fn project_router() -> Router<AppState> {
    Router::new()
        .route("/api/projects", get(list_projects).post(create_project))
        .route("/api/projects/:id", get(get_project).patch(rename_project))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockInferenceProvider;
    use crate::adapters::http::error::ErrorResponse;
    use crate::adapters::http::project::ProjectResponse;
    use crate::adapters::http::test_support::{request, send, state_with};
    use axum::http::StatusCode;

    fn app() -> Router {
        project_router().with_state(state_with(MockInferenceProvider::new()))
    }

    async fn create(app: &Router, owner: &str, name: &str) -> ProjectResponse {
        let (status, body) = send(
            app.clone(),
            request("POST", "/api/projects", Some(owner), &format!(r#"{{"name":"{}"}}"#, name)),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn create_returns_201_with_caller_as_owner() {
        let app = app();

        let project = create(&app, "0xalice", "Shop").await;

        assert_eq!(project.name, "Shop");
        assert_eq!(project.owner_id, "0xalice");
        assert!(!project.id.is_empty());
    }

    #[tokio::test]
    async fn create_without_owner_header_is_401() {
        let (status, body) = send(app(), request("POST", "/api/projects", None, r#"{"name":"x"}"#)).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn create_with_empty_name_is_400() {
        let (status, body) =
            send(app(), request("POST", "/api/projects", Some("0xalice"), r#"{"name":""}"#)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.code, "VALIDATION_FAILED");
    }

    #[tokio::test]
    async fn create_with_malformed_body_is_400() {
        let (status, _) = send(app(), request("POST", "/api/projects", Some("0xalice"), "{")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn list_returns_only_callers_projects() {
        let app = app();
        create(&app, "0xalice", "First").await;
        create(&app, "0xbob", "Theirs").await;
        create(&app, "0xalice", "Second").await;

        let (status, body) = send(app, request("GET", "/api/projects", Some("0xalice"), "")).await;

        assert_eq!(status, StatusCode::OK);
        let listed: Vec<ProjectResponse> = serde_json::from_slice(&body).unwrap();
        let names: Vec<&str> = listed.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"First") && names.contains(&"Second"));
        assert!(listed.iter().all(|p| p.owner_id == "0xalice"));
    }

    #[tokio::test]
    async fn get_own_project_is_200() {
        let app = app();
        let created = create(&app, "0xalice", "Shop").await;

        let (status, body) = send(
            app,
            request("GET", &format!("/api/projects/{}", created.id), Some("0xalice"), ""),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let fetched: ProjectResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_foreign_project_is_403() {
        let app = app();
        let created = create(&app, "0xalice", "Shop").await;

        let (status, _) = send(
            app,
            request("GET", &format!("/api/projects/{}", created.id), Some("0xbob"), ""),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn get_missing_project_is_404() {
        let uri = format!("/api/projects/{}", crate::domain::foundation::ProjectId::new());

        let (status, _) = send(app(), request("GET", &uri, Some("0xalice"), "")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn get_with_malformed_id_is_400() {
        let (status, _) =
            send(app(), request("GET", "/api/projects/not-a-uuid", Some("0xalice"), "")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn rename_keeps_owner() {
        let app = app();
        let created = create(&app, "0xalice", "Shop").await;

        let (status, body) = send(
            app,
            request(
                "PATCH",
                &format!("/api/projects/{}", created.id),
                Some("0xalice"),
                r#"{"name":"Store"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let renamed: ProjectResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(renamed.id, created.id);
        assert_eq!(renamed.name, "Store");
        assert_eq!(renamed.owner_id, "0xalice");
        assert_eq!(renamed.created_at, created.created_at);
    }

    #[tokio::test]
    async fn rename_foreign_project_is_403() {
        let app = app();
        let created = create(&app, "0xalice", "Shop").await;

        let (status, _) = send(
            app,
            request(
                "PATCH",
                &format!("/api/projects/{}", created.id),
                Some("0xbob"),
                r#"{"name":"Mine now"}"#,
            ),
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn unsupported_method_is_405() {
        let (status, _) = send(app(), request("DELETE", "/api/projects", Some("0xalice"), "")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
