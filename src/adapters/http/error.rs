//! HTTP error mapping.
//!
//! Every failure a handler can hit funnels into [`ApiError`], which owns the
//! status-code table. Response bodies are always [`ErrorResponse`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::application::ProjectError;
use crate::ports::InferenceError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new("FORBIDDEN", message)
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        Self::new("NOT_FOUND", format!("{} not found: {}", resource, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }
}

/// API error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body or path could not be decoded.
    #[error("{0}")]
    BadRequest(String),

    /// No usable owner identity on the request.
    #[error("owner identity is required")]
    Unauthorized,

    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Project(err) => match err {
                ProjectError::Validation(_) => StatusCode::BAD_REQUEST,
                ProjectError::Unauthorized(_) => StatusCode::FORBIDDEN,
                ProjectError::NotFound(_) => StatusCode::NOT_FOUND,
                ProjectError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Inference(err) if err.is_cancellation() => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Inference(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorResponse {
        match self {
            ApiError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
            ApiError::Unauthorized => ErrorResponse::unauthorized(self.to_string()),
            ApiError::Project(err) => match err {
                ProjectError::Validation(e) => ErrorResponse::new("VALIDATION_FAILED", e.to_string()),
                ProjectError::Unauthorized(_) => {
                    ErrorResponse::forbidden("Not authorized to access this project")
                }
                ProjectError::NotFound(id) => ErrorResponse::not_found("Project", &id.to_string()),
                // Storage details stay in the logs.
                ProjectError::Persistence(_) => ErrorResponse::internal("Internal server error"),
            },
            ApiError::Inference(err) if err.is_cancellation() => {
                ErrorResponse::new("TIMEOUT", err.to_string())
            }
            ApiError::Inference(err @ InferenceError::Upstream { .. }) => {
                ErrorResponse::new("UPSTREAM_ERROR", err.to_string())
            }
            ApiError::Inference(err) => ErrorResponse::new("INFERENCE_FAILED", err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self, "request rejected");
        }
        (status, Json(self.body())).into_response()
    }
}
