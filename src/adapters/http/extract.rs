//! Request extractors shared by the route groups.

use axum::{
    async_trait,
    body::Bytes,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use super::error::{ApiError, ErrorResponse};
use crate::domain::foundation::OwnerId;

/// Header carrying the caller's identity.
pub const OWNER_HEADER: &str = "x-user-id";

/// Extractor for the requesting owner, taken from the `X-User-Id` header.
///
/// The value is used verbatim; ownership comparisons are exact.
#[derive(Debug, Clone)]
pub struct RequireOwner(pub OwnerId);

/// Rejection type for [`RequireOwner`].
#[derive(Debug)]
pub struct OwnerRequired;

impl IntoResponse for OwnerRequired {
    fn into_response(self) -> Response {
        let error = ErrorResponse::unauthorized("X-User-Id header is required");
        (StatusCode::UNAUTHORIZED, Json(error)).into_response()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequireOwner
where
    S: Send + Sync,
{
    type Rejection = OwnerRequired;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let owner = parts
            .headers
            .get(OWNER_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|s| !s.trim().is_empty())
            .ok_or(OwnerRequired)?;

        Ok(RequireOwner(OwnerId::new(owner)))
    }
}

/// Decodes a JSON body from raw bytes.
///
/// Unlike `axum::Json`, every failure here (empty body, bad syntax, wrong
/// shape, any content type) is a 400 with the standard error body.
pub fn decode_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    if body.is_empty() {
        return Err(ApiError::bad_request("Request body is empty"));
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::bad_request(format!("Invalid request body: {}", e)))
}
