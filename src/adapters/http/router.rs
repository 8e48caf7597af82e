//! Top-level router assembly.
//!
//! Merges the route groups, attaches state and wraps everything in the
//! transport layers driven by [`ServerConfig`].

use std::time::Duration;

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderName, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::CorsLayer,
    timeout::{RequestBodyTimeoutLayer, TimeoutLayer},
    trace::TraceLayer,
};

use super::ai::ai_router;
use super::extract::OWNER_HEADER;
use super::project::project_router;
use super::state::AppState;
use crate::config::ServerConfig;

const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Slack between the handler deadline and the transport timeout, so a slow
/// provider call is reported as 504 by the handler rather than cut off.
const TRANSPORT_GRACE: Duration = Duration::from_secs(1);

/// Builds the complete application router.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .merge(project_router())
        .merge(ai_router())
        .with_state(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(RequestBodyTimeoutLayer::new(server.read_timeout()))
        .layer(TimeoutLayer::new(server.write_timeout() + TRANSPORT_GRACE));

    if let Some(cors) = build_cors(&server.cors_origins_list()) {
        router = router.layer(cors);
    }

    router.layer(TraceLayer::new_for_http())
}

/// GET /health - Liveness check
async fn health() -> &'static str {
    "OK"
}

/// CORS for the configured origins, or `None` when no origin is configured.
fn build_cors(origins: &[String]) -> Option<CorsLayer> {
    let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    if allowed.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
            .allow_headers([
                header::CONTENT_TYPE,
                header::ACCEPT,
                HeaderName::from_static(OWNER_HEADER),
            ]),
    )
}
