//! Shared state for all route groups.

use std::sync::Arc;
use std::time::Duration;

use crate::application::ProjectService;
use crate::ports::{CallContext, InferenceProvider};

/// Application state passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub projects: ProjectService,
    pub inference: Arc<dyn InferenceProvider>,
    /// Deadline applied to each outbound capability call.
    pub call_timeout: Duration,
}

impl AppState {
    pub fn new(
        projects: ProjectService,
        inference: Arc<dyn InferenceProvider>,
        call_timeout: Duration,
    ) -> Self {
        Self {
            projects,
            inference,
            call_timeout,
        }
    }

    /// Fresh context for one request's capability calls.
    pub fn call_context(&self) -> CallContext {
        CallContext::with_timeout(self.call_timeout)
    }
}
