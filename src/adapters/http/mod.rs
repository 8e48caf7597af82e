//! HTTP adapters - REST API implementations.
//!
//! Each route group has its own module; [`app_router`] assembles them.

pub mod ai;
pub mod error;
pub mod extract;
pub mod project;
mod router;
mod state;

pub use error::{ApiError, ErrorResponse};
pub use extract::RequireOwner;
pub use router::app_router;
pub use state::AppState;
