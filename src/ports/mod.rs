//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Capability Ports
//!
//! - `InferenceProvider` - Schema generation and text embedding
//! - `IdentityProvider` - Wallet signature verification and balances
//! - `HostingProvider` - Deploying project content
//!
//! ## Persistence Ports
//!
//! - `ProjectRepository` - CRUD over the Project aggregate
//!
//! Every capability call takes a `CallContext` carrying the caller's
//! cancellation signal and deadline.

mod call_context;
mod hosting_provider;
mod identity_provider;
mod inference_provider;
mod project_repository;

pub use call_context::CallContext;
pub use hosting_provider::{HostingError, HostingProvider};
pub use identity_provider::{Balance, IdentityError, IdentityProvider};
pub use inference_provider::{InferenceError, InferenceProvider, ProviderInfo};
pub use project_repository::ProjectRepository;
