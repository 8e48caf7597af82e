//! Identity provider port for signature-based wallet identities.
//!
//! Verifies that a signed message was produced by a wallet and resolves it
//! to the `OwnerId` used for project ownership. Balance lookup is exposed
//! for features gated on holdings.
//!
//! No adapter ships with this crate; implementations live with whichever
//! chain client the deployment uses.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::CallContext;
use crate::domain::foundation::OwnerId;

/// Verifies wallet signatures and reads balances.
///
/// # Contract
///
/// Implementations must:
/// - Return the signer as an `OwnerId` only when the signature is valid
/// - Return `IdentityError::InvalidSignature` for a bad or mismatched signature
/// - Return `IdentityError::Canceled` when the context fires mid-call
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verify `signature` over `message` and return the signing identity.
    async fn verify_signature(
        &self,
        ctx: &CallContext,
        message: &str,
        signature: &str,
    ) -> Result<OwnerId, IdentityError>;

    /// Read the balance of `address` on `chain_id`.
    async fn get_balance(
        &self,
        ctx: &CallContext,
        chain_id: &str,
        address: &str,
    ) -> Result<Balance, IdentityError>;
}

/// Balance of an address on a chain.
///
/// `amount` is kept as a decimal string so no precision is lost between
/// chains with different unit sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    pub chain_id: String,
    pub address: String,
    pub amount: String,
}

/// Identity provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("invalid signature")]
    InvalidSignature,

    #[error("unsupported chain: {0}")]
    UnsupportedChain(String),

    #[error("identity provider unavailable: {0}")]
    Unavailable(String),

    #[error("identity call canceled")]
    Canceled,
}
