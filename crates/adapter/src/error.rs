//! Error types for the adapter.

use alloy_primitives::Address;
use idle_compound_sim::SimError;
use thiserror::Error;

/// Failure reported by a market, rate model or token collaborator.
pub type ExternalError = Box<dyn std::error::Error + Send + Sync>;

/// Result type returned by collaborator calls.
pub type ExternalResult<T> = std::result::Result<T, ExternalError>;

/// Errors that can occur when operating the adapter.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// The caller is not the administrative identity.
    #[error("Access denied for caller {caller}")]
    AccessDenied { caller: Address },

    /// The authorized recipient can only be set once.
    #[error("idleToken addr already set")]
    AlreadyConfigured,

    /// Minted shares have nowhere to go until a recipient is configured.
    #[error("Authorized recipient not configured")]
    RecipientNotConfigured,

    /// A collaborator failed; its error is passed through untouched.
    #[error(transparent)]
    External(#[from] ExternalError),

    /// Fixed-point overflow or underflow in the rate formula.
    #[error(transparent)]
    Arithmetic(#[from] SimError),

    /// The configuration document could not be parsed.
    #[error("Invalid adapter configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;
