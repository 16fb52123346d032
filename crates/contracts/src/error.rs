//! Error types for the contracts crate.

use alloy_primitives::{Address, TxHash, U256};
use thiserror::Error;

/// Errors that can occur when using the contract client.
#[derive(Debug, Error)]
pub enum ContractError {
    /// RPC connection failed.
    #[error("RPC connection failed: {0}")]
    RpcConnection(String),

    /// Transaction failed.
    #[error("Transaction failed: {0}")]
    TransactionFailed(String),

    /// Invalid private key.
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// The transaction was mined but reverted.
    #[error("{operation} reverted in transaction {tx_hash}")]
    Reverted {
        operation: &'static str,
        tx_hash: TxHash,
    },

    /// The market returned a non-zero Compound error code.
    #[error("Market rejected {operation} with error code {code}")]
    MarketRejected { operation: &'static str, code: U256 },

    /// The client was asked to act for an account it does not sign for.
    #[error("Signer {signer} cannot act for account {requested}")]
    UnauthorizedAccount { signer: Address, requested: Address },
}

/// Result type alias for contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;
