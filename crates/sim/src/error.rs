//! Error types for the rate simulation library.

use alloy_primitives::U256;
use thiserror::Error;

/// Errors raised by the fixed-point rate arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A multiplication or addition exceeded 256 bits
    #[error("Arithmetic overflow in {0}")]
    Overflow(&'static str),

    /// A subtraction went below zero
    #[error("Arithmetic underflow in {0}")]
    Underflow(&'static str),

    /// Division by zero
    #[error("Division by zero")]
    DivisionByZero,

    /// Reserve factor larger than 1.0 (WAD)
    #[error("Reserve factor {reserve_factor} exceeds 1e18")]
    ReserveFactorAboveOne { reserve_factor: U256 },
}

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;
