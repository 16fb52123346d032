//! Contract bindings and an RPC client for Compound-style cToken markets.
//!
//! This crate provides Solidity bindings for a cToken market, its white
//! paper interest rate model and ERC-20 tokens, plus [`CompoundClient`]
//! which reads market state and sends approve/mint/redeem/transfer
//! transactions from one signing account.
//!
//! # Example
//!
//! ```no_run
//! use idle_compound_contracts::CompoundClient;
//! use alloy::primitives::Address;
//!
//! #[tokio::main]
//! async fn main() -> idle_compound_contracts::Result<()> {
//!     let client = CompoundClient::new(
//!         "https://eth.llamarpc.com",
//!         "0x...", // private key
//!     )?;
//!
//!     let cdai: Address = "0x5d3a536E4D6DbD6114cc1Ead35777bAB948E3643".parse().unwrap();
//!     let rate = client.supply_rate_per_block(cdai).await?;
//!     let model = client.interest_rate_model(cdai).await?;
//!     let base = client.base_rate_per_block(model).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod ctoken;
pub mod erc20;
pub mod error;
pub mod interest_rate_model;
pub mod provider;

pub use client::CompoundClient;
pub use error::{ContractError, Result};
pub use provider::HttpProvider;
