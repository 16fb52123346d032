//! Single-market adapter between a yield allocator and a Compound-style
//! lending market.
//!
//! The adapter predicts the market's annualized supply rate (now, or after
//! a hypothetical deposit) by replaying the market's interest rate formula
//! on live state, and sweeps balances in and out of the market:
//!
//! - [`CompoundAdapter::predict_supply_rate`] /
//!   [`CompoundAdapter::predict_supply_rate_from_params`]: rate after a deposit
//! - [`CompoundAdapter::current_apr`] / [`CompoundAdapter::current_price`]:
//!   the market's own rate and exchange rate
//! - [`CompoundAdapter::mint`]: underlying in, shares to the authorized recipient
//! - [`CompoundAdapter::redeem`]: shares in, underlying to a chosen recipient
//!
//! Collaborators are injected through the traits in [`gateway`], so the
//! adapter runs against a live chain ([`rpc::RpcGateway`]) or any in-memory
//! ledger.
//!
//! # Example
//!
//! ```no_run
//! use idle_compound::rpc::RpcGateway;
//! use idle_compound_contracts::CompoundClient;
//! use alloy_primitives::{Address, U256};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let client = CompoundClient::new("http://localhost:8545", "0x...")?;
//!     let cdai: Address = "0x5d3a536E4D6DbD6114cc1Ead35777bAB948E3643".parse()?;
//!     let admin = client.signer_address();
//!
//!     let mut adapter = RpcGateway::connect(client, cdai).await?.into_adapter(admin);
//!     adapter.set_authorized_recipient(admin, admin)?;
//!
//!     let apr = adapter.current_apr().await?;
//!     let deposit = U256::from(10_000u64) * idle_compound_sim::WAD;
//!     let apr_after_deposit = adapter.predict_supply_rate(deposit).await?;
//!
//!     // The allocator moves underlying into the adapter's account, then:
//!     let shares = adapter.mint().await?;
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod admin;
pub mod config;
pub mod error;
pub mod gateway;
pub mod rpc;

pub use adapter::{CompoundAdapter, SupplyRateParams};
pub use admin::{AdminConfig, AuthorizedRecipient};
pub use config::AdapterConfig;
pub use error::{AdapterError, ExternalError, ExternalResult, Result};
pub use gateway::{InterestRateModel, Market, Token};
pub use rpc::{RpcAdapter, RpcGateway};
