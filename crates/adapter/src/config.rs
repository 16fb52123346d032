//! Deployment configuration for an adapter.

use alloy_primitives::Address;
use idle_compound_sim::DEFAULT_BLOCKS_PER_YEAR;
use serde::{Deserialize, Serialize};

use crate::error::Result;

fn default_periods_per_year() -> u64 {
    DEFAULT_BLOCKS_PER_YEAR
}

/// Addresses and constants an adapter is deployed with.
///
/// `share_token`, `market` and `underlying` are fixed for the lifetime of
/// the adapter. `market` may equal `share_token` when the market contract
/// is itself the share token, as with Compound cTokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterConfig {
    /// Interest-bearing share token minted by the market
    pub share_token: Address,
    /// Market that mints and redeems shares
    pub market: Address,
    /// Asset supplied to the market
    pub underlying: Address,
    /// Identity allowed to change the adapter's settings
    pub admin: Address,
    /// The adapter's own account, whose balances are swept
    pub account: Address,
    /// Accrual periods per year used to annualize rates
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: u64,
}

impl AdapterConfig {
    /// Create a configuration with the default periods-per-year.
    pub fn new(
        share_token: Address,
        market: Address,
        underlying: Address,
        admin: Address,
        account: Address,
    ) -> Self {
        Self {
            share_token,
            market,
            underlying,
            admin,
            account,
            periods_per_year: DEFAULT_BLOCKS_PER_YEAR,
        }
    }

    /// Parse a configuration from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
