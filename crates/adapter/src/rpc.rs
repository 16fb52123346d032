//! Collaborators backed by a live chain through [`CompoundClient`].
//!
//! The client's signer stands in for the adapter's own account: balances
//! are read for it, and every approve/mint/redeem/transfer is sent from it.
//! Requests to act for any other account are refused.

use std::sync::Arc;

use alloy_primitives::{Address, U256};
use idle_compound_contracts::{CompoundClient, ContractError};
use tracing::debug;

use crate::adapter::CompoundAdapter;
use crate::config::AdapterConfig;
use crate::error::ExternalResult;
use crate::gateway::{InterestRateModel, Market, Token};

/// Adapter whose market, rate model and tokens all go through one RPC gateway.
pub type RpcAdapter = CompoundAdapter<Arc<RpcGateway>, Arc<RpcGateway>, Arc<RpcGateway>>;

/// One cToken market, its interest rate model and its underlying, on-chain.
///
/// The market is taken to be its own share token unless
/// [`with_share_token`](Self::with_share_token) says otherwise.
pub struct RpcGateway {
    client: CompoundClient,
    market: Address,
    share_token: Address,
    underlying: Address,
    rate_model: Address,
}

impl RpcGateway {
    pub fn new(
        client: CompoundClient,
        market: Address,
        underlying: Address,
        rate_model: Address,
    ) -> Self {
        Self {
            client,
            market,
            share_token: market,
            underlying,
            rate_model,
        }
    }

    /// Discovers the underlying asset and interest rate model from the market.
    pub async fn connect(client: CompoundClient, market: Address) -> Result<Self, ContractError> {
        let underlying = client.underlying(market).await?;
        let rate_model = client.interest_rate_model(market).await?;
        debug!(%market, %underlying, %rate_model, "connected to market");
        Ok(Self::new(client, market, underlying, rate_model))
    }

    /// Use a share token other than the market itself. Minted shares are
    /// measured on this token.
    pub fn with_share_token(mut self, share_token: Address) -> Self {
        self.share_token = share_token;
        self
    }

    /// The signing account, i.e. the adapter's own account.
    pub fn account(&self) -> Address {
        self.client.signer_address()
    }

    /// Configuration for an adapter driven by this gateway.
    pub fn adapter_config(&self, admin: Address) -> AdapterConfig {
        AdapterConfig::new(
            self.share_token,
            self.market,
            self.underlying,
            admin,
            self.account(),
        )
    }

    /// Builds an adapter that shares this gateway across all collaborators.
    pub fn into_adapter(self, admin: Address) -> RpcAdapter {
        let config = self.adapter_config(admin);
        let gateway = Arc::new(self);
        CompoundAdapter::new(config, Arc::clone(&gateway), Arc::clone(&gateway), gateway)
    }

    fn ensure_signer(&self, account: Address) -> Result<(), ContractError> {
        let signer = self.client.signer_address();
        if account == signer {
            Ok(())
        } else {
            Err(ContractError::UnauthorizedAccount {
                signer,
                requested: account,
            })
        }
    }
}

impl Market for RpcGateway {
    async fn total_borrows(&self) -> ExternalResult<U256> {
        Ok(self.client.total_borrows(self.market).await?)
    }

    async fn cash(&self) -> ExternalResult<U256> {
        Ok(self.client.cash(self.market).await?)
    }

    async fn total_reserves(&self) -> ExternalResult<U256> {
        Ok(self.client.total_reserves(self.market).await?)
    }

    async fn reserve_factor(&self) -> ExternalResult<U256> {
        Ok(self.client.reserve_factor(self.market).await?)
    }

    async fn supply_rate_per_period(&self) -> ExternalResult<U256> {
        Ok(self.client.supply_rate_per_block(self.market).await?)
    }

    async fn exchange_rate(&self) -> ExternalResult<U256> {
        Ok(self.client.exchange_rate_stored(self.market).await?)
    }

    async fn mint(&self, minter: Address, amount: U256) -> ExternalResult<U256> {
        self.ensure_signer(minter)?;
        let before = self.client.balance_of(self.share_token, minter).await?;
        self.client.mint(self.market, amount).await?;
        let after = self.client.balance_of(self.share_token, minter).await?;
        Ok(after.saturating_sub(before))
    }

    async fn redeem(&self, redeemer: Address, shares: U256) -> ExternalResult<U256> {
        self.ensure_signer(redeemer)?;
        let before = self.client.balance_of(self.underlying, redeemer).await?;
        self.client.redeem(self.market, shares).await?;
        let after = self.client.balance_of(self.underlying, redeemer).await?;
        Ok(after.saturating_sub(before))
    }
}

impl InterestRateModel for RpcGateway {
    async fn base_rate_per_period(&self) -> ExternalResult<U256> {
        Ok(self.client.base_rate_per_block(self.rate_model).await?)
    }

    async fn multiplier_per_period(&self) -> ExternalResult<U256> {
        Ok(self.client.multiplier_per_block(self.rate_model).await?)
    }
}

impl Token for RpcGateway {
    async fn balance_of(&self, token: Address, owner: Address) -> ExternalResult<U256> {
        Ok(self.client.balance_of(token, owner).await?)
    }

    async fn approve(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> ExternalResult<()> {
        self.ensure_signer(owner)?;
        self.client.approve(token, spender, amount).await?;
        Ok(())
    }

    async fn transfer(
        &self,
        token: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> ExternalResult<()> {
        self.ensure_signer(from)?;
        self.client.transfer(token, to, amount).await?;
        Ok(())
    }
}
