//! Collaborator interfaces: the lending market, its interest rate model and
//! the token ledger.
//!
//! These are thin typed accessors with no business logic and no caching.
//! Every call reaches the live collaborator, and whatever error it reports
//! is handed back unchanged.

#![expect(async_fn_in_trait)]

use std::sync::Arc;

use alloy_primitives::{Address, U256};

use crate::error::ExternalResult;

/// A Compound-style lending market.
pub trait Market {
    /// Outstanding borrows, in underlying units.
    async fn total_borrows(&self) -> ExternalResult<U256>;

    /// Liquidity held by the market, in underlying units.
    async fn cash(&self) -> ExternalResult<U256>;

    /// Protocol reserves, in underlying units.
    async fn total_reserves(&self) -> ExternalResult<U256>;

    /// Share of interest kept as reserves (WAD).
    async fn reserve_factor(&self) -> ExternalResult<U256>;

    /// Supply rate the market currently pays per accrual period (WAD).
    async fn supply_rate_per_period(&self) -> ExternalResult<U256>;

    /// Underlying per share, scaled by `1e18 * 10^(underlying - share decimals)`.
    async fn exchange_rate(&self) -> ExternalResult<U256>;

    /// Supplies `amount` underlying pulled from `minter`; returns the shares
    /// credited to `minter`.
    async fn mint(&self, minter: Address, amount: U256) -> ExternalResult<U256>;

    /// Burns `shares` held by `redeemer`; returns the underlying paid out.
    async fn redeem(&self, redeemer: Address, shares: U256) -> ExternalResult<U256>;
}

/// The linear interest rate model behind a [`Market`].
pub trait InterestRateModel {
    async fn base_rate_per_period(&self) -> ExternalResult<U256>;

    async fn multiplier_per_period(&self) -> ExternalResult<U256>;
}

/// Fungible token ledger shared by the underlying asset and the share token.
pub trait Token {
    async fn balance_of(&self, token: Address, owner: Address) -> ExternalResult<U256>;

    /// Lets `spender` pull up to `amount` of `token` from `owner`.
    async fn approve(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> ExternalResult<()>;

    async fn transfer(
        &self,
        token: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> ExternalResult<()>;
}

impl<M: Market> Market for &M {
    async fn total_borrows(&self) -> ExternalResult<U256> {
        (**self).total_borrows().await
    }

    async fn cash(&self) -> ExternalResult<U256> {
        (**self).cash().await
    }

    async fn total_reserves(&self) -> ExternalResult<U256> {
        (**self).total_reserves().await
    }

    async fn reserve_factor(&self) -> ExternalResult<U256> {
        (**self).reserve_factor().await
    }

    async fn supply_rate_per_period(&self) -> ExternalResult<U256> {
        (**self).supply_rate_per_period().await
    }

    async fn exchange_rate(&self) -> ExternalResult<U256> {
        (**self).exchange_rate().await
    }

    async fn mint(&self, minter: Address, amount: U256) -> ExternalResult<U256> {
        (**self).mint(minter, amount).await
    }

    async fn redeem(&self, redeemer: Address, shares: U256) -> ExternalResult<U256> {
        (**self).redeem(redeemer, shares).await
    }
}

impl<M: Market> Market for Arc<M> {
    async fn total_borrows(&self) -> ExternalResult<U256> {
        (**self).total_borrows().await
    }

    async fn cash(&self) -> ExternalResult<U256> {
        (**self).cash().await
    }

    async fn total_reserves(&self) -> ExternalResult<U256> {
        (**self).total_reserves().await
    }

    async fn reserve_factor(&self) -> ExternalResult<U256> {
        (**self).reserve_factor().await
    }

    async fn supply_rate_per_period(&self) -> ExternalResult<U256> {
        (**self).supply_rate_per_period().await
    }

    async fn exchange_rate(&self) -> ExternalResult<U256> {
        (**self).exchange_rate().await
    }

    async fn mint(&self, minter: Address, amount: U256) -> ExternalResult<U256> {
        (**self).mint(minter, amount).await
    }

    async fn redeem(&self, redeemer: Address, shares: U256) -> ExternalResult<U256> {
        (**self).redeem(redeemer, shares).await
    }
}

impl<R: InterestRateModel> InterestRateModel for &R {
    async fn base_rate_per_period(&self) -> ExternalResult<U256> {
        (**self).base_rate_per_period().await
    }

    async fn multiplier_per_period(&self) -> ExternalResult<U256> {
        (**self).multiplier_per_period().await
    }
}

impl<R: InterestRateModel> InterestRateModel for Arc<R> {
    async fn base_rate_per_period(&self) -> ExternalResult<U256> {
        (**self).base_rate_per_period().await
    }

    async fn multiplier_per_period(&self) -> ExternalResult<U256> {
        (**self).multiplier_per_period().await
    }
}

impl<T: Token> Token for &T {
    async fn balance_of(&self, token: Address, owner: Address) -> ExternalResult<U256> {
        (**self).balance_of(token, owner).await
    }

    async fn approve(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> ExternalResult<()> {
        (**self).approve(token, owner, spender, amount).await
    }

    async fn transfer(
        &self,
        token: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> ExternalResult<()> {
        (**self).transfer(token, from, to, amount).await
    }
}

impl<T: Token> Token for Arc<T> {
    async fn balance_of(&self, token: Address, owner: Address) -> ExternalResult<U256> {
        (**self).balance_of(token, owner).await
    }

    async fn approve(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> ExternalResult<()> {
        (**self).approve(token, owner, spender, amount).await
    }

    async fn transfer(
        &self,
        token: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> ExternalResult<()> {
        (**self).transfer(token, from, to, amount).await
    }
}
