//! The single-market adapter.
//!
//! [`CompoundAdapter`] answers two questions for an allocator, "what does the
//! market pay now?" and "what would it pay after I deposit X?", and moves
//! funds: [`mint`](CompoundAdapter::mint) sweeps every unit of underlying the
//! adapter holds into the market and forwards the shares to the authorized
//! recipient, [`redeem`](CompoundAdapter::redeem) sweeps every share back out
//! and pays the underlying to a caller-chosen recipient.
//!
//! Nothing is tracked between calls. Amounts are always read from the
//! adapter's live balances. The sweeps read first, then make the external
//! calls, then forward what the calls produced; no adapter state is touched
//! after an external call, so a re-entrant call sees the balances the
//! collaborators report and cannot spend the same holdings twice.

use alloy_primitives::{Address, U256};
use idle_compound_sim::{annualize, next_supply_rate, MarketSnapshot, RateModelParams, Wad};
use tracing::{debug, info};

use crate::admin::AdminConfig;
use crate::config::AdapterConfig;
use crate::error::{AdapterError, Result};
use crate::gateway::{InterestRateModel, Market, Token};

/// Explicit inputs for [`CompoundAdapter::predict_supply_rate_from_params`].
///
/// The positional form `[B, C, R, 1 - F, N, extra]` converts via `From`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SupplyRateParams {
    pub total_borrows: U256,
    pub cash: U256,
    pub total_reserves: U256,
    /// `1e18 - reserve_factor`; the caller does the subtraction
    pub one_minus_reserve_factor: U256,
    pub periods_per_year: U256,
    pub extra_deposit: U256,
}

impl SupplyRateParams {
    fn snapshot(&self) -> MarketSnapshot {
        MarketSnapshot {
            total_borrows: self.total_borrows,
            cash: self.cash,
            total_reserves: self.total_reserves,
            one_minus_reserve_factor: Wad::from_raw(self.one_minus_reserve_factor),
            periods_per_year: self.periods_per_year,
        }
    }
}

impl From<[U256; 6]> for SupplyRateParams {
    fn from(params: [U256; 6]) -> Self {
        let [total_borrows, cash, total_reserves, one_minus_reserve_factor, periods_per_year, extra_deposit] =
            params;
        Self {
            total_borrows,
            cash,
            total_reserves,
            one_minus_reserve_factor,
            periods_per_year,
            extra_deposit,
        }
    }
}

/// Adapter between one allocator and one Compound-style market.
pub struct CompoundAdapter<M, R, T> {
    share_token: Address,
    market_address: Address,
    underlying: Address,
    account: Address,
    admin: AdminConfig,
    market: M,
    rate_model: R,
    tokens: T,
}

impl<M, R, T> CompoundAdapter<M, R, T> {
    /// Create an adapter over the given collaborators.
    pub fn new(config: AdapterConfig, market: M, rate_model: R, tokens: T) -> Self {
        Self {
            share_token: config.share_token,
            market_address: config.market,
            underlying: config.underlying,
            account: config.account,
            admin: AdminConfig::new(config.admin, config.periods_per_year),
            market,
            rate_model,
            tokens,
        }
    }

    pub fn share_token(&self) -> Address {
        self.share_token
    }

    pub fn market_address(&self) -> Address {
        self.market_address
    }

    pub fn underlying(&self) -> Address {
        self.underlying
    }

    /// The adapter's own account.
    pub fn account(&self) -> Address {
        self.account
    }

    pub fn admin(&self) -> Address {
        self.admin.admin()
    }

    pub fn authorized_recipient(&self) -> Option<Address> {
        self.admin.authorized_recipient()
    }

    pub fn periods_per_year(&self) -> u64 {
        self.admin.periods_per_year()
    }

    /// See [`AdminConfig::set_authorized_recipient`].
    pub fn set_authorized_recipient(&mut self, caller: Address, recipient: Address) -> Result<()> {
        self.admin.set_authorized_recipient(caller, recipient)
    }

    /// See [`AdminConfig::set_periods_per_year`].
    pub fn set_periods_per_year(&mut self, caller: Address, periods_per_year: u64) -> Result<()> {
        self.admin.set_periods_per_year(caller, periods_per_year)
    }
}

impl<M, R, T> CompoundAdapter<M, R, T>
where
    M: Market,
    R: InterestRateModel,
{
    /// Reads the market totals and the adapter's periods-per-year.
    pub async fn market_snapshot(&self) -> Result<MarketSnapshot> {
        let total_borrows = self.market.total_borrows().await?;
        let cash = self.market.cash().await?;
        let total_reserves = self.market.total_reserves().await?;
        let reserve_factor = self.market.reserve_factor().await?;

        let snapshot = MarketSnapshot::from_reserve_factor(
            total_borrows,
            cash,
            total_reserves,
            Wad::from_raw(reserve_factor),
            U256::from(self.periods_per_year()),
        )?;
        debug!(?snapshot, "read market snapshot");
        Ok(snapshot)
    }

    /// Reads the interest rate model's base rate and multiplier.
    pub async fn rate_model_params(&self) -> Result<RateModelParams> {
        Ok(RateModelParams {
            base_rate_per_period: Wad::from_raw(self.rate_model.base_rate_per_period().await?),
            multiplier_per_period: Wad::from_raw(self.rate_model.multiplier_per_period().await?),
        })
    }

    /// Annualized supply rate (WAD, times 100) if `extra_deposit` more
    /// underlying were supplied now.
    pub async fn predict_supply_rate(&self, extra_deposit: U256) -> Result<U256> {
        let snapshot = self.market_snapshot().await?;
        let params = self.rate_model_params().await?;
        let rate = next_supply_rate(&params, &snapshot, extra_deposit)?;
        debug!(%extra_deposit, %rate, "predicted supply rate");
        Ok(rate)
    }

    /// Same formula as [`predict_supply_rate`](Self::predict_supply_rate),
    /// with the market totals supplied by the caller instead of read from
    /// the market. Only the rate model parameters are read live.
    pub async fn predict_supply_rate_from_params(
        &self,
        params: impl Into<SupplyRateParams>,
    ) -> Result<U256> {
        let params = params.into();
        let model = self.rate_model_params().await?;
        Ok(next_supply_rate(
            &model,
            &params.snapshot(),
            params.extra_deposit,
        )?)
    }

    /// The market's own per-period supply rate, annualized.
    pub async fn current_apr(&self) -> Result<U256> {
        let rate = self.market.supply_rate_per_period().await?;
        Ok(annualize(
            Wad::from_raw(rate),
            U256::from(self.periods_per_year()),
        )?)
    }

    /// The market's exchange rate, unmodified.
    pub async fn current_price(&self) -> Result<U256> {
        Ok(self.market.exchange_rate().await?)
    }
}

impl<M, R, T> CompoundAdapter<M, R, T>
where
    M: Market,
    T: Token,
{
    /// Supplies the adapter's entire underlying balance to the market and
    /// forwards the resulting shares to the authorized recipient.
    ///
    /// Returns the number of shares forwarded. Holding no underlying is a
    /// no-op returning zero.
    pub async fn mint(&self) -> Result<U256> {
        let amount = self.tokens.balance_of(self.underlying, self.account).await?;
        if amount.is_zero() {
            debug!("no underlying held, nothing to mint");
            return Ok(U256::ZERO);
        }
        let recipient = self
            .authorized_recipient()
            .ok_or(AdapterError::RecipientNotConfigured)?;

        self.tokens
            .approve(self.underlying, self.account, self.market_address, amount)
            .await?;
        let minted = self.market.mint(self.account, amount).await?;

        let shares = self.tokens.balance_of(self.share_token, self.account).await?;
        self.tokens
            .transfer(self.share_token, self.account, recipient, shares)
            .await?;

        info!(%amount, %minted, %shares, %recipient, "minted and forwarded shares");
        Ok(shares)
    }

    /// Redeems the adapter's entire share balance and pays the underlying
    /// received to `recipient`.
    ///
    /// Returns the underlying amount paid. Holding no shares is a no-op
    /// returning zero.
    pub async fn redeem(&self, recipient: Address) -> Result<U256> {
        let shares = self.tokens.balance_of(self.share_token, self.account).await?;
        if shares.is_zero() {
            debug!("no shares held, nothing to redeem");
            return Ok(U256::ZERO);
        }

        let redeemed = self.market.redeem(self.account, shares).await?;

        let amount = self.tokens.balance_of(self.underlying, self.account).await?;
        self.tokens
            .transfer(self.underlying, self.account, recipient, amount)
            .await?;

        info!(%shares, %redeemed, %amount, %recipient, "redeemed and paid out underlying");
        Ok(amount)
    }
}
