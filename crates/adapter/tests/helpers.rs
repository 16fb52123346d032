//! In-memory Compound ledger for adapter integration tests.
//!
//! [`FakeCompound`] plays the market, the interest rate model and the token
//! contracts at once. Market math follows a cToken: shares minted are
//! `amount * 1e18 / exchange_rate` and underlying redeemed is
//! `shares * exchange_rate / 1e18`, both truncating.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Mutex;

use alloy_primitives::{address, Address, U256};
use idle_compound::{AdapterConfig, ExternalResult, InterestRateModel, Market, Token};
use thiserror::Error;

pub const SHARE_TOKEN: Address = address!("5d3a536E4D6DbD6114cc1Ead35777bAB948E3643");
pub const UNDERLYING: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
pub const ADMIN: Address = address!("adadadadadadadadadadadadadadadadadadadad");
pub const ADAPTER: Address = address!("a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0a0");
pub const VAULT: Address = address!("1d1d1d1d1d1d1d1d1d1d1d1d1d1d1d1d1d1d1d1d");
pub const SOMEONE: Address = address!("0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e0e");

pub const WAD: u128 = 1_000_000_000_000_000_000;
/// One share unit (8 decimals)
pub const ONE_SHARE: u128 = 100_000_000;

/// Parse a decimal integer literal.
pub fn u(s: &str) -> U256 {
    s.parse().unwrap()
}

/// Errors raised by the fake contracts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FakeError {
    #[error("insufficient balance")]
    InsufficientBalance,
    #[error("insufficient allowance")]
    InsufficientAllowance,
    #[error("{0} failed")]
    Injected(&'static str),
}

/// Observable state of the fake ledger.
#[derive(Debug, Clone, Default)]
pub struct LedgerState {
    pub balances: HashMap<(Address, Address), U256>,
    pub allowances: HashMap<(Address, Address, Address), U256>,
    pub total_borrows: U256,
    pub cash: U256,
    pub total_reserves: U256,
    pub reserve_factor: U256,
    pub supply_rate: U256,
    pub exchange_rate: U256,
    pub base_rate: U256,
    pub multiplier: U256,
    /// Every call made against the fake, in order
    pub calls: Vec<&'static str>,
    /// Calls that fail when made
    pub failing: Vec<&'static str>,
}

impl LedgerState {
    pub fn balance(&self, token: Address, owner: Address) -> U256 {
        self.balances
            .get(&(token, owner))
            .copied()
            .unwrap_or_default()
    }

    fn record(&mut self, call: &'static str) -> Result<(), FakeError> {
        self.calls.push(call);
        if self.failing.contains(&call) {
            Err(FakeError::Injected(call))
        } else {
            Ok(())
        }
    }

    fn move_tokens(
        &mut self,
        token: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), FakeError> {
        let from_balance = self.balance(token, from);
        if from_balance < amount {
            return Err(FakeError::InsufficientBalance);
        }
        self.balances.insert((token, from), from_balance - amount);
        let to_balance = self.balance(token, to);
        self.balances.insert((token, to), to_balance + amount);
        Ok(())
    }
}

/// Market, rate model and token contracts in one in-memory ledger.
#[derive(Debug, Default)]
pub struct FakeCompound {
    state: Mutex<LedgerState>,
}

impl FakeCompound {
    /// A DAI/cDAI-like market: exchange rate 0.02 (2e26 with the 10-decimal
    /// gap), the reference market totals and a rate model calibrated so the
    /// per-block supply rate after a 10 000 DAI deposit is
    /// `2e18 / 2_398_460 / 100`.
    pub fn reference() -> Self {
        let state = LedgerState {
            total_borrows: u("23235999897534012338929659"),
            cash: u("11945633145364637018215366"),
            total_reserves: u("107742405685625342683992"),
            reserve_factor: u("50000000000000000"),
            supply_rate: U256::from(8_338_683_988u64),
            exchange_rate: u("200000000000000000000000000"),
            base_rate: U256::from(6_630_203_351u64),
            multiplier: U256::from(10_000_000_000u64),
            ..LedgerState::default()
        };
        Self {
            state: Mutex::new(state),
        }
    }

    pub fn state(&self) -> LedgerState {
        self.state.lock().unwrap().clone()
    }

    pub fn update(&self, f: impl FnOnce(&mut LedgerState)) {
        let mut state = self.state.lock().unwrap();
        f(&mut state);
    }

    pub fn credit(&self, token: Address, owner: Address, amount: U256) {
        self.update(|s| {
            let balance = s.balance(token, owner);
            s.balances.insert((token, owner), balance + amount);
        });
    }

    pub fn balance(&self, token: Address, owner: Address) -> U256 {
        self.state.lock().unwrap().balance(token, owner)
    }

    pub fn fail_on(&self, call: &'static str) {
        self.update(|s| s.failing.push(call));
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Runs `op` as one all-or-nothing unit: if it fails, every balance and
    /// allowance change it made is undone. The call log is kept.
    pub async fn atomically<T, E, F, Fut>(&self, op: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let checkpoint = self.state();
        let result = op().await;
        if result.is_err() {
            self.update(|s| {
                let calls = std::mem::take(&mut s.calls);
                *s = LedgerState {
                    calls,
                    ..checkpoint
                };
            });
        }
        result
    }

    fn with<T>(
        &self,
        call: &'static str,
        f: impl FnOnce(&mut LedgerState) -> Result<T, FakeError>,
    ) -> ExternalResult<T> {
        let mut state = self.state.lock().unwrap();
        state.record(call)?;
        Ok(f(&mut *state)?)
    }
}

impl Market for FakeCompound {
    async fn total_borrows(&self) -> ExternalResult<U256> {
        self.with("totalBorrows", |s| Ok(s.total_borrows))
    }

    async fn cash(&self) -> ExternalResult<U256> {
        self.with("getCash", |s| Ok(s.cash))
    }

    async fn total_reserves(&self) -> ExternalResult<U256> {
        self.with("totalReserves", |s| Ok(s.total_reserves))
    }

    async fn reserve_factor(&self) -> ExternalResult<U256> {
        self.with("reserveFactorMantissa", |s| Ok(s.reserve_factor))
    }

    async fn supply_rate_per_period(&self) -> ExternalResult<U256> {
        self.with("supplyRatePerBlock", |s| Ok(s.supply_rate))
    }

    async fn exchange_rate(&self) -> ExternalResult<U256> {
        self.with("exchangeRateStored", |s| Ok(s.exchange_rate))
    }

    async fn mint(&self, minter: Address, amount: U256) -> ExternalResult<U256> {
        self.with("mint", |s| {
            let allowance = s
                .allowances
                .get(&(UNDERLYING, minter, SHARE_TOKEN))
                .copied()
                .unwrap_or_default();
            if allowance < amount {
                return Err(FakeError::InsufficientAllowance);
            }
            s.allowances
                .insert((UNDERLYING, minter, SHARE_TOKEN), allowance - amount);
            s.move_tokens(UNDERLYING, minter, SHARE_TOKEN, amount)?;
            s.cash += amount;

            let shares = amount * U256::from(WAD) / s.exchange_rate;
            let balance = s.balance(SHARE_TOKEN, minter);
            s.balances.insert((SHARE_TOKEN, minter), balance + shares);
            Ok(shares)
        })
    }

    async fn redeem(&self, redeemer: Address, shares: U256) -> ExternalResult<U256> {
        self.with("redeem", |s| {
            let balance = s.balance(SHARE_TOKEN, redeemer);
            if balance < shares {
                return Err(FakeError::InsufficientBalance);
            }
            s.balances.insert((SHARE_TOKEN, redeemer), balance - shares);

            let amount = shares * s.exchange_rate / U256::from(WAD);
            s.move_tokens(UNDERLYING, SHARE_TOKEN, redeemer, amount)?;
            s.cash = s.cash.saturating_sub(amount);
            Ok(amount)
        })
    }
}

impl InterestRateModel for FakeCompound {
    async fn base_rate_per_period(&self) -> ExternalResult<U256> {
        self.with("baseRatePerBlock", |s| Ok(s.base_rate))
    }

    async fn multiplier_per_period(&self) -> ExternalResult<U256> {
        self.with("multiplierPerBlock", |s| Ok(s.multiplier))
    }
}

impl Token for FakeCompound {
    async fn balance_of(&self, token: Address, owner: Address) -> ExternalResult<U256> {
        self.with("balanceOf", |s| Ok(s.balance(token, owner)))
    }

    async fn approve(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> ExternalResult<()> {
        self.with("approve", |s| {
            s.allowances.insert((token, owner, spender), amount);
            Ok(())
        })
    }

    async fn transfer(
        &self,
        token: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> ExternalResult<()> {
        self.with("transfer", |s| s.move_tokens(token, from, to, amount))
    }
}

/// Adapter configuration for the reference market (market is its own share token).
pub fn reference_config() -> AdapterConfig {
    AdapterConfig::new(SHARE_TOKEN, SHARE_TOKEN, UNDERLYING, ADMIN, ADAPTER)
}
