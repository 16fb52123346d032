//! Supply rate prediction for Compound-style markets.
//!
//! The market prices borrowing with a linear ("white paper") interest rate
//! model and pays suppliers the borrow rate scaled by utilization and by the
//! share of interest that is not kept as reserves:
//!
//! ```text
//! utilization  = borrows / (cash + extra_deposit + borrows - reserves)
//! borrow_rate  = base_rate + multiplier * utilization
//! supply_rate  = borrow_rate * utilization * (1 - reserve_factor)
//! annualized   = supply_rate * periods_per_year * 100
//! ```
//!
//! Each product is rescaled by 10^18 right after it is taken and every
//! division truncates. Reordering the operands changes the low digits of
//! the result, so the order above is part of the contract.
//!
//! # Example
//!
//! ```rust
//! use idle_compound_sim::{next_supply_rate, MarketSnapshot, RateModelParams, Wad};
//! use alloy_primitives::U256;
//!
//! let params = RateModelParams {
//!     base_rate_per_period: Wad::from_raw(U256::from(6_630_203_351u64)),
//!     multiplier_per_period: Wad::from_raw(U256::from(10_000_000_000u64)),
//! };
//! let snapshot = MarketSnapshot {
//!     total_borrows: "23235999897534012338929659".parse().unwrap(),
//!     cash: "11945633145364637018215366".parse().unwrap(),
//!     total_reserves: "107742405685625342683992".parse().unwrap(),
//!     one_minus_reserve_factor: Wad::from_raw(U256::from(950_000_000_000_000_000u64)),
//!     periods_per_year: U256::from(2_398_460u64),
//! };
//!
//! let extra = U256::from(10_000u64) * idle_compound_sim::WAD;
//! let apr = next_supply_rate(&params, &snapshot, extra).unwrap();
//! assert_eq!(apr, U256::from(1_999_999_999_785_848_000u64));
//! ```

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::math::{mul_div_down, Wad, PERCENT_CONVENTION, WAD};

/// Blocks per year assumed for block-based markets (~13.15s blocks)
pub const DEFAULT_BLOCKS_PER_YEAR: u64 = 2_398_460;

/// Per-period parameters of the linear interest rate model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateModelParams {
    /// Borrow rate at zero utilization (WAD per period)
    pub base_rate_per_period: Wad,
    /// Slope of the borrow rate in utilization (WAD per period)
    pub multiplier_per_period: Wad,
}

/// Market totals that feed the supply rate formula.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    /// Outstanding borrows, in underlying units
    pub total_borrows: U256,
    /// Liquidity held by the market, in underlying units
    pub cash: U256,
    /// Reserves owned by the protocol, in underlying units
    pub total_reserves: U256,
    /// `1e18 - reserve_factor`, already subtracted
    pub one_minus_reserve_factor: Wad,
    /// Number of accrual periods per year
    pub periods_per_year: U256,
}

impl MarketSnapshot {
    /// Builds a snapshot from the raw reserve factor reported by a market.
    pub fn from_reserve_factor(
        total_borrows: U256,
        cash: U256,
        total_reserves: U256,
        reserve_factor: Wad,
        periods_per_year: U256,
    ) -> Result<Self> {
        let one_minus_reserve_factor = Wad::ONE.checked_sub(reserve_factor).map_err(|_| {
            SimError::ReserveFactorAboveOne {
                reserve_factor: reserve_factor.raw(),
            }
        })?;

        Ok(Self {
            total_borrows,
            cash,
            total_reserves,
            one_minus_reserve_factor,
            periods_per_year,
        })
    }
}

/// Share of supplied liquidity that is currently borrowed.
///
/// Returns zero when nothing is supplied or borrowed (zero denominator).
/// Reserves larger than `cash + borrows` cannot occur on a healthy market
/// and are reported as an underflow.
pub fn utilization(borrows: U256, cash: U256, reserves: U256) -> Result<Wad> {
    let denominator = cash
        .checked_add(borrows)
        .ok_or(SimError::Overflow("utilization"))?
        .checked_sub(reserves)
        .ok_or(SimError::Underflow("utilization"))?;

    if denominator.is_zero() {
        return Ok(Wad::ZERO);
    }

    mul_div_down(borrows, WAD, denominator).map(Wad::from_raw)
}

/// `base_rate + multiplier * utilization`
pub fn borrow_rate_per_period(params: &RateModelParams, utilization: Wad) -> Result<Wad> {
    params
        .multiplier_per_period
        .mul_down(utilization)?
        .checked_add(params.base_rate_per_period)
}

/// Per-period supply rate after `extra_deposit` more underlying is supplied.
pub fn supply_rate_per_period(
    params: &RateModelParams,
    snapshot: &MarketSnapshot,
    extra_deposit: U256,
) -> Result<Wad> {
    let cash = snapshot
        .cash
        .checked_add(extra_deposit)
        .ok_or(SimError::Overflow("cash + extra_deposit"))?;
    let utilization = utilization(snapshot.total_borrows, cash, snapshot.total_reserves)?;
    let borrow_rate = borrow_rate_per_period(params, utilization)?;

    borrow_rate
        .mul_down(utilization)?
        .mul_down(snapshot.one_minus_reserve_factor)
}

/// `rate * periods_per_year * 100`, still WAD-scaled.
pub fn annualize(rate_per_period: Wad, periods_per_year: U256) -> Result<U256> {
    rate_per_period
        .mul_int(periods_per_year)?
        .mul_int(PERCENT_CONVENTION)
        .map(Wad::raw)
}

/// Annualized supply rate after `extra_deposit` more underlying is supplied.
pub fn next_supply_rate(
    params: &RateModelParams,
    snapshot: &MarketSnapshot,
    extra_deposit: U256,
) -> Result<U256> {
    let rate = supply_rate_per_period(params, snapshot, extra_deposit)?;
    annualize(rate, snapshot.periods_per_year)
}

/// Annualized supply rate before and after a deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupplyRateImpact {
    pub rate_before: U256,
    pub rate_after: U256,
    /// `rate_before - rate_after`, zero if the deposit did not lower the rate
    pub rate_drop: U256,
}

/// Compares the annualized supply rate with and without `amount` deposited.
pub fn supply_rate_impact(
    params: &RateModelParams,
    snapshot: &MarketSnapshot,
    amount: U256,
) -> Result<SupplyRateImpact> {
    let rate_before = next_supply_rate(params, snapshot, U256::ZERO)?;
    let rate_after = next_supply_rate(params, snapshot, amount)?;

    Ok(SupplyRateImpact {
        rate_before,
        rate_after,
        rate_drop: rate_before.saturating_sub(rate_after),
    })
}
