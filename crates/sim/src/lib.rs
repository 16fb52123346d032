//! Compound Market Rate Simulation
//!
//! This crate reproduces the supply rate arithmetic of a Compound-style
//! lending market so an allocator can ask what a market pays today and what
//! it would pay after a deposit, without touching the chain.
//!
//! # Overview
//!
//! - [`Wad`]: 18-decimal fixed-point numbers with truncating division
//! - [`utilization`], [`borrow_rate_per_period`], [`supply_rate_per_period`]:
//!   the linear interest rate model, one step at a time
//! - [`next_supply_rate`]: the annualized supply rate after a hypothetical
//!   deposit
//! - [`supply_rate_impact`]: the rate before vs. after a deposit
//!
//! # Example
//!
//! ```rust
//! use idle_compound_sim::{supply_rate_impact, MarketSnapshot, RateModelParams, Wad, WAD};
//! use alloy_primitives::U256;
//!
//! let params = RateModelParams {
//!     base_rate_per_period: Wad::from_raw(U256::from(20_000_000_000u64)),
//!     multiplier_per_period: Wad::from_raw(U256::from(100_000_000_000u64)),
//! };
//! let snapshot = MarketSnapshot {
//!     total_borrows: U256::from(800_000u64) * WAD,
//!     cash: U256::from(200_000u64) * WAD,
//!     total_reserves: U256::ZERO,
//!     one_minus_reserve_factor: Wad::from_raw(U256::from(900_000_000_000_000_000u64)),
//!     periods_per_year: U256::from(2_398_460u64),
//! };
//!
//! let impact = supply_rate_impact(&params, &snapshot, U256::from(100_000u64) * WAD).unwrap();
//! assert!(impact.rate_after < impact.rate_before);
//! ```

pub mod error;
pub mod math;
pub mod rate_model;

pub use error::{Result, SimError};

pub use math::{mul_div_down, Wad, PERCENT_CONVENTION, WAD};

pub use rate_model::{
    annualize, borrow_rate_per_period, next_supply_rate, supply_rate_impact,
    supply_rate_per_period, utilization, MarketSnapshot, RateModelParams, SupplyRateImpact,
    DEFAULT_BLOCKS_PER_YEAR,
};
