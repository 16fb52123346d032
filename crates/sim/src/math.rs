//! WAD fixed-point arithmetic.
//!
//! Every quantity in the rate path is an integer scaled by 10^18. Products
//! are rescaled immediately after each multiplication and every division
//! truncates toward zero, so results match the on-chain formula bit for bit.

use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

/// 10^18, the fixed-point scale
pub const WAD: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// Annualized rates are reported in percent points of WAD (rate * 100)
pub const PERCENT_CONVENTION: U256 = U256::from_limbs([100, 0, 0, 0]);

/// Computes `x * y / d`, truncating.
pub fn mul_div_down(x: U256, y: U256, d: U256) -> Result<U256> {
    if d.is_zero() {
        return Err(SimError::DivisionByZero);
    }
    let product = x
        .checked_mul(y)
        .ok_or(SimError::Overflow("mul_div_down"))?;
    Ok(product / d)
}

/// A WAD-scaled fixed-point number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wad(U256);

impl Wad {
    /// 0.0
    pub const ZERO: Self = Self(U256::ZERO);

    /// 1.0
    pub const ONE: Self = Self(WAD);

    /// Wraps an already-scaled value.
    pub const fn from_raw(raw: U256) -> Self {
        Self(raw)
    }

    /// The scaled integer.
    pub const fn raw(self) -> U256 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// `self * rhs / 1e18`, truncating.
    pub fn mul_down(self, rhs: Self) -> Result<Self> {
        mul_div_down(self.0, rhs.0, WAD).map(Self)
    }

    /// `self * 1e18 / rhs`, truncating.
    pub fn div_down(self, rhs: Self) -> Result<Self> {
        mul_div_down(self.0, WAD, rhs.0).map(Self)
    }

    /// Multiplies by an unscaled integer; the result keeps the WAD scale.
    pub fn mul_int(self, rhs: U256) -> Result<Self> {
        self.0
            .checked_mul(rhs)
            .map(Self)
            .ok_or(SimError::Overflow("mul_int"))
    }

    pub fn checked_add(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_add(rhs.0)
            .map(Self)
            .ok_or(SimError::Overflow("add"))
    }

    pub fn checked_sub(self, rhs: Self) -> Result<Self> {
        self.0
            .checked_sub(rhs.0)
            .map(Self)
            .ok_or(SimError::Underflow("sub"))
    }
}

impl From<U256> for Wad {
    fn from(raw: U256) -> Self {
        Self(raw)
    }
}

impl From<Wad> for U256 {
    fn from(value: Wad) -> Self {
        value.0
    }
}

impl fmt::Display for Wad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
