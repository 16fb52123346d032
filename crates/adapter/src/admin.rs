//! Administrative configuration: the one-time authorized recipient and the
//! periods-per-year constant, both gated to a single admin identity.

use alloy_primitives::Address;
use tracing::{info, warn};

use crate::error::{AdapterError, Result};

/// Where minted shares are forwarded. Moves from `Unset` to `Set` once and
/// never leaves `Set`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthorizedRecipient {
    #[default]
    Unset,
    Set(Address),
}

impl AuthorizedRecipient {
    pub fn get(&self) -> Option<Address> {
        match self {
            Self::Unset => None,
            Self::Set(address) => Some(*address),
        }
    }

    /// Transitions `Unset -> Set(recipient)`; any other transition fails.
    pub fn set(&mut self, recipient: Address) -> Result<()> {
        match self {
            Self::Set(_) => Err(AdapterError::AlreadyConfigured),
            Self::Unset => {
                *self = Self::Set(recipient);
                Ok(())
            }
        }
    }
}

/// Mutable adapter settings and the identity allowed to change them.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    admin: Address,
    recipient: AuthorizedRecipient,
    periods_per_year: u64,
}

impl AdminConfig {
    pub fn new(admin: Address, periods_per_year: u64) -> Self {
        Self {
            admin,
            recipient: AuthorizedRecipient::Unset,
            periods_per_year,
        }
    }

    pub fn admin(&self) -> Address {
        self.admin
    }

    pub fn authorized_recipient(&self) -> Option<Address> {
        self.recipient.get()
    }

    pub fn periods_per_year(&self) -> u64 {
        self.periods_per_year
    }

    fn authorize(&self, caller: Address, operation: &'static str) -> Result<()> {
        if caller == self.admin {
            Ok(())
        } else {
            warn!(%caller, operation, "rejected non-admin caller");
            Err(AdapterError::AccessDenied { caller })
        }
    }

    /// Binds the recipient of minted shares. Succeeds at most once.
    ///
    /// The caller check runs first: a non-admin always gets `AccessDenied`,
    /// the admin gets `AlreadyConfigured` once a recipient is bound.
    pub fn set_authorized_recipient(&mut self, caller: Address, recipient: Address) -> Result<()> {
        self.authorize(caller, "set_authorized_recipient")?;
        self.recipient.set(recipient)?;
        info!(%recipient, "authorized recipient set");
        Ok(())
    }

    /// Overwrites periods-per-year. Zero is accepted and zeroes every
    /// annualized rate.
    pub fn set_periods_per_year(&mut self, caller: Address, periods_per_year: u64) -> Result<()> {
        self.authorize(caller, "set_periods_per_year")?;
        self.periods_per_year = periods_per_year;
        info!(periods_per_year, "periods per year updated");
        Ok(())
    }
}
