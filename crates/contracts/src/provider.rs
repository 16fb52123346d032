//! Provider type definitions for contract clients.

use alloy::providers::DynProvider;

/// The provider used by [`CompoundClient`](crate::CompoundClient).
///
/// `ProviderBuilder::new()` stacks the recommended fillers and a wallet on
/// top of an HTTP transport; the concrete filler type is erased here.
pub type HttpProvider = DynProvider;
