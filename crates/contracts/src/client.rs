//! RPC client for cToken markets, their interest rate model and ERC-20 tokens.

use alloy::{
    network::EthereumWallet,
    primitives::{Address, U256},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionReceipt,
    signers::local::PrivateKeySigner,
};
use tracing::debug;

use crate::ctoken::ICToken;
use crate::erc20::IERC20;
use crate::error::{ContractError, Result};
use crate::interest_rate_model::IInterestRateModel;
use crate::provider::HttpProvider;

fn failed<E: std::fmt::Display>(action: &'static str) -> impl FnOnce(E) -> ContractError {
    move |e| ContractError::TransactionFailed(format!("Failed to {}: {}", action, e))
}

fn ensure_success(
    operation: &'static str,
    receipt: TransactionReceipt,
) -> Result<TransactionReceipt> {
    if receipt.status() {
        debug!(operation, tx_hash = %receipt.transaction_hash, "transaction mined");
        Ok(receipt)
    } else {
        Err(ContractError::Reverted {
            operation,
            tx_hash: receipt.transaction_hash,
        })
    }
}

/// Client for reading Compound market state and moving funds through a
/// cToken market with a single signing account.
pub struct CompoundClient {
    provider: HttpProvider,
    signer_address: Address,
}

impl CompoundClient {
    /// Create a new client signing with `private_key`.
    pub fn new(rpc_url: &str, private_key: &str) -> Result<Self> {
        let signer: PrivateKeySigner = private_key
            .parse()
            .map_err(|_| ContractError::InvalidPrivateKey)?;
        let signer_address = signer.address();
        let wallet = EthereumWallet::from(signer);

        let url: url::Url = rpc_url
            .parse()
            .map_err(|e| ContractError::RpcConnection(format!("{}", e)))?;

        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(url)
            .erased();

        Ok(Self {
            provider,
            signer_address,
        })
    }

    /// The account every transaction is sent from.
    pub fn signer_address(&self) -> Address {
        self.signer_address
    }

    // ------------------------------------------------------------------
    // Market state
    // ------------------------------------------------------------------

    pub async fn total_borrows(&self, ctoken: Address) -> Result<U256> {
        let contract = ICToken::new(ctoken, &self.provider);
        contract
            .totalBorrows()
            .call()
            .await
            .map_err(failed("get total borrows"))
    }

    pub async fn cash(&self, ctoken: Address) -> Result<U256> {
        let contract = ICToken::new(ctoken, &self.provider);
        contract.getCash().call().await.map_err(failed("get cash"))
    }

    pub async fn total_reserves(&self, ctoken: Address) -> Result<U256> {
        let contract = ICToken::new(ctoken, &self.provider);
        contract
            .totalReserves()
            .call()
            .await
            .map_err(failed("get total reserves"))
    }

    pub async fn reserve_factor(&self, ctoken: Address) -> Result<U256> {
        let contract = ICToken::new(ctoken, &self.provider);
        contract
            .reserveFactorMantissa()
            .call()
            .await
            .map_err(failed("get reserve factor"))
    }

    pub async fn supply_rate_per_block(&self, ctoken: Address) -> Result<U256> {
        let contract = ICToken::new(ctoken, &self.provider);
        contract
            .supplyRatePerBlock()
            .call()
            .await
            .map_err(failed("get supply rate"))
    }

    /// Stored exchange rate, scaled by `1e18 * 10^(underlying - ctoken decimals)`.
    pub async fn exchange_rate_stored(&self, ctoken: Address) -> Result<U256> {
        let contract = ICToken::new(ctoken, &self.provider);
        contract
            .exchangeRateStored()
            .call()
            .await
            .map_err(failed("get exchange rate"))
    }

    /// Address of the interest rate model the market currently uses.
    pub async fn interest_rate_model(&self, ctoken: Address) -> Result<Address> {
        let contract = ICToken::new(ctoken, &self.provider);
        contract
            .interestRateModel()
            .call()
            .await
            .map_err(failed("get interest rate model"))
    }

    /// Address of the market's underlying asset.
    pub async fn underlying(&self, ctoken: Address) -> Result<Address> {
        let contract = ICToken::new(ctoken, &self.provider);
        contract
            .underlying()
            .call()
            .await
            .map_err(failed("get underlying"))
    }

    // ------------------------------------------------------------------
    // Interest rate model
    // ------------------------------------------------------------------

    pub async fn base_rate_per_block(&self, model: Address) -> Result<U256> {
        let contract = IInterestRateModel::new(model, &self.provider);
        contract
            .baseRatePerBlock()
            .call()
            .await
            .map_err(failed("get base rate"))
    }

    pub async fn multiplier_per_block(&self, model: Address) -> Result<U256> {
        let contract = IInterestRateModel::new(model, &self.provider);
        contract
            .multiplierPerBlock()
            .call()
            .await
            .map_err(failed("get multiplier"))
    }

    // ------------------------------------------------------------------
    // ERC-20
    // ------------------------------------------------------------------

    /// Get the balance of a token for an address.
    pub async fn balance_of(&self, token: Address, owner: Address) -> Result<U256> {
        let contract = IERC20::new(token, &self.provider);
        contract
            .balanceOf(owner)
            .call()
            .await
            .map_err(failed("get balance"))
    }

    /// Approve `spender` to pull `amount` of `token` from the signer.
    pub async fn approve(
        &self,
        token: Address,
        spender: Address,
        amount: U256,
    ) -> Result<TransactionReceipt> {
        let contract = IERC20::new(token, &self.provider);
        let accepted = contract
            .approve(spender, amount)
            .from(self.signer_address)
            .call()
            .await
            .map_err(failed("simulate approve"))?;
        if !accepted {
            return Err(ContractError::TransactionFailed(
                "approve returned false".to_string(),
            ));
        }

        let receipt = contract
            .approve(spender, amount)
            .send()
            .await
            .map_err(failed("send approve"))?
            .get_receipt()
            .await
            .map_err(failed("get approve receipt"))?;
        ensure_success("approve", receipt)
    }

    /// Transfer `amount` of `token` from the signer to `to`.
    pub async fn transfer(
        &self,
        token: Address,
        to: Address,
        amount: U256,
    ) -> Result<TransactionReceipt> {
        let contract = IERC20::new(token, &self.provider);
        let accepted = contract
            .transfer(to, amount)
            .from(self.signer_address)
            .call()
            .await
            .map_err(failed("simulate transfer"))?;
        if !accepted {
            return Err(ContractError::TransactionFailed(
                "transfer returned false".to_string(),
            ));
        }

        let receipt = contract
            .transfer(to, amount)
            .send()
            .await
            .map_err(failed("send transfer"))?
            .get_receipt()
            .await
            .map_err(failed("get transfer receipt"))?;
        ensure_success("transfer", receipt)
    }

    // ------------------------------------------------------------------
    // Market transactions
    // ------------------------------------------------------------------

    /// Supply `amount` of underlying to the market. The signer must have
    /// approved the market beforehand.
    pub async fn mint(&self, ctoken: Address, amount: U256) -> Result<TransactionReceipt> {
        let contract = ICToken::new(ctoken, &self.provider);
        let code = contract
            .mint(amount)
            .from(self.signer_address)
            .call()
            .await
            .map_err(failed("simulate mint"))?;
        if !code.is_zero() {
            return Err(ContractError::MarketRejected {
                operation: "mint",
                code,
            });
        }

        let receipt = contract
            .mint(amount)
            .send()
            .await
            .map_err(failed("send mint"))?
            .get_receipt()
            .await
            .map_err(failed("get mint receipt"))?;
        ensure_success("mint", receipt)
    }

    /// Redeem `shares` cTokens held by the signer for underlying.
    pub async fn redeem(&self, ctoken: Address, shares: U256) -> Result<TransactionReceipt> {
        let contract = ICToken::new(ctoken, &self.provider);
        let code = contract
            .redeem(shares)
            .from(self.signer_address)
            .call()
            .await
            .map_err(failed("simulate redeem"))?;
        if !code.is_zero() {
            return Err(ContractError::MarketRejected {
                operation: "redeem",
                code,
            });
        }

        let receipt = contract
            .redeem(shares)
            .send()
            .await
            .map_err(failed("send redeem"))?
            .get_receipt()
            .await
            .map_err(failed("get redeem receipt"))?;
        ensure_success("redeem", receipt)
    }
}
