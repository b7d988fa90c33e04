//! Chain client for airdrop contracts
//!
//! The engine only sees the [`ChainClient`] trait. [`AlloyChainClient`] is the
//! production implementation: one HTTP provider with one local signing wallet.

use alloy::network::EthereumWallet;
use alloy::primitives::{Address, TxHash, B256, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use alloy::sol;
use async_trait::async_trait;
use tracing::{debug, info};
use zeroize::Zeroize;

use crate::error::{ClawError, Result};

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface ISimpleAirdrop {
        /// Amount currently claimable by an account
        function claimable(address account) external view returns (uint256);

        /// Claim the caller's reward
        function claimReward() external;
    }
}

sol! {
    #[allow(missing_docs)]
    #[sol(rpc)]
    interface IMerkleDistributor {
        /// Whether the claim at `index` has been taken
        function isClaimed(uint256 index) external view returns (bool);

        /// Claim `amount` for `account` with a merkle proof
        function claim(
            uint256 index,
            address account,
            uint256 amount,
            bytes32[] calldata merkleProof
        ) external;
    }
}

/// Read/write capability over airdrop contracts.
///
/// Every call is a suspension point; callers await each one before issuing the next.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Account that signs submissions
    fn account(&self) -> Address;

    async fn read_claimable(&self, contract: Address, target: Address) -> Result<U256>;

    async fn submit_simple_claim(&self, contract: Address) -> Result<TxHash>;

    async fn read_is_claimed(&self, contract: Address, index: U256) -> Result<bool>;

    async fn submit_merkle_claim(
        &self,
        contract: Address,
        index: U256,
        target: Address,
        amount: U256,
        proof: &[B256],
    ) -> Result<TxHash>;
}

/// Alloy-backed chain client
pub struct AlloyChainClient {
    provider: DynProvider,
    account: Address,
}

impl AlloyChainClient {
    /// Connect to `rpc_url` with a wallet built from `private_key`.
    ///
    /// The key string is zeroized before returning.
    pub fn connect(rpc_url: &str, mut private_key: String) -> Result<Self> {
        let parsed = private_key
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|e| ClawError::Wallet(format!("Invalid private key: {}", e)));
        private_key.zeroize();
        let signer = parsed?;

        let account = signer.address();
        let wallet = EthereumWallet::from(signer);

        let url = rpc_url
            .parse()
            .map_err(|e| ClawError::Validation(format!("Invalid RPC URL: {}", e)))?;
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(url)
            .erased();

        info!("Chain client ready (account {})", account);

        Ok(Self { provider, account })
    }
}

#[async_trait]
impl ChainClient for AlloyChainClient {
    fn account(&self) -> Address {
        self.account
    }

    async fn read_claimable(&self, contract: Address, target: Address) -> Result<U256> {
        let airdrop = ISimpleAirdrop::new(contract, self.provider.clone());
        let amount = airdrop.claimable(target).call().await.map_err(|e| {
            ClawError::Chain(format!("claimable({}) on {} failed: {}", target, contract, e))
        })?;

        debug!("claimable({}) on {} = {}", target, contract, amount);
        Ok(amount)
    }

    async fn submit_simple_claim(&self, contract: Address) -> Result<TxHash> {
        let airdrop = ISimpleAirdrop::new(contract, self.provider.clone());
        let pending = airdrop
            .claimReward()
            .send()
            .await
            .map_err(|e| ClawError::Chain(format!("claimReward() on {} failed: {}", contract, e)))?;

        Ok(*pending.tx_hash())
    }

    async fn read_is_claimed(&self, contract: Address, index: U256) -> Result<bool> {
        let distributor = IMerkleDistributor::new(contract, self.provider.clone());
        let claimed = distributor.isClaimed(index).call().await.map_err(|e| {
            ClawError::Chain(format!("isClaimed({}) on {} failed: {}", index, contract, e))
        })?;

        debug!("isClaimed({}) on {} = {}", index, contract, claimed);
        Ok(claimed)
    }

    async fn submit_merkle_claim(
        &self,
        contract: Address,
        index: U256,
        target: Address,
        amount: U256,
        proof: &[B256],
    ) -> Result<TxHash> {
        let distributor = IMerkleDistributor::new(contract, self.provider.clone());
        let pending = distributor
            .claim(index, target, amount, proof.to_vec())
            .send()
            .await
            .map_err(|e| {
                ClawError::Chain(format!(
                    "claim({}, {}) on {} failed: {}",
                    index, target, contract, e
                ))
            })?;

        Ok(*pending.tx_hash())
    }
}
