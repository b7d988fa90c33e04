//! Simple claim protocol: `claimable(address)` then `claimReward()`

use alloy::primitives::{Address, U256};
use tracing::{info, warn};

use super::PairVerdict;
use crate::adapters::ChainClient;
use crate::domain::{AirdropDefinition, ClaimOutcome, Settlement, Target, DRY_RUN_SENTINEL};
use crate::error::Result;

/// Check and claim one simple airdrop for one target.
///
/// Chain errors are returned as is and abort the run.
pub async fn check_and_claim(
    chain: &dyn ChainClient,
    drop: &AirdropDefinition,
    contract: Address,
    target: &Target,
) -> Result<PairVerdict> {
    // Nothing to read at the sentinel and nothing may be sent to it.
    if contract == DRY_RUN_SENTINEL {
        warn!(
            "[{}] Skipping simple airdrop for {}: contract is 0x0",
            drop.id, target
        );
        return Ok(PairVerdict::Skipped);
    }

    let amount = chain.read_claimable(contract, target.address).await?;
    if amount == U256::ZERO {
        info!("[{}] No claim for {}", drop.id, target);
        return Ok(PairVerdict::NoClaim);
    }

    info!("[{}] Claiming for {} amount {}", drop.id, target, amount);
    let tx_hash = chain.submit_simple_claim(contract).await?;
    info!("[{}] Tx: {}", drop.id, tx_hash);

    Ok(PairVerdict::Outcome(ClaimOutcome::new(
        drop,
        target,
        amount,
        Settlement::Submitted(tx_hash),
    )))
}
