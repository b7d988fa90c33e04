//! Merkle-distributed claim protocol: `isClaimed(index)` then
//! `claim(index, account, amount, proof)`

use alloy::primitives::Address;
use tracing::info;

use super::proof::resolve_claim;
use super::PairVerdict;
use crate::adapters::ChainClient;
use crate::domain::{
    AirdropDefinition, ClaimOutcome, ProofDataset, Settlement, Target, DRY_RUN_SENTINEL,
};
use crate::error::Result;

/// Check and claim one merkle airdrop for one target.
///
/// A sentinel contract always yields a dry outcome and never touches the chain,
/// on every run. Chain errors are returned as is and abort the run.
pub async fn check_and_claim(
    chain: &dyn ChainClient,
    drop: &AirdropDefinition,
    contract: Address,
    target: &Target,
    dataset: &ProofDataset,
) -> Result<PairVerdict> {
    let Some(entry) = resolve_claim(dataset, target) else {
        info!("[{}] No merkle entry for {}", drop.id, target);
        return Ok(PairVerdict::Skipped);
    };

    if contract == DRY_RUN_SENTINEL {
        info!(
            "[{}] Found merkle claim for {} amount {} (DRY: contract is 0x0)",
            drop.id, target, entry.amount
        );
        return Ok(PairVerdict::Outcome(ClaimOutcome::new(
            drop,
            target,
            entry.amount,
            Settlement::Dry,
        )));
    }

    if chain.read_is_claimed(contract, entry.index).await? {
        info!(
            "[{}] Already claimed index {} for {}",
            drop.id, entry.index, target
        );
        return Ok(PairVerdict::NoClaim);
    }

    info!(
        "[{}] Claiming merkle for {} amount {}",
        drop.id, target, entry.amount
    );
    let tx_hash = chain
        .submit_merkle_claim(
            contract,
            entry.index,
            target.address,
            entry.amount,
            &entry.proof,
        )
        .await?;
    info!("[{}] Tx: {}", drop.id, tx_hash);

    Ok(PairVerdict::Outcome(ClaimOutcome::new(
        drop,
        target,
        entry.amount,
        Settlement::Submitted(tx_hash),
    )))
}
