//! Claim determination engine
//!
//! Walks every (target, airdrop) pair in registry order, validates the contract,
//! dispatches to the protocol strategy and collects outcomes. Strictly sequential:
//! all submissions come from one signing account with no nonce coordination.

use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use super::{merkle, simple, PairVerdict};
use crate::adapters::ChainClient;
use crate::domain::{AirdropDefinition, ClaimOutcome, ProofDataset, ProtocolType, Target};
use crate::error::Result;
use crate::registry::ProofLoader;

/// Result of one scan over all pairs
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    /// Outcomes in target-major, airdrop-minor order
    pub outcomes: Vec<ClaimOutcome>,
    /// Pairs skipped for recoverable reasons
    pub skipped: usize,
}

impl ScanResult {
    pub fn actions(&self) -> usize {
        self.outcomes.len()
    }
}

/// Proof datasets loaded during one run, keyed by reference.
/// A failed load is remembered as `None`.
#[derive(Default)]
struct ProofCache {
    datasets: HashMap<String, Option<Arc<ProofDataset>>>,
}

/// Claim engine over injected chain and proof capabilities
pub struct ClaimEngine {
    chain: Arc<dyn ChainClient>,
    proofs: Arc<dyn ProofLoader>,
}

impl ClaimEngine {
    pub fn new(chain: Arc<dyn ChainClient>, proofs: Arc<dyn ProofLoader>) -> Self {
        Self { chain, proofs }
    }

    /// Scan all pairs. The first chain error aborts the scan.
    pub async fn scan(
        &self,
        targets: &[Target],
        airdrops: &[AirdropDefinition],
    ) -> Result<ScanResult> {
        info!(
            "Scanning {} target(s) x {} airdrop(s)",
            targets.len(),
            airdrops.len()
        );

        let mut cache = ProofCache::default();
        let mut result = ScanResult::default();

        for target in targets {
            for drop in airdrops {
                match self.check_pair(target, drop, &mut cache).await? {
                    PairVerdict::Outcome(outcome) => result.outcomes.push(outcome),
                    PairVerdict::NoClaim => {}
                    PairVerdict::Skipped => result.skipped += 1,
                }
            }
        }

        info!(
            "Scan complete: {} action(s), {} skipped",
            result.actions(),
            result.skipped
        );
        Ok(result)
    }

    async fn check_pair(
        &self,
        target: &Target,
        drop: &AirdropDefinition,
        cache: &mut ProofCache,
    ) -> Result<PairVerdict> {
        let Some(contract) = drop.contract_address() else {
            info!("[{}] Skipping: invalid contract address", drop.id);
            return Ok(PairVerdict::Skipped);
        };

        match &drop.protocol {
            ProtocolType::Simple => {
                simple::check_and_claim(self.chain.as_ref(), drop, contract, target).await
            }
            ProtocolType::Merkle => {
                let Some(dataset) = self.dataset_for(drop, cache).await else {
                    info!("[{}] No proofs/claims found, skipping {}", drop.id, target);
                    return Ok(PairVerdict::Skipped);
                };
                merkle::check_and_claim(self.chain.as_ref(), drop, contract, target, &dataset)
                    .await
            }
            ProtocolType::Unsupported(kind) => {
                warn!(
                    "[{}] Skipping {}: unsupported airdrop type '{}'",
                    drop.id, target, kind
                );
                Ok(PairVerdict::Skipped)
            }
        }
    }

    async fn dataset_for(
        &self,
        drop: &AirdropDefinition,
        cache: &mut ProofCache,
    ) -> Option<Arc<ProofDataset>> {
        let reference = drop.proofs.as_deref()?;

        if let Some(cached) = cache.datasets.get(reference) {
            return cached.clone();
        }

        let loaded = match self.proofs.load(reference).await {
            Ok(dataset) => {
                debug!(
                    "[{}] Loaded {} merkle claim(s) from {}",
                    drop.id,
                    dataset.claims.len(),
                    reference
                );
                Some(Arc::new(dataset))
            }
            Err(e) => {
                warn!("[{}] Failed to read proofs {}: {}", drop.id, reference, e);
                None
            }
        };
        cache
            .datasets
            .insert(reference.to_string(), loaded.clone());
        loaded
    }
}
