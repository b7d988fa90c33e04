//! Merkle proof lookup

use crate::domain::{MerkleClaimEntry, ProofDataset, Target};

/// Find the claim entry for `target`.
///
/// Tries the registry key exactly as written, then its lowercase form.
pub fn resolve_claim<'a>(dataset: &'a ProofDataset, target: &Target) -> Option<&'a MerkleClaimEntry> {
    dataset
        .claims
        .get(&target.raw)
        .or_else(|| dataset.claims.get(&target.raw.to_lowercase()))
}
