//! Claim determination: protocol strategies and the scan engine

pub mod claimer;
pub mod merkle;
pub mod proof;
pub mod simple;

pub use claimer::{ClaimEngine, ScanResult};
pub use proof::resolve_claim;

use crate::domain::ClaimOutcome;

/// Verdict for one (target, airdrop) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairVerdict {
    /// A claim was submitted or, for the sentinel, reported dry
    Outcome(ClaimOutcome),
    /// Checked on chain; nothing to claim
    NoClaim,
    /// Not checked: invalid entry, missing proofs or unsupported type
    Skipped,
}
