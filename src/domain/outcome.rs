use alloy::primitives::{TxHash, U256};

use super::airdrop::{AirdropDefinition, ProtocolType, Target};

/// How a claim outcome was settled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// A claim transaction was broadcast
    Submitted(TxHash),
    /// Reported only; the contract is the zero-address sentinel
    Dry,
}

impl Settlement {
    pub fn is_dry(&self) -> bool {
        matches!(self, Settlement::Dry)
    }

    pub fn tx_hash(&self) -> Option<TxHash> {
        match self {
            Settlement::Submitted(hash) => Some(*hash),
            Settlement::Dry => None,
        }
    }
}

/// One positive claim determination for a (target, airdrop) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimOutcome {
    pub airdrop_id: String,
    pub airdrop_name: String,
    pub token_symbol: String,
    pub target: String,
    pub protocol: ProtocolType,
    pub amount: U256,
    pub settlement: Settlement,
}

impl ClaimOutcome {
    pub fn new(
        drop: &AirdropDefinition,
        target: &Target,
        amount: U256,
        settlement: Settlement,
    ) -> Self {
        Self {
            airdrop_id: drop.id.clone(),
            airdrop_name: drop.name.clone(),
            token_symbol: drop.token_symbol.clone(),
            target: target.raw.clone(),
            protocol: drop.protocol.clone(),
            amount,
            settlement,
        }
    }
}
