//! Recording doubles for the chain, proof and notifier seams
#![allow(dead_code)]

use alloy::primitives::{Address, TxHash, B256, U256};
use async_trait::async_trait;
use clawclaim::adapters::{ChainClient, Notifier};
use clawclaim::domain::{AirdropDefinition, MerkleClaimEntry, ProofDataset, ProtocolType, Target};
use clawclaim::error::{ClawError, Result};
use clawclaim::registry::ProofLoader;
use std::collections::HashMap;
use std::sync::Mutex;

pub const AGENT: Address = Address::new([0x42; 20]);
pub const SIMPLE_CONTRACT: &str = "0x1111111111111111111111111111111111111111";
pub const MERKLE_CONTRACT: &str = "0x2222222222222222222222222222222222222222";
pub const ZERO_CONTRACT: &str = "0x0000000000000000000000000000000000000000";
pub const TARGET_A: &str = "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
pub const TARGET_B: &str = "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainCall {
    ReadClaimable { contract: Address, target: Address },
    SubmitSimple { contract: Address },
    ReadIsClaimed { contract: Address, index: U256 },
    SubmitMerkle { contract: Address, index: U256, target: Address, amount: U256, proof: Vec<B256> },
}

impl ChainCall {
    pub fn is_write(&self) -> bool {
        matches!(self, ChainCall::SubmitSimple { .. } | ChainCall::SubmitMerkle { .. })
    }
}

/// Chain double with scripted answers and a call log
#[derive(Default)]
pub struct RecordingChain {
    pub claimable: HashMap<(Address, Address), U256>,
    pub claimed: HashMap<(Address, U256), bool>,
    pub fail_reads: bool,
    pub fail_writes: bool,
    calls: Mutex<Vec<ChainCall>>,
    next_tx: Mutex<u8>,
}

impl RecordingChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_claimable(mut self, contract: &str, target: &str, amount: u64) -> Self {
        self.claimable
            .insert((addr(contract), addr(target)), U256::from(amount));
        self
    }

    pub fn with_claimed(mut self, contract: &str, index: u64) -> Self {
        self.claimed.insert((addr(contract), U256::from(index)), true);
        self
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<ChainCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<ChainCall> {
        self.calls().into_iter().filter(ChainCall::is_write).collect()
    }

    fn record(&self, call: ChainCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_hash(&self) -> TxHash {
        let mut next = self.next_tx.lock().unwrap();
        *next += 1;
        TxHash::repeat_byte(*next)
    }
}

#[async_trait]
impl ChainClient for RecordingChain {
    fn account(&self) -> Address {
        AGENT
    }

    async fn read_claimable(&self, contract: Address, target: Address) -> Result<U256> {
        self.record(ChainCall::ReadClaimable { contract, target });
        if self.fail_reads {
            return Err(ClawError::Chain("rpc unavailable".into()));
        }
        Ok(self
            .claimable
            .get(&(contract, target))
            .copied()
            .unwrap_or(U256::ZERO))
    }

    async fn submit_simple_claim(&self, contract: Address) -> Result<TxHash> {
        self.record(ChainCall::SubmitSimple { contract });
        if self.fail_writes {
            return Err(ClawError::Chain("nonce too low".into()));
        }
        Ok(self.next_hash())
    }

    async fn read_is_claimed(&self, contract: Address, index: U256) -> Result<bool> {
        self.record(ChainCall::ReadIsClaimed { contract, index });
        if self.fail_reads {
            return Err(ClawError::Chain("rpc unavailable".into()));
        }
        Ok(self.claimed.get(&(contract, index)).copied().unwrap_or(false))
    }

    async fn submit_merkle_claim(
        &self,
        contract: Address,
        index: U256,
        target: Address,
        amount: U256,
        proof: &[B256],
    ) -> Result<TxHash> {
        self.record(ChainCall::SubmitMerkle {
            contract,
            index,
            target,
            amount,
            proof: proof.to_vec(),
        });
        if self.fail_writes {
            return Err(ClawError::Chain("execution reverted".into()));
        }
        Ok(self.next_hash())
    }
}

/// Proof datasets held in memory, keyed by reference
#[derive(Default)]
pub struct MapProofLoader {
    pub datasets: HashMap<String, ProofDataset>,
}

impl MapProofLoader {
    pub fn with_entry(mut self, reference: &str, key: &str, index: u64, amount: u64) -> Self {
        self.datasets
            .entry(reference.to_string())
            .or_default()
            .claims
            .insert(
                key.to_string(),
                MerkleClaimEntry {
                    index: U256::from(index),
                    amount: U256::from(amount),
                    proof: vec![B256::repeat_byte(0xee)],
                },
            );
        self
    }
}

#[async_trait]
impl ProofLoader for MapProofLoader {
    async fn load(&self, reference: &str) -> Result<ProofDataset> {
        self.datasets
            .get(reference)
            .cloned()
            .ok_or_else(|| ClawError::ProofDataset(format!("{} not found", reference)))
    }
}

/// Notifier double that records every message
#[derive(Default)]
pub struct RecordingNotifier {
    pub fail: bool,
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn channel(&self) -> &'static str {
        "recording"
    }

    async fn post_message(&self, text: &str) -> Result<()> {
        self.messages.lock().unwrap().push(text.to_string());
        if self.fail {
            return Err(ClawError::Notification("HTTP 500".into()));
        }
        Ok(())
    }
}

pub fn addr(raw: &str) -> Address {
    raw.parse().unwrap()
}

pub fn target(raw: &str) -> Target {
    Target::parse(raw).unwrap()
}

pub fn simple_drop(id: &str, contract: &str) -> AirdropDefinition {
    AirdropDefinition {
        id: id.into(),
        name: format!("{} drop", id),
        token_symbol: id.to_uppercase(),
        contract: contract.into(),
        protocol: ProtocolType::Simple,
        proofs: None,
    }
}

pub fn merkle_drop(id: &str, contract: &str, proofs: &str) -> AirdropDefinition {
    AirdropDefinition {
        id: id.into(),
        name: format!("{} drop", id),
        token_symbol: id.to_uppercase(),
        contract: contract.into(),
        protocol: ProtocolType::Merkle,
        proofs: Some(proofs.into()),
    }
}
