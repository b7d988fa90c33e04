//! Input registries
//!
//! - User registry: `{ "users": { "<address>": <metadata> } }`
//! - Airdrop registry: `{ "airdrops": [ { id, name, tokenSymbol, contract, type, proofs? } ] }`
//! - Proof datasets: `{ "claims": { "<address>": { index, amount, proof } } }`, see [`proofs`]

pub mod proofs;

use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::domain::{AirdropDefinition, Target};
use crate::error::{ClawError, Result};

pub use proofs::{FileProofLoader, ProofLoader};

/// Scan targets keyed by address; metadata is carried but unused
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRegistry {
    #[serde(default)]
    pub users: serde_json::Map<String, serde_json::Value>,
}

impl UserRegistry {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| ClawError::Registry(format!("users: {}", e)))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = read_registry(path.as_ref()).await?;
        Self::from_json(&raw)
    }

    /// Targets in registry order. Keys that are not addresses are dropped with a warning.
    pub fn targets(&self) -> Vec<Target> {
        self.users
            .keys()
            .filter_map(|key| {
                let target = Target::parse(key);
                if target.is_none() {
                    warn!("Skipping user {}: not a valid address", key);
                }
                target
            })
            .collect()
    }
}

/// Airdrop definitions in registry order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AirdropRegistry {
    #[serde(default)]
    pub airdrops: Vec<AirdropDefinition>,
}

impl AirdropRegistry {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| ClawError::Registry(format!("airdrops: {}", e)))
    }

    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = read_registry(path.as_ref()).await?;
        let registry = Self::from_json(&raw)?;
        debug!(
            "Loaded {} airdrop(s) from {}",
            registry.airdrops.len(),
            path.as_ref().display()
        );
        Ok(registry)
    }
}

async fn read_registry(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ClawError::Registry(format!("{}: {}", path.display(), e)))
}
