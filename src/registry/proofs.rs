use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::domain::ProofDataset;
use crate::error::{ClawError, Result};

/// Source of merkle proof datasets
#[async_trait]
pub trait ProofLoader: Send + Sync {
    /// Load the dataset named by an airdrop's `proofs` reference.
    ///
    /// Any failure is a [`ClawError::ProofDataset`]; callers treat it as "absent".
    async fn load(&self, reference: &str) -> Result<ProofDataset>;
}

/// Loads datasets from JSON files, relative references resolved against `root`
#[derive(Debug, Clone, Default)]
pub struct FileProofLoader {
    root: Option<PathBuf>,
}

impl FileProofLoader {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    fn resolve(&self, reference: &str) -> PathBuf {
        let path = Path::new(reference);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

#[async_trait]
impl ProofLoader for FileProofLoader {
    async fn load(&self, reference: &str) -> Result<ProofDataset> {
        let path = self.resolve(reference);
        let raw = tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| ClawError::ProofDataset(format!("{}: {}", path.display(), e)))?;
        parse_dataset(&raw).map_err(|e| match e {
            ClawError::ProofDataset(msg) => {
                ClawError::ProofDataset(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })
    }
}

/// Parse a dataset document; a document without `claims` is rejected.
pub fn parse_dataset(raw: &str) -> Result<ProofDataset> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| ClawError::ProofDataset(e.to_string()))?;
    if !value.get("claims").is_some_and(|c| c.is_object()) {
        return Err(ClawError::ProofDataset("no claims found".to_string()));
    }
    serde_json::from_value(value).map_err(|e| ClawError::ProofDataset(e.to_string()))
}
