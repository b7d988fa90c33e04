//! Durable key-value stores for run state

use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::{ClawError, Result};

/// Minimal durable key-value store
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Read a key; `Ok(None)` when no record exists
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a key, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// JSON object file written atomically (temp file + rename)
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_object(&self) -> Result<Option<Map<String, Value>>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ClawError::StateStore(format!(
                    "{}: {}",
                    self.path.display(),
                    e
                )))
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(_) => Err(ClawError::StateStore(format!(
                "{}: expected a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(ClawError::StateStore(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[async_trait]
impl StatusStore for JsonFileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let Some(map) = self.read_object().await? else {
            return Ok(None);
        };
        Ok(map.get(key).and_then(|v| v.as_str()).map(ToString::to_string))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = match self.read_object().await {
            Ok(existing) => existing.unwrap_or_default(),
            Err(e) => {
                warn!("Replacing unreadable state file: {}", e);
                Map::new()
            }
        };
        map.insert(key.to_string(), Value::String(value.to_string()));

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let body = serde_json::to_string_pretty(&Value::Object(map))?;
        let tmp = self
            .path
            .with_extension(format!("{}.tmp", uuid::Uuid::new_v4().simple()));
        tokio::fs::write(&tmp, body).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(ClawError::StateStore(format!(
                "{}: {}",
                self.path.display(),
                e
            )));
        }

        debug!("State {}={} written to {}", key, value, self.path.display());
        Ok(())
    }
}

/// In-process store, for tests and one-off runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = HashMap::new();
        values.insert(key.to_string(), value.to_string());
        Self {
            values: RwLock::new(values),
        }
    }
}

#[async_trait]
impl StatusStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
