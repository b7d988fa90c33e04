//! Run status tracker
//!
//! Reads the previous run status once at start and writes the new one once at end.

use std::sync::Arc;
use tracing::{info, warn};

use super::store::StatusStore;
use crate::domain::RunStatus;
use crate::error::Result;

pub const STATUS_KEY: &str = "lastStatus";

pub struct StatusTracker {
    store: Arc<dyn StatusStore>,
}

impl StatusTracker {
    pub fn new(store: Arc<dyn StatusStore>) -> Self {
        Self { store }
    }

    /// Previous status. Missing, unreadable or unrecognised records read as `Unknown`.
    pub async fn load(&self) -> RunStatus {
        match self.store.get(STATUS_KEY).await {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                warn!("Ignoring stored status: {}", e);
                RunStatus::Unknown
            }),
            Ok(None) => RunStatus::Unknown,
            Err(e) => {
                warn!("Could not read run status, assuming unknown: {}", e);
                RunStatus::Unknown
            }
        }
    }

    /// Persist `status`, overwriting the previous record.
    pub async fn persist(&self, previous: RunStatus, status: RunStatus) -> Result<()> {
        self.store.set(STATUS_KEY, status.as_str()).await?;
        info!("Run status {} -> {}", previous, status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[tokio::test]
    async fn test_load_defaults_to_unknown() {
        let tracker = StatusTracker::new(Arc::new(MemoryStore::new()));
        assert_eq!(tracker.load().await, RunStatus::Unknown);
    }

    #[tokio::test]
    async fn test_load_ignores_garbage() {
        let tracker = StatusTracker::new(Arc::new(MemoryStore::with_value(STATUS_KEY, "maybe")));
        assert_eq!(tracker.load().await, RunStatus::Unknown);
    }

    #[tokio::test]
    async fn test_persist_overwrites() {
        let store = Arc::new(MemoryStore::with_value(STATUS_KEY, "claimable"));
        let tracker = StatusTracker::new(store.clone());

        assert_eq!(tracker.load().await, RunStatus::Claimable);
        tracker
            .persist(RunStatus::Claimable, RunStatus::NoClaim)
            .await
            .unwrap();
        assert_eq!(tracker.load().await, RunStatus::NoClaim);
        assert_eq!(
            store.get(STATUS_KEY).await.unwrap().as_deref(),
            Some("no_claim")
        );
    }
}
