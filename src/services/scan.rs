//! One scheduled scan: engine, status transition and notification gating

use alloy::primitives::Address;
use std::sync::Arc;
use tracing::{info, warn};

use crate::adapters::{ChainClient, Notifier};
use crate::domain::{AirdropDefinition, NotifyDecision, RunStatus, Target};
use crate::error::Result;
use crate::persistence::{StatusStore, StatusTracker};
use crate::registry::ProofLoader;
use crate::report::{render_findings, render_heartbeat, RunMetadata};
use crate::strategy::{ClaimEngine, ScanResult};

/// Summary of a completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub previous: RunStatus,
    pub current: RunStatus,
    pub scan: ScanResult,
    pub decision: NotifyDecision,
    /// Message rendered for the decision, if any
    pub message: Option<String>,
    /// Whether the message reached the notifier
    pub delivered: bool,
}

pub struct ScanService {
    engine: ClaimEngine,
    tracker: StatusTracker,
    notifier: Option<Arc<dyn Notifier>>,
    agent: Address,
    network: String,
}

impl ScanService {
    pub fn new(
        chain: Arc<dyn ChainClient>,
        proofs: Arc<dyn ProofLoader>,
        store: Arc<dyn StatusStore>,
        notifier: Option<Arc<dyn Notifier>>,
        network: impl Into<String>,
    ) -> Self {
        let agent = chain.account();
        Self {
            engine: ClaimEngine::new(chain, proofs),
            tracker: StatusTracker::new(store),
            notifier,
            agent,
            network: network.into(),
        }
    }

    /// Run one scan.
    ///
    /// Engine errors propagate before the status is touched. Notifier failures
    /// are logged and never fail the run.
    pub async fn run_once(
        &self,
        targets: &[Target],
        airdrops: &[AirdropDefinition],
    ) -> Result<RunReport> {
        let meta = RunMetadata::now(self.agent, self.network.clone());
        let previous = self.tracker.load().await;

        let scan = self.engine.scan(targets, airdrops).await?;

        let actions = scan.actions();
        let current = RunStatus::after_run(actions);
        self.tracker.persist(previous, current).await?;

        let decision = NotifyDecision::decide(previous, actions);
        let message = match decision {
            NotifyDecision::Findings => Some(render_findings(&meta, &scan.outcomes)),
            NotifyDecision::Heartbeat => Some(render_heartbeat(&meta)),
            NotifyDecision::Silent => {
                info!(
                    "No heartbeat posted (status unchanged: {} -> {})",
                    previous, current
                );
                None
            }
        };

        let delivered = match &message {
            Some(text) => self.deliver(text).await,
            None => false,
        };

        Ok(RunReport {
            previous,
            current,
            scan,
            decision,
            message,
            delivered,
        })
    }

    async fn deliver(&self, text: &str) -> bool {
        let Some(notifier) = &self.notifier else {
            info!("Skipping post (no notifier configured)");
            return false;
        };

        match notifier.post_message(text).await {
            Ok(()) => {
                info!("Run report posted to {}", notifier.channel());
                true
            }
            Err(e) => {
                warn!("{} post failed: {}", notifier.channel(), e);
                false
            }
        }
    }
}
