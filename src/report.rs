//! Run report rendering

use alloy::primitives::Address;
use chrono::{DateTime, SecondsFormat, Utc};

use crate::domain::{ClaimOutcome, Settlement};

const HEADER_SCAN: &str = "🟦 ClawClaimAgent scan ✅";
const HEADER_HEARTBEAT: &str = "🟦 ClawClaimAgent heartbeat ✅";

/// Context printed at the top of every message
#[derive(Debug, Clone)]
pub struct RunMetadata {
    pub timestamp: DateTime<Utc>,
    pub agent: Address,
    pub network: String,
}

impl RunMetadata {
    pub fn now(agent: Address, network: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            agent,
            network: network.into(),
        }
    }

    fn header_lines(&self) -> String {
        format!(
            "Run: {}\nAgent: {}\nNetwork: {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true),
            self.agent,
            self.network
        )
    }
}

fn render_outcome(outcome: &ClaimOutcome) -> String {
    let kind = match outcome.settlement {
        Settlement::Dry => format!("{} (dry)", outcome.protocol),
        Settlement::Submitted(_) => outcome.protocol.to_string(),
    };
    let tail = match outcome.settlement {
        Settlement::Submitted(hash) => format!("Tx: {}", hash),
        Settlement::Dry => "Note: contract=0x0, not broadcasting".to_string(),
    };

    format!(
        "• Airdrop: {} ({})\n  Type: {}\n  Target: {}\n  Amount: {}\n  {}",
        outcome.airdrop_name, outcome.token_symbol, kind, outcome.target, outcome.amount, tail
    )
}

/// Full report for a run with at least one outcome
pub fn render_findings(meta: &RunMetadata, outcomes: &[ClaimOutcome]) -> String {
    let blocks: Vec<String> = outcomes.iter().map(render_outcome).collect();
    format!(
        "{}\n{}\n\nFindings ({}):\n{}",
        HEADER_SCAN,
        meta.header_lines(),
        outcomes.len(),
        blocks.join("\n")
    )
}

/// Heartbeat for a run that found nothing after a claimable run
pub fn render_heartbeat(meta: &RunMetadata) -> String {
    format!(
        "{}\n{}\nStatus: nothing claimable",
        HEADER_HEARTBEAT,
        meta.header_lines()
    )
}
