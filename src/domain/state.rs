use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Run-level status persisted between scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// The last run produced at least one outcome
    Claimable,
    /// The last run produced nothing
    NoClaim,
    /// No prior record
    #[default]
    Unknown,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Claimable => "claimable",
            RunStatus::NoClaim => "no_claim",
            RunStatus::Unknown => "unknown",
        }
    }

    /// Next status given the number of outcomes produced by this run.
    ///
    /// The previous status does not influence the next one; it only gates notification.
    pub fn after_run(actions: usize) -> Self {
        if actions > 0 {
            RunStatus::Claimable
        } else {
            RunStatus::NoClaim
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RunStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "claimable" => Ok(RunStatus::Claimable),
            "no_claim" => Ok(RunStatus::NoClaim),
            "unknown" => Ok(RunStatus::Unknown),
            other => Err(format!("unknown run status '{}'", other)),
        }
    }
}

/// What the caller should post after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyDecision {
    /// Post the full findings report
    Findings,
    /// Post a heartbeat with no findings
    Heartbeat,
    /// Post nothing
    Silent,
}

impl NotifyDecision {
    pub fn decide(previous: RunStatus, actions: usize) -> Self {
        if actions > 0 {
            NotifyDecision::Findings
        } else if previous == RunStatus::Claimable {
            NotifyDecision::Heartbeat
        } else {
            NotifyDecision::Silent
        }
    }
}
