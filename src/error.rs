use thiserror::Error;

/// Main error type for the airdrop scanner
#[derive(Error, Debug)]
pub enum ClawError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Network errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Chain errors (reads and submissions)
    #[error("Chain client error: {0}")]
    Chain(String),

    // Input errors
    #[error("Registry error: {0}")]
    Registry(String),

    #[error("Proof dataset error: {0}")]
    ProofDataset(String),

    // Output errors
    #[error("Notification failed: {0}")]
    Notification(String),

    #[error("State store error: {0}")]
    StateStore(String),

    // Crypto/signing errors
    #[error("Wallet error: {0}")]
    Wallet(String),

    // Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl ClawError {
    /// Whether this error must abort the whole run.
    ///
    /// Proof dataset and notification failures are handled where they occur;
    /// everything else unwinds to the top level.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ClawError::ProofDataset(_) | ClawError::Notification(_)
        )
    }
}

/// Result type alias for ClawError
pub type Result<T> = std::result::Result<T, ClawError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(ClawError::Chain("rpc down".into()).is_fatal());
        assert!(ClawError::Registry("bad json".into()).is_fatal());
        assert!(ClawError::StateStore("disk full".into()).is_fatal());
        assert!(!ClawError::ProofDataset("missing".into()).is_fatal());
        assert!(!ClawError::Notification("HTTP 500".into()).is_fatal());
    }

    #[test]
    fn test_error_display_includes_context() {
        let err = ClawError::Chain("claimable() reverted".into());
        assert_eq!(err.to_string(), "Chain client error: claimable() reverted");
    }
}
