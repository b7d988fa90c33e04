use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::adapters::NEYNAR_CAST_URL;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub chain: ChainConfig,
    pub registry: RegistryConfig,
    pub state: StateConfig,
    #[serde(default)]
    pub notifier: NotifierConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    /// JSON-RPC endpoint used for reads and submissions
    #[serde(default)]
    pub rpc_url: String,
    /// Network name printed in reports
    pub network_label: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// User registry (`{ "users": { ... } }`)
    pub users_path: PathBuf,
    /// Airdrop registry (`{ "airdrops": [ ... ] }`)
    pub airdrops_path: PathBuf,
    /// Base directory for relative proof references (default: working directory)
    #[serde(default)]
    pub proofs_root: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StateConfig {
    /// File holding the persisted run status
    pub status_path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotifierConfig {
    #[serde(default)]
    pub neynar_api_key: Option<String>,
    #[serde(default)]
    pub neynar_signer_uuid: Option<String>,
    #[serde(default = "default_neynar_url")]
    pub neynar_url: String,
    /// Post to a Feishu webhook instead of Farcaster
    #[serde(default)]
    pub feishu_webhook_url: Option<String>,
}

fn default_neynar_url() -> String {
    NEYNAR_CAST_URL.to_string()
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            neynar_api_key: None,
            neynar_signer_uuid: None,
            neynar_url: default_neynar_url(),
            feishu_webhook_url: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("chain.network_label", "Base Sepolia")?
            .set_default("registry.users_path", "state/users.json")?
            .set_default("registry.airdrops_path", "airdrops/base-sepolia.json")?
            .set_default("state.status_path", "state/status.json")?
            .set_default("notifier.neynar_url", NEYNAR_CAST_URL)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("CLAW_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (CLAW_CHAIN__RPC_URL, etc.)
            .add_source(
                Environment::with_prefix("CLAW")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_legacy_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Fill gaps from the plain variables used by earlier deployments.
    fn apply_legacy_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if self.chain.rpc_url.trim().is_empty() {
            if let Some(rpc) = lookup("BASE_SEPOLIA_RPC") {
                self.chain.rpc_url = rpc;
            }
        }

        let notifier = &mut self.notifier;
        fill_blank(&mut notifier.neynar_api_key, || lookup("NEYNAR_API_KEY"));
        fill_blank(&mut notifier.neynar_signer_uuid, || lookup("NEYNAR_SIGNER_UUID"));
        fill_blank(&mut notifier.feishu_webhook_url, || lookup("FEISHU_WEBHOOK_URL"));
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.chain.rpc_url.trim().is_empty() {
            errors.push(
                "chain.rpc_url is not set (CLAW_CHAIN__RPC_URL or BASE_SEPOLIA_RPC)".to_string(),
            );
        } else if !self.chain.rpc_url.starts_with("http://")
            && !self.chain.rpc_url.starts_with("https://")
        {
            errors.push(format!(
                "chain.rpc_url must be an http(s) URL, got {}",
                self.chain.rpc_url
            ));
        }

        if self.chain.network_label.trim().is_empty() {
            errors.push("chain.network_label must not be empty".to_string());
        }

        if self.registry.users_path.as_os_str().is_empty() {
            errors.push("registry.users_path must not be empty".to_string());
        }

        if self.registry.airdrops_path.as_os_str().is_empty() {
            errors.push("registry.airdrops_path must not be empty".to_string());
        }

        if self.state.status_path.as_os_str().is_empty() {
            errors.push("state.status_path must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn fill_blank(slot: &mut Option<String>, fallback: impl FnOnce() -> Option<String>) {
    if slot.as_deref().map_or(true, |v| v.trim().is_empty()) {
        *slot = fallback();
    }
}
