use clawclaim::adapters::{AlloyChainClient, FeishuNotifier, NeynarNotifier, Notifier};
use clawclaim::config::AppConfig;
use clawclaim::domain::{NotifyDecision, ProtocolType, DRY_RUN_SENTINEL};
use clawclaim::error::{ClawError, Result};
use clawclaim::persistence::{JsonFileStore, StatusTracker};
use clawclaim::registry::{AirdropRegistry, FileProofLoader, UserRegistry};
use clawclaim::services::ScanService;
use std::sync::Arc;
use tracing::info;

fn validated(config: &AppConfig) -> Result<()> {
    config
        .validate()
        .map_err(|errors| ClawError::Validation(errors.join("; ")))
}

fn build_notifier(config: &AppConfig) -> Option<Arc<dyn Notifier>> {
    let notifier = &config.notifier;
    if let Some(url) = notifier
        .feishu_webhook_url
        .as_ref()
        .filter(|url| !url.trim().is_empty())
    {
        return Some(FeishuNotifier::new(url.clone()) as Arc<dyn Notifier>);
    }

    NeynarNotifier::from_parts(
        &notifier.neynar_url,
        notifier.neynar_api_key.clone(),
        notifier.neynar_signer_uuid.clone(),
    )
    .map(|n| n as Arc<dyn Notifier>)
}

pub async fn run_scan(config: &AppConfig) -> Result<()> {
    validated(config)?;

    let users = UserRegistry::load(&config.registry.users_path).await?;
    let airdrops = AirdropRegistry::load(&config.registry.airdrops_path).await?;
    let targets = users.targets();

    let private_key = crate::main_runtime::private_key_from_env()?;
    let chain = Arc::new(AlloyChainClient::connect(&config.chain.rpc_url, private_key)?);

    let notifier = build_notifier(config);
    if notifier.is_none() {
        info!("No notifier configured (NEYNAR_API_KEY/NEYNAR_SIGNER_UUID or FEISHU_WEBHOOK_URL); reports will only be logged");
    }

    let service = ScanService::new(
        chain,
        Arc::new(FileProofLoader::new(config.registry.proofs_root.clone())),
        Arc::new(JsonFileStore::new(&config.state.status_path)),
        notifier,
        config.chain.network_label.clone(),
    );

    let report = service.run_once(&targets, &airdrops.airdrops).await?;

    if report.decision != NotifyDecision::Silent && !report.delivered {
        if let Some(message) = &report.message {
            info!("Undelivered report:\n{}", message);
        }
    }

    info!(
        "Run finished: {} action(s), {} skipped, status {} -> {}",
        report.scan.actions(),
        report.scan.skipped,
        report.previous,
        report.current
    );
    Ok(())
}

pub async fn run_status(config: &AppConfig) -> Result<()> {
    let tracker = StatusTracker::new(Arc::new(JsonFileStore::new(&config.state.status_path)));
    let status = tracker.load().await;
    println!("{}", status);
    Ok(())
}

pub async fn run_check(config: &AppConfig) -> Result<()> {
    let users = UserRegistry::load(&config.registry.users_path).await?;
    let airdrops = AirdropRegistry::load(&config.registry.airdrops_path).await?;

    let targets = users.targets();
    println!(
        "Targets: {} valid of {} listed",
        targets.len(),
        users.users.len()
    );

    for drop in &airdrops.airdrops {
        let verdict = match (drop.contract_address(), &drop.protocol) {
            (None, _) => "SKIP invalid contract address".to_string(),
            (Some(_), ProtocolType::Unsupported(kind)) => {
                format!("SKIP unsupported type '{}'", kind)
            }
            (Some(addr), ProtocolType::Merkle) if drop.proofs.is_none() => {
                format!("SKIP no proofs reference ({})", addr)
            }
            (Some(addr), protocol) if addr == DRY_RUN_SENTINEL => {
                format!("DRY {} (contract is 0x0)", protocol)
            }
            (Some(addr), protocol) => format!("OK {} {}", protocol, addr),
        };
        println!("[{}] {} ({}): {}", drop.id, drop.name, drop.token_symbol, verdict);
    }

    Ok(())
}
