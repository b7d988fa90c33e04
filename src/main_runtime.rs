use clawclaim::config::LoggingConfig;
use clawclaim::error::{ClawError, Result};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroize;

/// Signing key from `PRIVATE_KEY`. The caller owns the string and must zeroize it.
pub fn private_key_from_env() -> Result<String> {
    let mut raw = std::env::var("PRIVATE_KEY")
        .map_err(|_| ClawError::Wallet("PRIVATE_KEY environment variable not set".to_string()))?;

    let key = raw.trim().to_string();
    raw.zeroize();

    if key.is_empty() {
        return Err(ClawError::Wallet("PRIVATE_KEY is empty".to_string()));
    }
    Ok(key)
}

pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},clawclaim=debug", config.level))
    });

    // File logging is opt-in via CLAW_LOG_DIR.
    //
    // `tracing_appender::rolling::daily` panics if it can't create the initial
    // log file, so writability is checked first.
    let log_dir = std::env::var("CLAW_LOG_DIR").ok();
    let file_layer = log_dir.as_ref().and_then(|log_dir| {
        if std::fs::create_dir_all(log_dir).is_err() {
            eprintln!(
                "Warning: Could not create log directory {}, file logging disabled",
                log_dir
            );
            return None;
        }

        let test_path = std::path::Path::new(log_dir).join(".clawclaim_write_test");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&test_path)
        {
            Ok(_) => {
                let _ = std::fs::remove_file(&test_path);

                let file_appender = tracing_appender::rolling::daily(log_dir, "clawclaim.log");
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                // The process is a bounded job; the guard lives until exit.
                Box::leak(Box::new(guard));

                Some(
                    tracing_subscriber::fmt::layer()
                        .with_writer(non_blocking)
                        .with_ansi(false)
                        .with_target(true),
                )
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not write to log directory {} ({}), file logging disabled",
                    log_dir, e
                );
                None
            }
        }
    });

    let (plain_console, json_console) = if config.json {
        (None, Some(tracing_subscriber::fmt::layer().json().with_target(true)))
    } else {
        (
            Some(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            ),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(plain_console)
        .with(json_console)
        .with(file_layer)
        .init();
}

pub fn init_logging_simple() {
    // Minimal logging for read-only commands
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .try_init();
}
