use clap::Parser;
use clawclaim::cli::{Cli, Commands};
use clawclaim::config::{AppConfig, LoggingConfig};
use clawclaim::error::Result;
use tracing::error;

mod main_modes;
mod main_runtime;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        error!("Run failed: {}", e);
        eprintln!("Run failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = match AppConfig::load_from(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            main_runtime::init_logging(&LoggingConfig::default());
            return Err(e.into());
        }
    };

    match cli.command {
        Commands::Scan => {
            main_runtime::init_logging(&config.logging);
            main_modes::run_scan(&config).await
        }
        Commands::Status => {
            main_runtime::init_logging_simple();
            main_modes::run_status(&config).await
        }
        Commands::Check => {
            main_runtime::init_logging_simple();
            main_modes::run_check(&config).await
        }
    }
}
